//! Read-only catalog queries: list, search, show.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{AppError, Slot, Template, TemplateSummary};
use crate::ports::{LayoutRenderer, TemplateStore};

/// Full description of one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDetail {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub slots: Vec<Slot>,
    pub body: String,
}

impl From<&Template> for TemplateDetail {
    fn from(template: &Template) -> Self {
        Self {
            id: template.id().to_string(),
            name: template.name().to_string(),
            category: template.category().to_string(),
            description: template.description().to_string(),
            slots: template.slots().to_vec(),
            body: template.body().to_string(),
        }
    }
}

/// List templates, optionally restricted to one category (case-insensitive).
pub fn list<S, L>(ctx: &AppContext<S, L>, category: Option<&str>) -> Vec<TemplateSummary>
where
    S: TemplateStore,
    L: LayoutRenderer,
{
    let summaries = ctx.templates().list();
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => summaries
            .into_iter()
            .filter(|summary| summary.category.eq_ignore_ascii_case(category))
            .collect(),
        None => summaries,
    }
}

/// Templates whose metadata or body contains `keyword`.
pub fn search<S, L>(ctx: &AppContext<S, L>, keyword: &str) -> Vec<TemplateDetail>
where
    S: TemplateStore,
    L: LayoutRenderer,
{
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Vec::new();
    }
    let hits: Vec<TemplateDetail> = ctx
        .templates()
        .templates()
        .iter()
        .filter(|template| template.matches_keyword(keyword))
        .map(TemplateDetail::from)
        .collect();
    tracing::debug!(keyword, hits = hits.len(), "searched catalog");
    hits
}

pub fn show<S, L>(ctx: &AppContext<S, L>, id: &str) -> Result<TemplateDetail, AppError>
where
    S: TemplateStore,
    L: LayoutRenderer,
{
    ctx.templates().get(id).map(TemplateDetail::from)
}

/// Group summaries by category, keeping catalog order inside each group.
pub fn group_by_category(summaries: &[TemplateSummary]) -> BTreeMap<&str, Vec<&TemplateSummary>> {
    summaries.iter().fold(BTreeMap::new(), |mut map, summary| {
        map.entry(summary.category.as_str()).or_insert_with(Vec::new).push(summary);
        map
    })
}
