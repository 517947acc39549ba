//! Prompt templates: an ordered skeleton of literal text and named slots.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::AppError;

/// A single named placeholder declared by a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default = "default_required")]
    pub required: bool,
    /// Hint for interactive input: read until an empty line.
    #[serde(default)]
    pub multiline: bool,
}

fn default_required() -> bool {
    true
}

impl Slot {
    pub fn required(name: impl Into<String>) -> Self {
        Self { name: name.into(), description: None, default: None, required: true, multiline: false }
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self { required: false, ..Self::required(name) }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }
}

/// One piece of a template body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(String),
}

/// Catalog listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
}

/// A validated prompt template.
///
/// Construction through [`Template::new`] guarantees that every placeholder in the
/// body has a declared slot, that slot names are unique, that every slot is
/// used by the body, and that no required slot defaults to an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    id: String,
    name: String,
    category: String,
    description: String,
    slots: Vec<Slot>,
    body: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        slots: Vec<Slot>,
        body: impl Into<String>,
    ) -> Result<Self, AppError> {
        let id = id.into();
        let body = body.into();
        let invalid = |reason: String| AppError::TemplateDefinition { id: id.clone(), reason };

        if id.trim().is_empty() {
            return Err(invalid("template id is empty".to_string()));
        }

        let mut declared = HashSet::new();
        for slot in &slots {
            if !is_slot_name(&slot.name) {
                return Err(invalid(format!("slot name '{}' is not an identifier", slot.name)));
            }
            if !declared.insert(slot.name.as_str()) {
                return Err(invalid(format!("slot '{}' is declared twice", slot.name)));
            }
            if slot.required && slot.default.as_deref().is_some_and(str::is_empty) {
                return Err(invalid(format!("required slot '{}' has an empty default", slot.name)));
            }
        }

        let segments = parse_segments(&body);
        let mut referenced = HashSet::new();
        for segment in &segments {
            if let Segment::Placeholder(name) = segment {
                if !declared.contains(name.as_str()) {
                    return Err(invalid(format!("placeholder '{{{name}}}' has no declared slot")));
                }
                referenced.insert(name.as_str());
            }
        }

        if let Some(unused) = slots.iter().find(|slot| !referenced.contains(slot.name.as_str())) {
            return Err(invalid(format!("slot '{}' is never used in the body", unused.name)));
        }

        Ok(Self {
            id,
            name: name.into(),
            category: category.into(),
            description: description.into(),
            slots,
            body,
            segments,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Slots in declaration order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.name == name)
    }

    /// Raw body text as declared.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }

    /// Case-insensitive keyword match over metadata and body.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        [&self.id, &self.name, &self.description, &self.category, &self.body]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Split a template body into literal text and `{name}` placeholders.
///
/// A `{` that does not open a `{identifier}` token stays literal.
pub fn parse_segments(body: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = body;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_slot_name(&after[..close]) => {
                literal.push_str(&rest[..open]);
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(after[..close].to_string()));
                rest = &after[close + 1..];
            }
            _ => {
                literal.push_str(&rest[..=open]);
                rest = after;
            }
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

fn is_slot_name(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
