use crate::domain::{AppError, Template, TemplateSummary};

/// Port for reading the prompt template catalog.
pub trait TemplateStore {
    /// All templates, ordered by category then id.
    fn templates(&self) -> &[Template];

    /// Summaries of every template in catalog order.
    fn list(&self) -> Vec<TemplateSummary> {
        self.templates().iter().map(Template::summary).collect()
    }

    /// Look up a template by id.
    ///
    /// Unknown ids fail with [`AppError::TemplateNotFound`], carrying ids that
    /// contain (or are contained in) the requested one as suggestions.
    fn get(&self, id: &str) -> Result<&Template, AppError> {
        if let Some(template) = self.templates().iter().find(|t| t.id() == id) {
            return Ok(template);
        }

        let wanted = normalize_id(id);
        let suggestions = self
            .templates()
            .iter()
            .map(Template::id)
            .filter(|candidate| {
                let candidate = normalize_id(candidate);
                !wanted.is_empty() && (candidate.contains(&wanted) || wanted.contains(&candidate))
            })
            .map(str::to_string)
            .collect();

        Err(AppError::TemplateNotFound { id: id.to_string(), suggestions })
    }
}

fn normalize_id(id: &str) -> String {
    id.trim().to_lowercase().replace('_', "-")
}
