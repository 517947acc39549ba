use crate::ports::{LayoutRenderer, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: TemplateStore, L: LayoutRenderer> {
    templates: S,
    layouts: L,
}

impl<S: TemplateStore, L: LayoutRenderer> AppContext<S, L> {
    /// Create a new application context.
    pub fn new(templates: S, layouts: L) -> Self {
        Self { templates, layouts }
    }

    /// Get a reference to the template catalog.
    pub fn templates(&self) -> &S {
        &self.templates
    }

    /// Get a reference to the builder layout renderer.
    pub fn layouts(&self) -> &L {
        &self.layouts
    }
}
