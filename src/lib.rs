//! promptgen: render LLM prompts from a built-in template catalog.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    BuildOptions, Delivery, Interaction, TemplateDetail, UseOptions, build_prompt, deliver,
    export_catalog, list_templates, render_template, search_templates, show_template,
    use_template,
};
pub use domain::{
    AppError, Destination, PromptOutline, PromptStyle, RenderedPrompt, TemplateSummary, WriteMode,
};
