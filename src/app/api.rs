//! API Facade for the application.
//!
//! Builds the context over the built-in catalog and runs commands with the
//! real terminal, stdout, and clipboard adapters.

use std::io;
use std::path::PathBuf;

use crate::adapters::{
    ArboardClipboard, DialoguerSlotInput, EmbeddedTemplateStore, MinijinjaLayoutRenderer,
};
use crate::app::AppContext;
use crate::app::commands::{build, catalog, export, use_template as template_use};
use crate::domain::{AppError, Destination, RenderedPrompt, TemplateSummary};

pub use crate::app::commands::build::BuildOptions;
pub use crate::app::commands::catalog::TemplateDetail;
pub use crate::app::commands::export::Delivery;
pub use crate::app::commands::use_template::UseOptions;
pub use crate::app::settings::Interaction;

/// Create an `AppContext` over the built-in catalog.
pub fn create_context() -> Result<AppContext<EmbeddedTemplateStore, MinijinjaLayoutRenderer>, AppError>
{
    Ok(AppContext::new(EmbeddedTemplateStore::load()?, MinijinjaLayoutRenderer::new()))
}

// =============================================================================
// Catalog API
// =============================================================================

/// List built-in templates, optionally filtered by category.
pub fn list_templates(category: Option<&str>) -> Result<Vec<TemplateSummary>, AppError> {
    Ok(catalog::list(&create_context()?, category))
}

/// Search built-in templates by keyword.
pub fn search_templates(keyword: &str) -> Result<Vec<TemplateDetail>, AppError> {
    Ok(catalog::search(&create_context()?, keyword))
}

/// Describe one template.
pub fn show_template(id: &str) -> Result<TemplateDetail, AppError> {
    catalog::show(&create_context()?, id)
}

// =============================================================================
// Render API
// =============================================================================

/// Render a catalog template, prompting on the terminal when enabled.
pub fn use_template(options: &UseOptions) -> Result<RenderedPrompt, AppError> {
    let ctx = create_context()?;
    template_use::execute(&ctx, options, &mut DialoguerSlotInput::new())
}

/// Render a catalog template from verbatim `KEY=VALUE` assignments only.
pub fn render_template(id: &str, assignments: &[String]) -> Result<RenderedPrompt, AppError> {
    use_template(&UseOptions {
        template_id: id.to_string(),
        assignments: assignments.to_vec(),
        files: Vec::new(),
        interaction: Interaction::Disabled,
    })
}

/// Assemble a structured prompt, prompting on the terminal when enabled.
pub fn build_prompt(options: &BuildOptions) -> Result<RenderedPrompt, AppError> {
    let ctx = create_context()?;
    build::execute(&ctx, options, &mut DialoguerSlotInput::new())
}

// =============================================================================
// Export API
// =============================================================================

/// Deliver a rendered prompt to stdout, a file, or the system clipboard.
pub fn deliver(rendered: &RenderedPrompt, destination: &Destination) -> Result<Delivery, AppError> {
    export::deliver(rendered, destination, &mut io::stdout().lock(), ArboardClipboard::new)
}

/// Export the catalog as Markdown; returns the written path.
pub fn export_catalog(output: Option<PathBuf>) -> Result<PathBuf, AppError> {
    export::export_catalog(&create_context()?, output, chrono::Local::now())
}
