use crate::app::AppContext;
use crate::app::settings::Interaction;
use crate::domain::{AppError, PromptOutline, PromptStyle, RenderedPrompt};
use crate::ports::{LayoutRenderer, SlotInput, TemplateStore};

/// Options for the structured prompt builder.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub style: PromptStyle,
    pub outline: PromptOutline,
    pub interaction: Interaction,
}

/// Assemble a prompt from outline sections.
///
/// Sections not given up front are prompted once each when interaction is
/// enabled; empty answers leave the section out.
pub fn execute<S, L>(
    ctx: &AppContext<S, L>,
    options: &BuildOptions,
    input: &mut dyn SlotInput,
) -> Result<RenderedPrompt, AppError>
where
    S: TemplateStore,
    L: LayoutRenderer,
{
    let mut outline = options.outline.clone();
    if options.interaction.is_enabled() {
        for section in outline.missing() {
            let answer = input.read_slot(&section.slot(), 1)?.ok_or(AppError::Interrupted)?;
            if !answer.trim().is_empty() {
                outline.set(section, answer);
            }
        }
    }

    let sections = outline.sections()?;
    let text = ctx.layouts().render(options.style, &sections)?;
    tracing::info!(style = %options.style, sections = sections.len(), "built prompt");

    Ok(RenderedPrompt { template_id: format!("build:{}", options.style), text })
}
