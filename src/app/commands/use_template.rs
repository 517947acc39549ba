use std::collections::BTreeMap;
use std::fs;
use std::io;

use crate::app::AppContext;
use crate::app::settings::Interaction;
use crate::domain::{AppError, RenderedPrompt, parse_assignments, render, resolve, resolve_interactive};
use crate::ports::{LayoutRenderer, SlotInput, TemplateStore};

/// Options for rendering one catalog template.
#[derive(Debug, Clone)]
pub struct UseOptions {
    pub template_id: String,
    /// Raw `KEY=VALUE` assignments, used verbatim.
    pub assignments: Vec<String>,
    /// `KEY=PATH` pairs whose file contents become the slot value.
    pub files: Vec<String>,
    pub interaction: Interaction,
}

/// Select, resolve, and render a template.
///
/// Nothing is written here; export happens only after a complete binding exists.
pub fn execute<S, L>(
    ctx: &AppContext<S, L>,
    options: &UseOptions,
    input: &mut dyn SlotInput,
) -> Result<RenderedPrompt, AppError>
where
    S: TemplateStore,
    L: LayoutRenderer,
{
    let template = ctx.templates().get(&options.template_id)?;
    let mut supplied = parse_assignments(&options.assignments)?;
    supplied.extend(read_value_files(&options.files)?);

    let binding = match options.interaction {
        Interaction::Prompt { max_attempts } => {
            resolve_interactive(template, &supplied, input, max_attempts)?
        }
        Interaction::Disabled => resolve(template, &supplied)?,
    };

    tracing::info!(template = template.id(), slots = binding.len(), "rendering template");
    Ok(render(template, &binding))
}

/// Read `KEY=PATH` pairs into slot values; file contents are kept verbatim.
fn read_value_files(files: &[String]) -> Result<BTreeMap<String, String>, AppError> {
    parse_assignments(files)?
        .into_iter()
        .map(|(key, path)| {
            let content = fs::read_to_string(&path).map_err(|err| {
                AppError::Io(io::Error::new(err.kind(), format!("{path}: {err}")))
            })?;
            tracing::debug!(slot = %key, path = %path, "read slot value from file");
            Ok((key, content))
        })
        .collect()
}
