use serde::Serialize;

use super::binding::Binding;
use super::template::{Segment, Template};

/// Final prompt text ready for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPrompt {
    pub template_id: String,
    pub text: String,
}

/// Substitute a binding into a template.
///
/// Single pass over the segments: substituted values are never scanned for
/// placeholders, and no whitespace is added between segments.
pub fn render(template: &Template, binding: &Binding) -> RenderedPrompt {
    let mut text = String::with_capacity(template.body().len());
    for segment in template.segments() {
        match segment {
            Segment::Literal(literal) => text.push_str(literal),
            Segment::Placeholder(name) => text.push_str(binding.get(name).unwrap_or_default()),
        }
    }
    RenderedPrompt { template_id: template.id().to_string(), text }
}
