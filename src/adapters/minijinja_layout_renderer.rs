use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, PromptStyle, SectionView};
use crate::ports::LayoutRenderer;

mod layouts {
    pub static XML: &str = include_str!("../assets/layouts/xml.jinja");
    pub static MARKDOWN: &str = include_str!("../assets/layouts/markdown.jinja");
    pub static PLAIN: &str = include_str!("../assets/layouts/plain.jinja");
}

const SECTION_SEPARATOR: &str = "\n\n";

/// Builder layouts rendered with Minijinja.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaLayoutRenderer;

impl MinijinjaLayoutRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutRenderer for MinijinjaLayoutRenderer {
    fn render(&self, style: PromptStyle, sections: &[SectionView]) -> Result<String, AppError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        env.render_str(layout_source(style), context! { sections, separator => SECTION_SEPARATOR })
            .map_err(|err| AppError::Render {
                template: format!("{style} layout"),
                reason: err.to_string(),
            })
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn layout_source(style: PromptStyle) -> &'static str {
    match style {
        PromptStyle::Xml => layouts::XML,
        PromptStyle::Markdown => layouts::MARKDOWN,
        PromptStyle::Plain => layouts::PLAIN,
    }
}
