//! Structured prompts assembled from five optional sections.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::AppError;
use super::template::Slot;

/// Layout applied to an outline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptStyle {
    /// Tagged sections, e.g. `<task>`.
    #[default]
    Xml,
    Markdown,
    Plain,
}

impl PromptStyle {
    pub const ALL: [PromptStyle; 3] = [PromptStyle::Xml, PromptStyle::Markdown, PromptStyle::Plain];

    pub fn name(self) -> &'static str {
        match self {
            PromptStyle::Xml => "xml",
            PromptStyle::Markdown => "markdown",
            PromptStyle::Plain => "plain",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PromptStyle::Xml => "XML tags",
            PromptStyle::Markdown => "Markdown headings",
            PromptStyle::Plain => "Plain text",
        }
    }
}

impl fmt::Display for PromptStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PromptStyle {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "xml" => Ok(PromptStyle::Xml),
            "markdown" | "md" => Ok(PromptStyle::Markdown),
            "plain" | "text" => Ok(PromptStyle::Plain),
            other => Err(format!("unknown style '{other}' (expected xml, markdown, or plain)")),
        }
    }
}

/// Section of an outline, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineSection {
    Role,
    Context,
    Task,
    Format,
    Constraints,
}

impl OutlineSection {
    pub const ALL: [OutlineSection; 5] = [
        OutlineSection::Role,
        OutlineSection::Context,
        OutlineSection::Task,
        OutlineSection::Format,
        OutlineSection::Constraints,
    ];

    pub fn key(self) -> &'static str {
        match self {
            OutlineSection::Role => "role",
            OutlineSection::Context => "context",
            OutlineSection::Task => "task",
            OutlineSection::Format => "format",
            OutlineSection::Constraints => "constraints",
        }
    }

    /// Slot definition used when the section is prompted interactively.
    pub fn slot(self) -> Slot {
        let slot = Slot::optional(self.key());
        match self {
            OutlineSection::Role => {
                slot.with_description("Role, e.g. 'You are a senior Go backend engineer'")
            }
            OutlineSection::Context => slot
                .with_description("Background: tech stack, business scenario, constraints")
                .multiline(),
            OutlineSection::Task => {
                slot.with_description("What the model should do").multiline()
            }
            OutlineSection::Format => {
                slot.with_description("Expected output, e.g. 'JSON', 'a comparison table'")
            }
            OutlineSection::Constraints => {
                slot.with_description("Extra limits, e.g. 'no third-party libraries'")
            }
        }
    }
}

/// Input of the structured builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptOutline {
    pub role: Option<String>,
    pub context: Option<String>,
    pub task: Option<String>,
    pub format: Option<String>,
    pub constraints: Option<String>,
}

/// A non-empty section handed to a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub key: &'static str,
    pub value: String,
}

impl PromptOutline {
    pub fn get(&self, section: OutlineSection) -> Option<&str> {
        let value = match section {
            OutlineSection::Role => &self.role,
            OutlineSection::Context => &self.context,
            OutlineSection::Task => &self.task,
            OutlineSection::Format => &self.format,
            OutlineSection::Constraints => &self.constraints,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }

    pub fn set(&mut self, section: OutlineSection, value: String) {
        let slot = match section {
            OutlineSection::Role => &mut self.role,
            OutlineSection::Context => &mut self.context,
            OutlineSection::Task => &mut self.task,
            OutlineSection::Format => &mut self.format,
            OutlineSection::Constraints => &mut self.constraints,
        };
        *slot = Some(value);
    }

    /// Sections still unset, in output order.
    pub fn missing(&self) -> Vec<OutlineSection> {
        OutlineSection::ALL.into_iter().filter(|section| self.get(*section).is_none()).collect()
    }

    /// Non-empty sections in output order; fails when there are none.
    pub fn sections(&self) -> Result<Vec<SectionView>, AppError> {
        let sections: Vec<SectionView> = OutlineSection::ALL
            .into_iter()
            .filter_map(|section| {
                self.get(section).map(|value| SectionView { key: section.key(), value: value.to_string() })
            })
            .collect();

        if sections.is_empty() {
            return Err(AppError::EmptyPrompt);
        }
        Ok(sections)
    }
}
