use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code for an unknown template id.
pub const EXIT_NOT_FOUND: i32 = 2;
/// Exit code for a required slot that could not be resolved.
pub const EXIT_MISSING_SLOT: i32 = 3;
/// Exit code for an unwritable export destination.
pub const EXIT_WRITE_FAILED: i32 = 4;
/// Exit code for interrupted interactive input (128 + SIGINT).
pub const EXIT_INTERRUPTED: i32 = 130;
/// Exit code for every other failure.
pub const EXIT_GENERIC: i32 = 1;

/// Library-wide error type for promptgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Requested template id is not in the catalog.
    #[error("Template '{id}' not found{}", format_suggestions(.suggestions))]
    TemplateNotFound { id: String, suggestions: Vec<String> },

    /// A required slot has no value after resolution.
    #[error("Missing value for required slot '{slot}' of template '{template}'")]
    MissingSlot { template: String, slot: String },

    /// Export destination could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Interactive input was cancelled by the user.
    #[error("Input interrupted")]
    Interrupted,

    /// A `KEY=VALUE` slot assignment could not be parsed.
    #[error("Invalid slot assignment '{0}': expected KEY=VALUE")]
    InvalidAssignment(String),

    /// An embedded template asset is malformed.
    #[error("Invalid template definition '{id}': {reason}")]
    TemplateDefinition { id: String, reason: String },

    /// The structured builder was given no content at all.
    #[error("Nothing to build: every prompt section is empty")]
    EmptyPrompt,

    /// Underlying I/O failure outside of export.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Layout rendering failed.
    #[error("Failed to render {template}: {reason}")]
    Render { template: String, reason: String },

    /// Output serialization failed.
    #[error("Failed to serialize {what}: {details}")]
    Serialization { what: String, details: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(". Did you mean: {}?", suggestions.join(", "))
    }
}

impl AppError {
    pub fn write_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::WriteFailed { path: path.into(), source }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::TemplateNotFound { .. } => EXIT_NOT_FOUND,
            AppError::MissingSlot { .. } => EXIT_MISSING_SLOT,
            AppError::WriteFailed { .. } | AppError::Clipboard(_) => EXIT_WRITE_FAILED,
            AppError::Interrupted => EXIT_INTERRUPTED,
            AppError::InvalidAssignment(_)
            | AppError::TemplateDefinition { .. }
            | AppError::EmptyPrompt
            | AppError::Io(_)
            | AppError::Render { .. }
            | AppError::Serialization { .. } => EXIT_GENERIC,
        }
    }
}
