use std::path::PathBuf;

/// How an existing file is treated on export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    #[default]
    Overwrite,
    Append,
}

/// Where a rendered prompt is delivered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Destination {
    #[default]
    Stdout,
    File { path: PathBuf, mode: WriteMode },
    Clipboard,
}

impl Destination {
    /// Build a destination from the shared output flags.
    pub fn from_flags(output: Option<PathBuf>, append: bool, clipboard: bool) -> Self {
        match (output, clipboard) {
            (Some(path), _) => {
                let mode = if append { WriteMode::Append } else { WriteMode::Overwrite };
                Destination::File { path, mode }
            }
            (None, true) => Destination::Clipboard,
            (None, false) => Destination::Stdout,
        }
    }
}
