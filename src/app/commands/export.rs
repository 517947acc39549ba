//! Delivery of rendered prompts and Markdown export of the catalog.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::catalog::group_by_category;
use crate::app::AppContext;
use crate::domain::{AppError, Destination, RenderedPrompt, Template, WriteMode};
use crate::ports::{ClipboardWriter, LayoutRenderer, TemplateStore};

const STDOUT_LABEL: &str = "<stdout>";

/// Where a prompt ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Stdout,
    File { path: PathBuf, appended: bool },
    Clipboard,
}

/// Send a rendered prompt to its destination.
///
/// The clipboard is opened only when it is the destination.
pub fn deliver<W, C, F>(
    rendered: &RenderedPrompt,
    destination: &Destination,
    stdout: &mut W,
    open_clipboard: F,
) -> Result<Delivery, AppError>
where
    W: Write,
    C: ClipboardWriter,
    F: FnOnce() -> Result<C, AppError>,
{
    match destination {
        Destination::Stdout => {
            write_stdout(stdout, &rendered.text)?;
            Ok(Delivery::Stdout)
        }
        Destination::File { path, mode } => {
            write_file(path, &rendered.text, *mode)?;
            tracing::info!(path = %path.display(), ?mode, "wrote prompt");
            Ok(Delivery::File { path: path.clone(), appended: *mode == WriteMode::Append })
        }
        Destination::Clipboard => {
            open_clipboard()?.write_text(&rendered.text)?;
            Ok(Delivery::Clipboard)
        }
    }
}

fn write_stdout<W: Write>(stdout: &mut W, text: &str) -> Result<(), AppError> {
    let to_err = |err| AppError::write_failed(STDOUT_LABEL, err);
    stdout.write_all(text.as_bytes()).map_err(to_err)?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n").map_err(to_err)?;
    }
    stdout.flush().map_err(to_err)
}

/// Write `text` to `path`; parent directories must already exist.
pub fn write_file(path: &Path, text: &str, mode: WriteMode) -> Result<(), AppError> {
    let result = match mode {
        WriteMode::Overwrite => fs::write(path, text),
        WriteMode::Append => OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(text.as_bytes())),
    };
    result.map_err(|err| AppError::write_failed(path, err))
}

/// Export the whole catalog as Markdown.
///
/// Defaults to `prompt-templates-<YYYYMMDD>.md` in the working directory.
pub fn export_catalog<S, L>(
    ctx: &AppContext<S, L>,
    output: Option<PathBuf>,
    now: DateTime<Local>,
) -> Result<PathBuf, AppError>
where
    S: TemplateStore,
    L: LayoutRenderer,
{
    let path = output.unwrap_or_else(|| default_export_path(now));
    let document = catalog_document(ctx.templates().templates(), now);
    write_file(&path, &document, WriteMode::Overwrite)?;
    tracing::info!(path = %path.display(), "exported catalog");
    Ok(path)
}

pub fn default_export_path(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("prompt-templates-{}.md", now.format("%Y%m%d")))
}

/// Render the catalog as a Markdown document grouped by category.
pub fn catalog_document(templates: &[Template], now: DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str("# Prompt template catalog\n\n");
    out.push_str(&format!("Exported: {}\n", now.format("%Y-%m-%d %H:%M:%S")));
    out.push_str(&format!("Templates: {}\n", templates.len()));

    let summaries: Vec<_> = templates.iter().map(Template::summary).collect();
    for (category, entries) in group_by_category(&summaries) {
        out.push_str(&format!("\n## {category}\n"));
        for summary in entries {
            let Some(template) = templates.iter().find(|t| t.id() == summary.id) else {
                continue;
            };
            push_template(&mut out, template);
        }
    }
    out
}

fn push_template(out: &mut String, template: &Template) {
    out.push_str(&format!("\n### {} (`{}`)\n\n", template.name(), template.id()));
    out.push_str(&format!("> {}\n\n", template.description()));

    if !template.slots().is_empty() {
        let slots: Vec<String> = template
            .slots()
            .iter()
            .map(|slot| {
                if slot.required && slot.default.is_none() {
                    format!("`{{{}}}`", slot.name)
                } else {
                    format!("`{{{}}}` (optional)", slot.name)
                }
            })
            .collect();
        out.push_str(&format!("Slots: {}\n\n", slots.join(", ")));
    }

    let fence = "`".repeat(longest_backtick_run(template.body()).max(2) + 1);
    out.push_str(&format!("{fence}text\n{}\n{fence}\n", template.body()));
}

fn longest_backtick_run(text: &str) -> usize {
    text.split(|c| c != '`').map(str::len).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::io;

    use chrono::TimeZone;

    use super::*;
    use crate::testing::{MockClipboard, test_context};

    fn rendered(text: &str) -> RenderedPrompt {
        RenderedPrompt { template_id: "code-review".to_string(), text: text.to_string() }
    }

    fn no_clipboard() -> Result<MockClipboard, AppError> {
        panic!("clipboard must not be opened")
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn stdout_gets_trailing_newline_once() {
        let mut out = Vec::new();
        deliver(&rendered("hello"), &Destination::Stdout, &mut out, no_clipboard).unwrap();
        assert_eq!(out, b"hello\n");

        let mut out = Vec::new();
        deliver(&rendered("hello\n"), &Destination::Stdout, &mut out, no_clipboard).unwrap();
        assert_eq!(out, b"hello\n");
    }

    #[test]
    fn file_round_trip_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompt.md");
        let text = "line one\n\n  indented {not_a_slot}\ttab\nno trailing newline";
        let destination = Destination::File { path: path.clone(), mode: WriteMode::Overwrite };

        let delivery = deliver(&rendered(text), &destination, &mut io::sink(), no_clipboard).unwrap();
        assert_eq!(delivery, Delivery::File { path: path.clone(), appended: false });
        assert_eq!(fs::read(&path).unwrap(), text.as_bytes());
    }

    #[test]
    fn overwrite_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompt.md");
        fs::write(&path, "old content that is longer").unwrap();

        write_file(&path, "new", WriteMode::Overwrite).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn append_mode_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompts.md");
        fs::write(&path, "first\n").unwrap();

        let destination = Destination::File { path: path.clone(), mode: WriteMode::Append };
        let delivery = deliver(&rendered("second\n"), &destination, &mut io::sink(), no_clipboard).unwrap();
        assert_eq!(delivery, Delivery::File { path: path.clone(), appended: true });
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn missing_parent_directory_is_a_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("prompt.md");
        let destination = Destination::File { path: path.clone(), mode: WriteMode::Overwrite };

        let err = deliver(&rendered("x"), &destination, &mut io::sink(), no_clipboard).unwrap_err();
        match err {
            AppError::WriteFailed { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn clipboard_receives_text() {
        let clipboard = MockClipboard::new();
        let observer = clipboard.clone();

        let delivery =
            deliver(&rendered("copy me"), &Destination::Clipboard, &mut io::sink(), move || {
                Ok(clipboard)
            })
            .unwrap();

        assert_eq!(delivery, Delivery::Clipboard);
        assert_eq!(observer.written_text().as_deref(), Some("copy me"));
    }

    #[test]
    fn clipboard_failure_is_reported() {
        let err = deliver(&rendered("x"), &Destination::Clipboard, &mut io::sink(), || {
            Ok(MockClipboard::failing())
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Clipboard(_)));
    }

    #[test]
    fn catalog_document_groups_by_category() {
        let ctx = test_context();
        let doc = catalog_document(ctx.templates().templates(), fixed_now());

        assert!(doc.starts_with("# Prompt template catalog\n\nExported: 2026-03-14 09:26:53\n"));
        assert!(doc.contains(&format!("Templates: {}\n", ctx.templates().templates().len())));
        let architecture = doc.find("\n## architecture\n").unwrap();
        let operations = doc.find("\n## operations\n").unwrap();
        assert!(architecture < operations);
        assert!(doc.contains("### Code review (`code-review`)"));
        assert!(doc.contains("Slots: `{language}`, `{code}`"));
        assert!(doc.contains("`{scale}` (optional)"));
    }

    #[test]
    fn bodies_with_code_fences_get_longer_fences() {
        let ctx = test_context();
        let doc = catalog_document(ctx.templates().templates(), fixed_now());
        assert!(doc.contains("````text\nOptimise the following SQL query."));
    }

    #[test]
    fn export_catalog_writes_to_requested_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.md");
        let ctx = test_context();

        let written = export_catalog(&ctx, Some(path.clone()), fixed_now()).unwrap();
        assert_eq!(written, path);
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, catalog_document(ctx.templates().templates(), fixed_now()));
    }

    #[test]
    fn default_export_path_uses_date() {
        assert_eq!(default_export_path(fixed_now()), PathBuf::from("prompt-templates-20260314.md"));
    }
}
