//! Human-readable and JSON output for catalog commands.

use std::fmt::Write as _;

use serde::Serialize;

use crate::app::api::{Delivery, TemplateDetail};
use crate::app::commands::catalog::group_by_category;
use crate::domain::{AppError, Slot, TemplateSummary};

pub(super) fn to_json<T: Serialize + ?Sized>(what: &str, value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|err| AppError::Serialization { what: what.to_string(), details: err.to_string() })
}

pub(super) fn format_listing(summaries: &[TemplateSummary]) -> String {
    let mut out = String::new();
    for (category, entries) in group_by_category(summaries) {
        let _ = writeln!(out, "{category}");
        for entry in entries {
            let _ = writeln!(out, "  {:<22} {}", entry.id, entry.name);
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{} template(s)", summaries.len());
    out
}

pub(super) fn format_detail(detail: &TemplateDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", detail.name, detail.id);
    let _ = writeln!(out, "Category: {}", detail.category);
    let _ = writeln!(out, "{}", detail.description);

    if !detail.slots.is_empty() {
        let _ = writeln!(out, "\nSlots:");
        for slot in &detail.slots {
            let _ = writeln!(out, "  {}", slot_line(slot));
        }
    }

    let _ = writeln!(out, "\nTemplate:\n{}", detail.body);
    out
}

fn slot_line(slot: &Slot) -> String {
    let mut flags = vec![if slot.required && slot.default.is_none() { "required" } else { "optional" }];
    if slot.multiline {
        flags.push("multi-line");
    }

    let mut line = format!("{{{}}} ({})", slot.name, flags.join(", "));
    if let Some(description) = &slot.description {
        line.push_str(&format!(" - {description}"));
    }
    if let Some(default) = &slot.default {
        line.push_str(&format!(" [default: {default}]"));
    }
    line
}

/// Confirmation for deliveries that do not print the prompt itself.
pub(super) fn report(delivery: &Delivery) {
    match delivery {
        Delivery::Stdout => {}
        Delivery::File { path, appended: false } => {
            println!("✅ Saved prompt to {}", path.display())
        }
        Delivery::File { path, appended: true } => {
            println!("✅ Appended prompt to {}", path.display())
        }
        Delivery::Clipboard => println!("✅ Copied prompt to clipboard"),
    }
}
