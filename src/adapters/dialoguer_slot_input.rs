use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::{AppError, Slot};
use crate::ports::SlotInput;

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerSlotInput;

impl DialoguerSlotInput {
    pub fn new() -> Self {
        Self
    }
}

impl SlotInput for DialoguerSlotInput {
    fn read_slot(&mut self, slot: &Slot, attempt: u32) -> Result<Option<String>, AppError> {
        if attempt > 1 {
            eprintln!("  '{}' is required.", slot.name);
        }

        let label = prompt_label(slot);
        if !slot.multiline {
            return read_line(&label);
        }

        eprintln!("{label} (multi-line, finish with an empty line)");
        let mut lines = Vec::new();
        loop {
            match read_line(">")? {
                None => return Ok(None),
                Some(line) if line.is_empty() => break,
                Some(line) => lines.push(line),
            }
        }
        Ok(Some(lines.join("\n")))
    }
}

fn read_line(prompt: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(DialoguerError::IO(err)) => Err(AppError::Io(err)),
    }
}

fn prompt_label(slot: &Slot) -> String {
    let mut label = slot.name.clone();
    if let Some(description) = &slot.description {
        label.push_str(&format!(" - {description}"));
    }
    match (&slot.default, slot.required) {
        (Some(default), _) => label.push_str(&format!(" [default: {default}]")),
        (None, false) => label.push_str(" [optional]"),
        (None, true) => {}
    }
    label
}
