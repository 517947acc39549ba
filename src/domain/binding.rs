//! Slot resolution: turning supplied and prompted values into a complete binding.

use std::collections::BTreeMap;

use super::error::AppError;
use super::template::{Slot, Template};
use crate::ports::SlotInput;

/// Attempts allowed for a required slot during interactive input.
pub const MAX_SLOT_ATTEMPTS: u32 = 3;

/// Resolved slot values for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    values: BTreeMap<String, String>,
}

impl Binding {
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.values.get(slot).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Resolve a binding from supplied values only.
///
/// Empty supplied values count as absent. Absent slots fall back to their
/// default; required slots without one fail with [`AppError::MissingSlot`].
pub fn resolve(
    template: &Template,
    supplied: &BTreeMap<String, String>,
) -> Result<Binding, AppError> {
    warn_unknown_keys(template, supplied);

    let mut values = BTreeMap::new();
    for slot in template.slots() {
        let value = match supplied_value(supplied, slot) {
            Some(value) => value.to_string(),
            None => fallback(template, slot)?,
        };
        values.insert(slot.name.clone(), value);
    }
    Ok(Binding { values })
}

/// Resolve a binding, prompting for every slot not supplied.
///
/// Slots are prompted once each, in declaration order. Empty input for a
/// required slot without a default is retried up to `max_attempts` times in
/// total before failing.
pub fn resolve_interactive(
    template: &Template,
    supplied: &BTreeMap<String, String>,
    input: &mut dyn SlotInput,
    max_attempts: u32,
) -> Result<Binding, AppError> {
    warn_unknown_keys(template, supplied);

    let mut values = BTreeMap::new();
    for slot in template.slots() {
        let value = match supplied_value(supplied, slot) {
            Some(value) => value.to_string(),
            None => prompt_slot(template, slot, input, max_attempts)?,
        };
        values.insert(slot.name.clone(), value);
    }
    Ok(Binding { values })
}

fn prompt_slot(
    template: &Template,
    slot: &Slot,
    input: &mut dyn SlotInput,
    max_attempts: u32,
) -> Result<String, AppError> {
    let mut attempt = 1;
    loop {
        let answer = input.read_slot(slot, attempt)?.ok_or(AppError::Interrupted)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        if !slot.required || slot.default.is_some() {
            return fallback(template, slot);
        }
        if attempt >= max_attempts.max(1) {
            tracing::debug!(slot = %slot.name, attempts = attempt, "giving up on required slot");
            return Err(missing(template, slot));
        }
        attempt += 1;
    }
}

fn supplied_value<'a>(supplied: &'a BTreeMap<String, String>, slot: &Slot) -> Option<&'a str> {
    supplied.get(&slot.name).map(String::as_str).filter(|value| !value.is_empty())
}

fn fallback(template: &Template, slot: &Slot) -> Result<String, AppError> {
    match (&slot.default, slot.required) {
        (Some(default), _) => Ok(default.clone()),
        (None, false) => Ok(String::new()),
        (None, true) => Err(missing(template, slot)),
    }
}

fn missing(template: &Template, slot: &Slot) -> AppError {
    AppError::MissingSlot { template: template.id().to_string(), slot: slot.name.clone() }
}

fn warn_unknown_keys(template: &Template, supplied: &BTreeMap<String, String>) {
    for key in supplied.keys().filter(|key| template.slot(key).is_none()) {
        tracing::warn!(template = template.id(), slot = %key, "ignoring value for unknown slot");
    }
}

/// Parse `KEY=VALUE` assignments, splitting on the first `=`.
///
/// Later assignments to the same key replace earlier ones.
pub fn parse_assignments<S: AsRef<str>>(
    assignments: &[S],
) -> Result<BTreeMap<String, String>, AppError> {
    let mut supplied = BTreeMap::new();
    for raw in assignments {
        let raw = raw.as_ref();
        let (key, value) =
            raw.split_once('=').ok_or_else(|| AppError::InvalidAssignment(raw.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::InvalidAssignment(raw.to_string()));
        }
        supplied.insert(key.to_string(), value.to_string());
    }
    Ok(supplied)
}
