use std::collections::VecDeque;

use crate::domain::{AppError, Slot};
use crate::ports::SlotInput;

/// Slot input that replays scripted answers and records every question.
///
/// Once the script runs out it answers with an empty string, or reports an
/// interrupt when built with [`ScriptedSlotInput::interrupt_after_script`].
pub struct ScriptedSlotInput {
    answers: VecDeque<String>,
    asked: Vec<(String, u32)>,
    interrupt_when_done: bool,
}

impl ScriptedSlotInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
            interrupt_when_done: false,
        }
    }

    pub fn interrupt_after_script(mut self) -> Self {
        self.interrupt_when_done = true;
        self
    }

    /// `(slot name, attempt)` pairs in the order they were asked.
    pub fn asked(&self) -> Vec<(String, u32)> {
        self.asked.clone()
    }
}

impl SlotInput for ScriptedSlotInput {
    fn read_slot(&mut self, slot: &Slot, attempt: u32) -> Result<Option<String>, AppError> {
        self.asked.push((slot.name.clone(), attempt));
        match self.answers.pop_front() {
            Some(answer) => Ok(Some(answer)),
            None if self.interrupt_when_done => Ok(None),
            None => Ok(Some(String::new())),
        }
    }
}
