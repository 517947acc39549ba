use crate::domain::{AppError, Slot};

/// Port for asking the user for a slot value.
pub trait SlotInput {
    /// Read a value for `slot`. `attempt` starts at 1.
    ///
    /// Returns `Ok(None)` when the user interrupted input.
    fn read_slot(&mut self, slot: &Slot, attempt: u32) -> Result<Option<String>, AppError>;
}
