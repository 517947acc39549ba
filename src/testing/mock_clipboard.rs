use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Mock clipboard for testing; clones share the written text.
#[derive(Clone, Default)]
pub struct MockClipboard {
    written_text: Rc<RefCell<Option<String>>>,
    should_fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { should_fail: true, ..Self::default() }
    }

    pub fn written_text(&self) -> Option<String> {
        self.written_text.borrow().clone()
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.should_fail {
            return Err(AppError::Clipboard("Mock clipboard error".to_string()));
        }
        *self.written_text.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
