mod mock_clipboard;
mod scripted_slot_input;

pub use mock_clipboard::MockClipboard;
pub use scripted_slot_input::ScriptedSlotInput;

use crate::adapters::{EmbeddedTemplateStore, MinijinjaLayoutRenderer};
use crate::app::AppContext;

/// Context over the built-in catalog.
pub fn test_context() -> AppContext<EmbeddedTemplateStore, MinijinjaLayoutRenderer> {
    let templates = EmbeddedTemplateStore::load().expect("built-in catalog should load");
    AppContext::new(templates, MinijinjaLayoutRenderer::new())
}
