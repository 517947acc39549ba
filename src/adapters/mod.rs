pub mod clipboard_arboard;
pub mod dialoguer_slot_input;
pub mod embedded_template_store;
pub mod minijinja_layout_renderer;

pub use clipboard_arboard::ArboardClipboard;
pub use dialoguer_slot_input::DialoguerSlotInput;
pub use embedded_template_store::EmbeddedTemplateStore;
pub use minijinja_layout_renderer::MinijinjaLayoutRenderer;
