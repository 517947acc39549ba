mod clipboard_writer;
mod layout_renderer;
mod slot_input;
mod template_store;

pub use clipboard_writer::ClipboardWriter;
pub use layout_renderer::LayoutRenderer;
pub use slot_input::SlotInput;
pub use template_store::TemplateStore;
