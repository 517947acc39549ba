pub mod binding;
pub mod destination;
pub mod error;
pub mod outline;
pub mod render;
pub mod template;

pub use binding::{Binding, MAX_SLOT_ATTEMPTS, parse_assignments, resolve, resolve_interactive};
pub use destination::{Destination, WriteMode};
pub use error::AppError;
pub use outline::{OutlineSection, PromptOutline, PromptStyle, SectionView};
pub use render::{RenderedPrompt, render};
pub use template::{Segment, Slot, Template, TemplateSummary, parse_segments};
