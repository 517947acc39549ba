pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod logging;
pub mod settings;

pub use context::AppContext;
