pub mod build;
pub mod catalog;
pub mod export;
pub mod use_template;
