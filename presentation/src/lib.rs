//! Presentation layer for eli
//!
//! This crate contains the single-page web surface, CLI definitions,
//! and output formatters.

pub mod cli;
pub mod output;
pub mod progress;
pub mod web;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::{console::ConsoleFormatter, document::DocumentFormatter};
pub use progress::Spinner;
pub use web::{AppState, SessionStore, router};
