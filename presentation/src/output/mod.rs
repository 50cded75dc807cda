//! Output formatting

pub mod console;
pub mod document;

pub use console::ConsoleFormatter;
pub use document::DocumentFormatter;
