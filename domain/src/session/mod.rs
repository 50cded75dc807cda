//! Session state management

pub mod entities;
pub mod phase;
pub mod share;

pub use entities::{HISTORY_CAP, HistoryEntry, Session};
pub use phase::SessionPhase;
pub use share::{SessionSeed, ShareLink};
