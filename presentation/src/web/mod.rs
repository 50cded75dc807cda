//! Single-page web surface

pub mod page;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::{AppState, SessionStore};
