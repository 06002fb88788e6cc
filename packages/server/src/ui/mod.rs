//! HTTP server implementation.

mod handler;
mod router;
mod runner;
mod signal;
pub mod state;

pub use router::build_router;
pub use runner::run;
pub use state::{AppState, ReadyStore};
