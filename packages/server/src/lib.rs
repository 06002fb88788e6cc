//! Polling chat server library.
//!
//! Participants register a presence, keep it alive with heartbeats, and
//! exchange broadcast and private messages through a shared log. Participants
//! that stop sending heartbeats are evicted by a periodic sweep.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::{ServerArgs, ServerConfig};
pub use ui::run as run_server;
