//! Handler modules for HTTP endpoints.

pub mod error;
pub mod http;

pub use error::ApiError;

// Re-export HTTP handlers
pub use http::{
    health_check, heartbeat, list_messages, list_participants, post_message,
    register_participant,
};
