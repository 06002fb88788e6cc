//! Domain layer for the chat application.
//!
//! This module contains the presence and visibility rules, which are
//! independent of data transfer objects (DTOs) and infrastructure concerns.

pub mod clock;
pub mod entity;
pub mod error;
pub mod presence;
pub mod repository;
pub mod value_object;
pub mod visibility;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entity::{Message, Participant};
pub use error::{RepositoryError, ValueObjectError};
pub use presence::InactivityPolicy;
pub use repository::ChatStore;
pub use value_object::{
    BROADCAST_TARGET, MessageId, MessageKind, MessageText, ParticipantName, Recipient, Timestamp,
};
pub use visibility::{is_visible_to, parse_limit, visible_messages};
