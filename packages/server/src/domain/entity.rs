//! Core domain models for the chat application.

use serde::{Deserialize, Serialize};

use super::value_object::{
    MessageId, MessageKind, MessageText, ParticipantName, Recipient, Timestamp,
};

/// Text of the status message written when a participant registers.
pub const JOINED_TEXT: &str = "entered the room";

/// Text of the status message written when a participant is evicted.
pub const LEFT_TEXT: &str = "left the room";

/// Represents a participant present in the room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Participant name (unique)
    pub name: ParticipantName,
    /// Timestamp of the last registration or heartbeat
    pub last_seen_at: Timestamp,
}

impl Participant {
    /// Create a new participant
    pub fn new(name: ParticipantName, last_seen_at: Timestamp) -> Self {
        Self { name, last_seen_at }
    }
}

/// Represents a message in the room log
///
/// Messages are append-only. `time` is a display string and plays no part
/// in ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub from: ParticipantName,
    pub to: Recipient,
    pub text: String,
    pub kind: MessageKind,
    /// Display time (`HH:MM:SS`)
    pub time: String,
}

impl Message {
    /// Create a message written by a participant
    pub fn authored(
        from: ParticipantName,
        to: Recipient,
        text: MessageText,
        kind: MessageKind,
        time: String,
    ) -> Self {
        Self {
            id: MessageId::generate(),
            from,
            to,
            text: text.as_str().to_string(),
            kind,
            time,
        }
    }

    /// Status message announcing that `name` joined
    pub fn joined(name: ParticipantName, time: String) -> Self {
        Self::status(name, JOINED_TEXT, time)
    }

    /// Status message announcing that `name` left
    pub fn left(name: ParticipantName, time: String) -> Self {
        Self::status(name, LEFT_TEXT, time)
    }

    fn status(from: ParticipantName, text: &str, time: String) -> Self {
        Self {
            id: MessageId::generate(),
            from,
            to: Recipient::Everyone,
            text: text.to_string(),
            kind: MessageKind::Status,
            time,
        }
    }
}
