//! HTTP API request/response DTOs for the chat application.

use serde::{Deserialize, Serialize};

use crate::domain::{Message, Participant};

/// Body of `POST /participants`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequestDto {
    pub name: String,
}

/// Body of `POST /messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMessageRequestDto {
    pub to: String,
    pub text: String,
    pub r#type: String,
}

/// Query string of `GET /messages`
///
/// `limit` stays a string so that non-numeric values mean "no limit"
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagesQueryDto {
    pub limit: Option<String>,
}

/// Participant entry of `GET /participants`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub name: String,
    /// Unix timestamp (milliseconds) of the last registration or heartbeat
    pub last_status: i64,
}

impl From<Participant> for ParticipantDto {
    fn from(participant: Participant) -> Self {
        Self {
            name: participant.name.into_string(),
            last_status: participant.last_seen_at.value(),
        }
    }
}

/// Message entry of `GET /messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub from: String,
    pub to: String,
    pub text: String,
    pub r#type: String,
    pub time: String, // HH:MM:SS
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_string(),
            from: message.from.into_string(),
            to: message.to.into(),
            text: message.text,
            r#type: message.kind.as_str().to_string(),
            time: message.time,
        }
    }
}
