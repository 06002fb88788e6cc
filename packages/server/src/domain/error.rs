//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ParticipantName validation error
    #[error("ParticipantName cannot be empty")]
    ParticipantNameEmpty,

    /// ParticipantName too long error
    #[error("ParticipantName cannot exceed {max} characters (got {actual})")]
    ParticipantNameTooLong { max: usize, actual: usize },

    /// Recipient is neither the broadcast target nor a valid name
    #[error("Recipient must be a participant name or the broadcast target")]
    RecipientInvalid,

    /// MessageText validation error
    #[error("MessageText cannot be empty")]
    MessageTextEmpty,

    /// MessageText too long error
    #[error("MessageText cannot exceed {max} characters (got {actual})")]
    MessageTextTooLong { max: usize, actual: usize },

    /// Unknown message type on the wire
    #[error("Unknown message type: {0}")]
    MessageKindUnknown(String),
}

/// Errors reported by a `ChatStore`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A participant with the same name already exists
    #[error("Participant '{0}' already exists")]
    DuplicateParticipant(String),

    /// The participant does not exist
    #[error("Participant '{0}' not found")]
    ParticipantNotFound(String),

    /// The backing storage could not serve the request
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}
