//! Repository trait definitions.
//!
//! The domain layer owns the storage contract; infrastructure provides the
//! implementations (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::{Message, Participant},
    error::RepositoryError,
    value_object::{ParticipantName, Timestamp},
};

/// Persistence for the participant set and the message log.
///
/// Every operation is atomic on its own collection. Any call may fail with
/// `RepositoryError::StorageUnavailable`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Readiness probe, called once before the server accepts requests.
    async fn ping(&self) -> Result<(), RepositoryError>;

    /// Insert a participant.
    ///
    /// Fails with `DuplicateParticipant` if the name is already present; the
    /// check and the insert are one atomic step.
    async fn insert_participant(&self, participant: Participant) -> Result<(), RepositoryError>;

    async fn find_participant(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError>;

    /// All participants in registration order.
    async fn list_participants(&self) -> Result<Vec<Participant>, RepositoryError>;

    /// Fails with `ParticipantNotFound` if the name is absent.
    async fn update_last_seen(
        &self,
        name: &ParticipantName,
        at: Timestamp,
    ) -> Result<(), RepositoryError>;

    /// Fails with `ParticipantNotFound` if the name is absent.
    async fn delete_participant(&self, name: &ParticipantName) -> Result<(), RepositoryError>;

    async fn append_message(&self, message: Message) -> Result<(), RepositoryError>;

    /// Append several messages as one contiguous run of the log.
    async fn append_messages(&self, messages: Vec<Message>) -> Result<(), RepositoryError>;

    /// The full message log in insertion order.
    async fn list_messages(&self) -> Result<Vec<Message>, RepositoryError>;
}
