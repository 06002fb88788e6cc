//! InMemory ChatStore 実装
//!
//! ドメイン層が定義する ChatStore trait の具体的な実装。
//! 参加者とメッセージをそれぞれ別の Mutex で保護し、コレクション単位で
//! アトミックな操作を提供します。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatStore, Message, Participant, ParticipantName, RepositoryError, Timestamp};

/// インメモリ ChatStore 実装
///
/// 参加者は登録順の Vec、メッセージは追記専用の Vec として保持します。
#[derive(Clone, Default)]
pub struct InMemoryChatStore {
    /// 参加者（登録順）
    participants: Arc<Mutex<Vec<Participant>>>,
    /// メッセージログ（挿入順）
    messages: Arc<Mutex<Vec<Message>>>,
}

impl InMemoryChatStore {
    /// 新しい InMemoryChatStore を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatStore for InMemoryChatStore {
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn insert_participant(&self, participant: Participant) -> Result<(), RepositoryError> {
        // 重複チェックと追加は同じロックの中で行う
        let mut participants = self.participants.lock().await;
        if participants.iter().any(|p| p.name == participant.name) {
            return Err(RepositoryError::DuplicateParticipant(
                participant.name.into_string(),
            ));
        }
        participants.push(participant);
        Ok(())
    }

    async fn find_participant(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.iter().find(|p| &p.name == name).cloned())
    }

    async fn list_participants(&self) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.clone())
    }

    async fn update_last_seen(
        &self,
        name: &ParticipantName,
        at: Timestamp,
    ) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        let participant = participants
            .iter_mut()
            .find(|p| &p.name == name)
            .ok_or_else(|| RepositoryError::ParticipantNotFound(name.as_str().to_string()))?;
        participant.last_seen_at = at;
        Ok(())
    }

    async fn delete_participant(&self, name: &ParticipantName) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        let index = participants
            .iter()
            .position(|p| &p.name == name)
            .ok_or_else(|| RepositoryError::ParticipantNotFound(name.as_str().to_string()))?;
        participants.remove(index);
        Ok(())
    }

    async fn append_message(&self, message: Message) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().await;
        messages.push(message);
        Ok(())
    }

    async fn append_messages(&self, batch: Vec<Message>) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().await;
        messages.extend(batch);
        Ok(())
    }

    async fn list_messages(&self) -> Result<Vec<Message>, RepositoryError> {
        let messages = self.messages.lock().await;
        Ok(messages.clone())
    }
}
