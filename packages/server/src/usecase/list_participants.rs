//! UseCase: 参加者一覧の取得

use std::sync::Arc;

use crate::domain::{ChatStore, Participant};

use super::error::QueryError;

/// 参加者一覧取得のユースケース
pub struct ListParticipantsUseCase {
    store: Arc<dyn ChatStore>,
}

impl ListParticipantsUseCase {
    pub fn new(store: Arc<dyn ChatStore>) -> Self {
        Self { store }
    }

    /// 現在の参加者を登録順で返す
    pub async fn execute(&self) -> Result<Vec<Participant>, QueryError> {
        Ok(self.store.list_participants().await?)
    }
}
