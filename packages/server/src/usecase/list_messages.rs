//! UseCase: メッセージ一覧の取得
//!
//! メッセージログ全体を読み込み、読者ごとの可視性フィルタと末尾ウィンドウを適用します。

use std::sync::Arc;

use crate::domain::{ChatStore, Message, visible_messages};

use super::error::QueryError;

/// メッセージ一覧取得のユースケース
pub struct ListMessagesUseCase {
    store: Arc<dyn ChatStore>,
}

impl ListMessagesUseCase {
    pub fn new(store: Arc<dyn ChatStore>) -> Self {
        Self { store }
    }

    /// # Arguments
    ///
    /// * `reader` - 読者の名前（不明なら `None`）
    /// * `limit` - 末尾から返す最大件数（`None` なら全件）
    pub async fn execute(
        &self,
        reader: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Message>, QueryError> {
        let messages = self.store.list_messages().await?;
        Ok(visible_messages(reader, messages, limit))
    }
}
