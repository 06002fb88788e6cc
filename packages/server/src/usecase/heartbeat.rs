//! UseCase: ハートビート処理
//!
//! 参加者の最終確認時刻を現在時刻に更新し、非アクティブ判定を先送りします。

use std::sync::Arc;

use crate::domain::{ChatStore, Clock, ParticipantName};

use super::error::HeartbeatError;

/// ハートビートのユースケース
pub struct HeartbeatUseCase {
    store: Arc<dyn ChatStore>,
    clock: Arc<dyn Clock>,
}

impl HeartbeatUseCase {
    pub fn new(store: Arc<dyn ChatStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// ハートビートを実行
    ///
    /// * `Err(HeartbeatError::ParticipantNotFound)` - 参加者が存在しない
    pub async fn execute(&self, name: ParticipantName) -> Result<(), HeartbeatError> {
        let now = self.clock.now();
        self.store.update_last_seen(&name, now).await?;

        tracing::debug!(participant = %name, last_seen_at = now.value(), "Heartbeat");
        Ok(())
    }
}
