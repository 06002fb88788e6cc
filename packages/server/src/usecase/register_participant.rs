//! UseCase: 参加者登録処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RegisterParticipantUseCase::execute() メソッド
//! - 参加者の登録（重複チェック、入室通知の追加）
//!
//! ### なぜこのテストが必要か
//! - 同名の参加者が 2 人存在してはならない
//! - 入室時に全員宛ての status メッセージが残ることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の登録
//! - 異常系：重複した名前での登録、ストレージ障害

use std::sync::Arc;

use lounge_shared::time::format_clock_time;

use crate::domain::{ChatStore, Clock, Message, Participant, ParticipantName};

use super::error::RegisterError;

/// 参加者登録のユースケース
pub struct RegisterParticipantUseCase {
    store: Arc<dyn ChatStore>,
    clock: Arc<dyn Clock>,
}

impl RegisterParticipantUseCase {
    /// 新しい RegisterParticipantUseCase を作成
    pub fn new(store: Arc<dyn ChatStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// 参加者登録を実行
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 登録成功（入室通知も追加済み）
    /// * `Err(RegisterError::NameTaken)` - 同名の参加者が存在する
    /// * `Err(RegisterError::StorageUnavailable)` - ストレージ障害
    pub async fn execute(&self, name: ParticipantName) -> Result<(), RegisterError> {
        let now = self.clock.now();

        // 1. 参加者を追加（重複チェックはストアがアトミックに行う）
        self.store
            .insert_participant(Participant::new(name.clone(), now))
            .await?;

        // 2. 入室通知を追加
        let joined = Message::joined(name.clone(), format_clock_time(now.value()));
        if let Err(e) = self.store.append_message(joined).await {
            tracing::error!(participant = %name, "Failed to record join notice: {}", e);
            return Err(e.into());
        }

        tracing::info!(participant = %name, "Participant registered");
        Ok(())
    }
}
