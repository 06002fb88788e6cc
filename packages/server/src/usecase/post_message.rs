//! UseCase: メッセージ投稿処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PostMessageUseCase::execute() メソッド
//! - 送信者の存在確認、投稿可能な種別の判定、メッセージログへの追加
//!
//! ### どのような状況を想定しているか
//! - 正常系：全員宛てのメッセージ、個別宛ての private_message
//! - 異常系：未登録の送信者、status 種別の投稿、ストレージ障害

use std::sync::Arc;

use lounge_shared::time::format_clock_time;

use crate::domain::{
    ChatStore, Clock, Message, MessageKind, MessageText, ParticipantName, Recipient,
};

use super::error::PostMessageError;

/// メッセージ投稿のユースケース
pub struct PostMessageUseCase {
    store: Arc<dyn ChatStore>,
    clock: Arc<dyn Clock>,
}

impl PostMessageUseCase {
    pub fn new(store: Arc<dyn ChatStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// メッセージ投稿を実行
    ///
    /// # Arguments
    ///
    /// * `from` - 送信者（登録済みの参加者であること）
    /// * `to` - 宛先（参加者名または全員）
    /// * `text` - 本文
    /// * `kind` - `message` または `private_message`
    pub async fn execute(
        &self,
        from: ParticipantName,
        to: Recipient,
        text: MessageText,
        kind: MessageKind,
    ) -> Result<(), PostMessageError> {
        // 1. 参加者が投稿できる種別か
        if !kind.is_authored() {
            return Err(PostMessageError::KindNotAllowed(kind));
        }

        // 2. 送信者が参加者として存在するか
        if self.store.find_participant(&from).await?.is_none() {
            return Err(PostMessageError::UnknownSender(from.into_string()));
        }

        // 3. メッセージログに追加
        let now = self.clock.now();
        let message = Message::authored(from, to, text, kind, format_clock_time(now.value()));
        tracing::info!(
            from = %message.from,
            to = %message.to,
            kind = %message.kind,
            "Message posted"
        );
        self.store.append_message(message).await?;

        Ok(())
    }
}
