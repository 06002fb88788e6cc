//! UseCase: 非アクティブ参加者の掃除
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SweepInactiveUseCase::execute() メソッド
//! - 閾値以上ハートビートのない参加者の削除と退室通知の一括追加
//!
//! ### なぜこのテストが必要か
//! - 削除対象がちょうど `now - last_seen_at >= threshold` の集合であること
//! - 同じ `now` で 2 回実行しても 2 回目は何も書き込まないこと
//! - 一部の削除に失敗しても残りの参加者は削除され、失敗した参加者の
//!   退室通知は出ないこと
//!
//! ### どのような状況を想定しているか
//! - 正常系：Dee のみ閾値超過
//! - エッジケース：対象なし（書き込みなし）、2 回連続実行
//! - 異常系：一覧取得の失敗、個別削除の失敗

use std::sync::Arc;

use lounge_shared::time::format_clock_time;

use crate::domain::{ChatStore, InactivityPolicy, Message, ParticipantName, Timestamp};

use super::error::QueryError;

/// 1 回の掃除の結果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// 削除され、退室通知が追加された参加者
    pub evicted: Vec<ParticipantName>,
    /// 削除に失敗した参加者（次回の掃除で再判定される）
    pub failed: Vec<ParticipantName>,
}

impl SweepReport {
    pub fn is_empty(&self) -> bool {
        self.evicted.is_empty() && self.failed.is_empty()
    }
}

/// 非アクティブ参加者掃除のユースケース
pub struct SweepInactiveUseCase {
    store: Arc<dyn ChatStore>,
    policy: InactivityPolicy,
}

impl SweepInactiveUseCase {
    pub fn new(store: Arc<dyn ChatStore>, policy: InactivityPolicy) -> Self {
        Self { store, policy }
    }

    /// 掃除を実行
    ///
    /// 判定は 1 回の一覧取得のスナップショットに基づく。その時点までに
    /// コミットされたハートビートは必ず反映される。
    ///
    /// # Returns
    ///
    /// * `Ok(SweepReport)` - 削除できた参加者と失敗した参加者
    /// * `Err(QueryError)` - 一覧取得または退室通知の追加に失敗
    pub async fn execute(&self, now: Timestamp) -> Result<SweepReport, QueryError> {
        // 1. スナップショットから非アクティブな参加者を選ぶ
        let participants = self.store.list_participants().await?;
        let inactive = self.policy.select_inactive(&participants, now);
        if inactive.is_empty() {
            return Ok(SweepReport::default());
        }

        // 2. 1 人ずつ削除し、削除できた参加者の退室通知だけを積む
        let time = format_clock_time(now.value());
        let mut report = SweepReport::default();
        let mut departures = Vec::with_capacity(inactive.len());
        for participant in inactive {
            match self.store.delete_participant(&participant.name).await {
                Ok(()) => {
                    departures.push(Message::left(participant.name.clone(), time.clone()));
                    report.evicted.push(participant.name.clone());
                }
                Err(e) => {
                    tracing::warn!(
                        participant = %participant.name,
                        "Failed to evict inactive participant: {}",
                        e
                    );
                    report.failed.push(participant.name.clone());
                }
            }
        }

        // 3. 退室通知を一括で追加
        if !departures.is_empty() {
            self.store.append_messages(departures).await?;
        }

        tracing::info!(
            evicted = report.evicted.len(),
            failed = report.failed.len(),
            "Inactive participants swept"
        );
        Ok(report)
    }
}
