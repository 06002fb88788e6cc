//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層（HTTP ハンドラと掃除スケジューラ）から呼び出され、Domain 層を操作します。
//!
//! - 在室管理: 登録・ハートビート・一覧・非アクティブ参加者の掃除
//! - チャット: メッセージの投稿と読者ごとの一覧

pub mod error;
pub mod heartbeat;
pub mod list_messages;
pub mod list_participants;
pub mod post_message;
pub mod register_participant;
pub mod sweep_inactive;

pub use error::{HeartbeatError, PostMessageError, QueryError, RegisterError};
pub use heartbeat::HeartbeatUseCase;
pub use list_messages::ListMessagesUseCase;
pub use list_participants::ListParticipantsUseCase;
pub use post_message::PostMessageUseCase;
pub use register_participant::RegisterParticipantUseCase;
pub use sweep_inactive::{SweepInactiveUseCase, SweepReport};
