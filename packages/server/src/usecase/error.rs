//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{MessageKind, RepositoryError};

/// 参加者登録のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// 同名の参加者が既に存在する
    #[error("Participant name '{0}' is already taken")]
    NameTaken(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

/// ハートビートのエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeartbeatError {
    #[error("Participant '{0}' not found")]
    ParticipantNotFound(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

/// メッセージ投稿のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostMessageError {
    /// 参加者が投稿できない種別（status）
    #[error("Message type '{0}' cannot be posted by participants")]
    KindNotAllowed(MessageKind),

    /// 送信者が参加者として登録されていない
    #[error("Sender '{0}' is not a participant")]
    UnknownSender(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

/// 読み取り系ユースケースのエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

/// ストレージ障害を呼び出し元にそのまま伝える。
///
/// 業務上のエラー（重複・未登録）は各ユースケースで先に判定しておくこと。
fn storage_message(error: RepositoryError) -> String {
    match error {
        RepositoryError::StorageUnavailable(message) => message,
        other => other.to_string(),
    }
}

impl From<RepositoryError> for RegisterError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::DuplicateParticipant(name) => Self::NameTaken(name),
            other => Self::StorageUnavailable(storage_message(other)),
        }
    }
}

impl From<RepositoryError> for HeartbeatError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::ParticipantNotFound(name) => Self::ParticipantNotFound(name),
            other => Self::StorageUnavailable(storage_message(other)),
        }
    }
}

impl From<RepositoryError> for PostMessageError {
    fn from(error: RepositoryError) -> Self {
        Self::StorageUnavailable(storage_message(error))
    }
}

impl From<RepositoryError> for QueryError {
    fn from(error: RepositoryError) -> Self {
        Self::StorageUnavailable(storage_message(error))
    }
}
