//! Mapping of use case errors to HTTP responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    domain::ValueObjectError,
    usecase::{HeartbeatError, PostMessageError, QueryError, RegisterError},
};

/// HTTP-level error.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed body or a value that fails domain validation (422)
    InvalidInput(String),
    /// Participant name already taken (409)
    Conflict(String),
    /// Participant not found (404)
    NotFound(String),
    /// Sender is not a participant (422)
    UnknownSender(String),
    /// Storage failure, retryable (500)
    StorageUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::InvalidInput(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_INPUT", msg)
            }
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "NAME_TAKEN", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::UnknownSender(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UNKNOWN_SENDER", msg)
            }
            ApiError::StorageUnavailable(msg) => {
                tracing::error!("Storage unavailable: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_UNAVAILABLE",
                    msg,
                )
            }
        };

        (status, Json(json!({"error": {"code": code, "message": message}}))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<ValueObjectError> for ApiError {
    fn from(e: ValueObjectError) -> Self {
        ApiError::InvalidInput(e.to_string())
    }
}

impl From<RegisterError> for ApiError {
    fn from(e: RegisterError) -> Self {
        match e {
            RegisterError::NameTaken(_) => ApiError::Conflict(e.to_string()),
            RegisterError::StorageUnavailable(msg) => ApiError::StorageUnavailable(msg),
        }
    }
}

impl From<HeartbeatError> for ApiError {
    fn from(e: HeartbeatError) -> Self {
        match e {
            HeartbeatError::ParticipantNotFound(_) => ApiError::NotFound(e.to_string()),
            HeartbeatError::StorageUnavailable(msg) => ApiError::StorageUnavailable(msg),
        }
    }
}

impl From<PostMessageError> for ApiError {
    fn from(e: PostMessageError) -> Self {
        match e {
            PostMessageError::KindNotAllowed(_) => ApiError::InvalidInput(e.to_string()),
            PostMessageError::UnknownSender(_) => ApiError::UnknownSender(e.to_string()),
            PostMessageError::StorageUnavailable(msg) => ApiError::StorageUnavailable(msg),
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::StorageUnavailable(msg) => ApiError::StorageUnavailable(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MessageKind;

    fn status_of(error: ApiError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        // テスト項目: 各エラーが対応する HTTP ステータスに変換される
        assert_eq!(
            status_of(RegisterError::NameTaken("Ana".to_string()).into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(HeartbeatError::ParticipantNotFound("Ana".to_string()).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(PostMessageError::UnknownSender("Ana".to_string()).into()),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(PostMessageError::KindNotAllowed(MessageKind::Status).into()),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(ValueObjectError::ParticipantNameEmpty.into()),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(QueryError::StorageUnavailable("down".to_string()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
