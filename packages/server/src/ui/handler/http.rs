//! HTTP API endpoint handlers.
//!
//! Raw request values are converted into domain value objects here; the
//! use cases only ever see validated input.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode},
};

use crate::{
    domain::{MessageKind, MessageText, ParticipantName, Recipient, parse_limit},
    infrastructure::dto::http::{
        MessageDto, MessagesQueryDto, ParticipantDto, PostMessageRequestDto, RegisterRequestDto,
    },
    ui::state::AppState,
    usecase::{
        HeartbeatUseCase, ListMessagesUseCase, ListParticipantsUseCase, PostMessageUseCase,
        RegisterParticipantUseCase,
    },
};

use super::error::ApiError;

/// Header carrying the caller's claimed identity
pub const USER_HEADER: &str = "user";

fn user_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(USER_HEADER).and_then(|v| v.to_str().ok())
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `POST /participants`
pub async fn register_participant(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterRequestDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    let name = ParticipantName::new(request.name).inspect_err(|e| {
        tracing::warn!("Rejected registration: {}", e);
    })?;

    let usecase = RegisterParticipantUseCase::new(state.store.clone(), state.clock.clone());
    usecase.execute(name).await.inspect_err(|e| {
        tracing::warn!("Registration failed: {}", e);
    })?;

    Ok(StatusCode::CREATED)
}

/// `GET /participants`
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ParticipantDto>>, ApiError> {
    let usecase = ListParticipantsUseCase::new(state.store.clone());
    let participants = usecase.execute().await?;

    Ok(Json(
        participants.into_iter().map(ParticipantDto::from).collect(),
    ))
}

/// `POST /messages`
///
/// The sender is taken from the `User` header. A missing or malformed
/// header is treated as an unknown sender.
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<PostMessageRequestDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    let to = Recipient::new(request.to)?;
    let text = MessageText::new(request.text)?;
    let kind = MessageKind::parse(&request.r#type)?;

    let sender = user_header(&headers).unwrap_or_default();
    let from = ParticipantName::new(sender.to_string())
        .map_err(|_| ApiError::UnknownSender(format!("Sender '{sender}' is not a participant")))?;

    let usecase = PostMessageUseCase::new(state.store.clone(), state.clock.clone());
    usecase
        .execute(from, to, text, kind)
        .await
        .inspect_err(|e| {
            tracing::warn!("Message rejected: {}", e);
        })?;

    Ok(StatusCode::CREATED)
}

/// `GET /messages?limit=N`
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: Result<Query<MessagesQueryDto>, QueryRejection>,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    let Query(query) = query?;
    let reader = user_header(&headers);
    let limit = parse_limit(query.limit.as_deref());

    let usecase = ListMessagesUseCase::new(state.store.clone());
    let messages = usecase.execute(reader, limit).await?;

    Ok(Json(messages.into_iter().map(MessageDto::from).collect()))
}

/// `POST /status`
pub async fn heartbeat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let sender = user_header(&headers).unwrap_or_default();
    let name = ParticipantName::new(sender.to_string())
        .map_err(|_| ApiError::NotFound(format!("Participant '{sender}' not found")))?;

    let usecase = HeartbeatUseCase::new(state.store.clone(), state.clock.clone());
    usecase.execute(name).await?;

    Ok(StatusCode::OK)
}
