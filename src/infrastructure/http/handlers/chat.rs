//! Chat Handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::RelayChatCommand;
use crate::infrastructure::http::dto::{ChatRequestDto, ChatResponseDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequestDto>, JsonRejection>,
) -> Result<Json<ChatResponseDto>, ApiError> {
    let Json(req) = payload?;

    let cmd = RelayChatCommand {
        user_input: req.user_input,
        voice_enabled: req.is_voice_enabled,
    };

    let result = state.relay_chat_handler.handle(cmd).await?;

    Ok(Json(ChatResponseDto::from(result)))
}
