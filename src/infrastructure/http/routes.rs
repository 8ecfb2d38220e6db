//! HTTP Routes
//!
//! API Endpoints:
//! - /api/chat   POST  中继聊天（文本 + 可选语音）
//! - /api/ping   GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/chat", post(handlers::chat))
}
