//! 基础设施层
//!
//! - adapters: Gemini / ElevenLabs HTTP 客户端
//! - http: axum RESTful API

pub mod adapters;
pub mod http;
