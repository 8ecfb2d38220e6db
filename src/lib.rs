//! voxrelay - 语音聊天中继服务
//!
//! 将聊天组件的用户输入转发给文本生成服务（Gemini），
//! 按需再交给语音合成服务（ElevenLabs），合并返回文本与音频。
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Chat Context: 人设、兜底回复、`*` 清洗、音频 data URI
//!
//! 应用层 (application/):
//! - Ports: TextGenerationPort, SpeechSynthesisPort
//! - Commands: RelayChatHandler
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: POST /api/chat
//! - Adapters: GeminiClient, ElevenLabsClient

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
