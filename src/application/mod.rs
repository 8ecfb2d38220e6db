//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TextGeneration、SpeechSynthesis）
//! - commands: 聊天中继命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{handlers::RelayChatHandler, RelayChatCommand, RelayChatResponse};

pub use error::ApplicationError;

pub use ports::{
    GenerationError, GenerationRequest, GenerationResponse, SpeechError, SpeechRequest,
    SpeechResponse, SpeechSynthesisPort, TextGenerationPort,
};
