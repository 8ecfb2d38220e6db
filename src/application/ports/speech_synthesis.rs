//! Speech Synthesis Port - 语音合成服务抽象
//!
//! 定义文本转语音的接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 语音合成错误
#[derive(Debug, Error)]
pub enum SpeechError {
    /// 缺少 API Key 或音色 ID
    #[error("Speech synthesis not configured: {0}")]
    NotConfigured(&'static str),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Upstream error: HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 语音合成请求
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    /// 要朗读的文本（已清洗）
    pub text: String,
}

/// 语音合成响应
#[derive(Debug, Clone)]
pub struct SpeechResponse {
    /// 原始音频数据（MP3）
    pub audio_data: Vec<u8>,
}

/// Speech Synthesis Port
#[async_trait]
pub trait SpeechSynthesisPort: Send + Sync {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse, SpeechError>;

    /// 是否具备合成条件（凭据齐全）
    fn is_available(&self) -> bool {
        true
    }
}
