//! Text Generation Port - 文本生成服务抽象
//!
//! 定义调用外部大模型生成回复的接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::chat::PERSONA_INSTRUCTION;

/// 文本生成错误
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    /// 上游返回非 2xx 状态码
    #[error("Upstream error: HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GenerationError {
    /// 是否属于文本生成调用本身失败（非 2xx 或超时）
    pub fn is_upstream_failure(&self) -> bool {
        matches!(self, Self::Upstream { .. } | Self::Timeout)
    }
}

/// 文本生成请求
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// 用户输入
    pub prompt: String,
    /// 系统指令（人设）
    pub system_instruction: String,
    /// 是否启用搜索增强
    pub search_grounding: bool,
}

impl GenerationRequest {
    /// 使用固定人设构造请求，启用搜索增强
    pub fn with_persona(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: PERSONA_INSTRUCTION.to_string(),
            search_grounding: true,
        }
    }
}

/// 文本生成响应
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    /// 第一个候选的第一个文本片段，缺失时为 None
    pub text: Option<String>,
}

/// Text Generation Port
#[async_trait]
pub trait TextGenerationPort: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenerationError>;
}
