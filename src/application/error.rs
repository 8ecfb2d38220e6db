//! 应用层错误定义
//!
//! 聊天中继用例的错误分类

use thiserror::Error;

use crate::application::ports::GenerationError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 请求参数无效
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 文本生成服务返回非 2xx 或超时
    #[error("Text generation failed: {0}")]
    UpstreamTextFailure(String),

    /// 其它意外错误（网络、解析等）
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建意外错误
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}

impl From<GenerationError> for ApplicationError {
    fn from(err: GenerationError) -> Self {
        if err.is_upstream_failure() {
            Self::UpstreamTextFailure(err.to_string())
        } else {
            Self::Unexpected(err.to_string())
        }
    }
}
