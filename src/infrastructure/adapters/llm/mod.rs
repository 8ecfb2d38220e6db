//! LLM Adapter - Gemini 文本生成客户端

mod gemini_client;

pub use gemini_client::*;
