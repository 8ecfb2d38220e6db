//! Chat Context - 聊天限界上下文
//!
//! 职责:
//! - 助手人设（system instruction）
//! - 生成文本的清洗与兜底回复
//! - 合成音频的 data URI 封装

mod value_objects;

pub use value_objects::{
    strip_emphasis, AudioDataUri, ReplyText, FALLBACK_REPLY, PERSONA_INSTRUCTION,
};
