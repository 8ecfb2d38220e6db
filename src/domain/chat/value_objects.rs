//! Chat Context - Value Objects

use base64::{engine::general_purpose, Engine as _};

/// 助手人设，作为 system instruction 原样发送给文本生成服务
pub const PERSONA_INSTRUCTION: &str = r#"You are a world-class sales expert named Jeb Blount. Your personality is energetic, direct, supportive, and encouraging, providing actionable advice for sales professionals. Use a conversational, confident tone and answer with empathy. Avoid overly technical language. Your answers should be concise and highly practical. Never begin a response with conversational fillers such as "Alright," "Okay," or "Got it." Ensure responses are no more than two paragraphs. Do not mention that you are an AI or a bot. Do not include any explicit content, language, answers, or information to any question. Your purpose is to help people with sales challenges based on the principles of your books and training. Conclude each response with a question that encourages further conversation on the current sales topic. If the user's query is not related to business or sales, gently redirect the conversation back to the topic of sales challenges or strategies."#;

/// 生成结果缺失时的兜底回复
pub const FALLBACK_REPLY: &str =
    "I apologize, I'm having trouble with that request. Can you try rephrasing?";

/// 去除 Markdown 强调符号 `*`，便于语音朗读
pub fn strip_emphasis(text: &str) -> String {
    text.replace('*', "")
}

/// 助手回复文本
///
/// 始终非空：生成文本缺失，或去除 `*` 后为空白时，使用 [`FALLBACK_REPLY`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyText(String);

impl ReplyText {
    /// 从生成服务返回的原始文本构造
    pub fn from_generated(raw: Option<&str>) -> Self {
        let cleaned = raw.map(strip_emphasis).unwrap_or_default();
        if cleaned.trim().is_empty() {
            Self::fallback()
        } else {
            Self(cleaned)
        }
    }

    pub fn fallback() -> Self {
        Self(FALLBACK_REPLY.to_string())
    }

    pub fn is_fallback(&self) -> bool {
        self.0 == FALLBACK_REPLY
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ReplyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// MP3 音频的 data URI（`data:audio/mpeg;base64,...`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioDataUri(String);

impl AudioDataUri {
    pub const MPEG_PREFIX: &'static str = "data:audio/mpeg;base64,";

    pub fn mpeg(audio: &[u8]) -> Self {
        Self(format!(
            "{}{}",
            Self::MPEG_PREFIX,
            general_purpose::STANDARD.encode(audio)
        ))
    }

    /// base64 负载部分（不含前缀）
    pub fn payload(&self) -> &str {
        &self.0[Self::MPEG_PREFIX.len()..]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for AudioDataUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
