//! Chat Commands - 聊天中继命令

use crate::domain::chat::{AudioDataUri, ReplyText};

/// 中继聊天命令
#[derive(Debug, Clone)]
pub struct RelayChatCommand {
    pub user_input: String,
    pub voice_enabled: bool,
}

/// 中继聊天响应
///
/// `audio` 仅在请求了语音且合成成功时存在
#[derive(Debug, Clone)]
pub struct RelayChatResponse {
    pub text: ReplyText,
    pub audio: Option<AudioDataUri>,
}
