//! Data Transfer Objects

use serde::{Deserialize, Deserializer, Serialize};

use crate::application::RelayChatResponse;

// ============================================================================
// Chat DTOs
// ============================================================================

/// POST /api/chat 请求体
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequestDto {
    pub user_input: String,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_voice_enabled: bool,
}

/// `null` 视为未开启语音
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// POST /api/chat 响应体
///
/// 没有音频时 `audio` 序列化为 `null`，不省略该字段
#[derive(Debug, Serialize)]
pub struct ChatResponseDto {
    pub text: String,
    pub audio: Option<String>,
}

impl From<RelayChatResponse> for ChatResponseDto {
    fn from(response: RelayChatResponse) -> Self {
        Self {
            text: response.text.into_string(),
            audio: response.audio.map(|a| a.into_string()),
        }
    }
}
