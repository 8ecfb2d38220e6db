//! ElevenLabs Client - 调用 ElevenLabs text-to-speech API
//!
//! 实现 SpeechSynthesisPort trait
//!
//! 外部 API:
//! POST {base_url}/text-to-speech/{voice_id}
//! Header: xi-api-key
//! Request: {"text": "...", "model_id": "...", "voice_settings": {"stability": 0.5, "similarity_boost": 0.75}}
//! Response: audio/mpeg binary

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{SpeechError, SpeechRequest, SpeechResponse, SpeechSynthesisPort};

const API_KEY_HEADER: &str = "xi-api-key";

/// 语音合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct TextToSpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

/// ElevenLabs 客户端配置
#[derive(Debug, Clone)]
pub struct ElevenLabsClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// API Key（通过 `xi-api-key` 头传递），为空时不合成语音
    pub api_key: String,
    /// 音色 ID，为空时不合成语音
    pub voice_id: String,
    /// 语音模型
    pub model_id: String,
    pub stability: f32,
    pub similarity_boost: f32,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for ElevenLabsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.elevenlabs.io/v1".to_string(),
            api_key: String::new(),
            voice_id: String::new(),
            model_id: "eleven_multilingual_v2".to_string(),
            stability: 0.5,
            similarity_boost: 0.75,
            timeout_secs: 30,
        }
    }
}

impl ElevenLabsClientConfig {
    pub fn new(api_key: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            voice_id: voice_id.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// ElevenLabs 语音合成客户端
pub struct ElevenLabsClient {
    client: Client,
    config: ElevenLabsClientConfig,
}

impl ElevenLabsClient {
    pub fn new(config: ElevenLabsClientConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SpeechError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 是否已配置 API Key 和音色
    pub fn is_configured(&self) -> bool {
        !self.config.api_key.is_empty() && !self.config.voice_id.is_empty()
    }

    fn synthesize_url(&self) -> String {
        format!(
            "{}/text-to-speech/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.voice_id
        )
    }
}

#[async_trait]
impl SpeechSynthesisPort for ElevenLabsClient {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse, SpeechError> {
        if self.config.api_key.is_empty() {
            return Err(SpeechError::NotConfigured("api_key"));
        }
        if self.config.voice_id.is_empty() {
            return Err(SpeechError::NotConfigured("voice_id"));
        }

        let body = TextToSpeechRequest {
            text: &request.text,
            model_id: &self.config.model_id,
            voice_settings: VoiceSettings {
                stability: self.config.stability,
                similarity_boost: self.config.similarity_boost,
            },
        };

        tracing::debug!(
            url = %self.synthesize_url(),
            text_len = request.text.len(),
            model_id = %self.config.model_id,
            "Sending text-to-speech request"
        );

        let response = self
            .client
            .post(&self.synthesize_url())
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpeechError::Timeout
                } else if e.is_connect() {
                    SpeechError::NetworkError(format!("Cannot connect to ElevenLabs API: {}", e))
                } else {
                    SpeechError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpeechError::Timeout
                } else {
                    SpeechError::InvalidResponse(format!("Failed to read audio: {}", e))
                }
            })?
            .to_vec();

        if audio_data.is_empty() {
            return Err(SpeechError::InvalidResponse("Empty audio body".to_string()));
        }

        tracing::info!(audio_size = audio_data.len(), "Speech synthesis completed");

        Ok(SpeechResponse { audio_data })
    }

    fn is_available(&self) -> bool {
        self.is_configured()
    }
}
