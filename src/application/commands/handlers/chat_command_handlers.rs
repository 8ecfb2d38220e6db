//! Chat Command Handlers
//!
//! 两阶段调用：先生成文本，再按需合成语音。
//! 文本生成失败则整个请求失败；语音合成失败只丢弃音频。

use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use crate::application::commands::chat_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    GenerationError, GenerationRequest, SpeechError, SpeechRequest, SpeechSynthesisPort,
    TextGenerationPort,
};
use crate::domain::chat::{AudioDataUri, ReplyText};

/// RelayChat Handler - 聊天中继
pub struct RelayChatHandler {
    text_generator: Arc<dyn TextGenerationPort>,
    speech_synthesizer: Arc<dyn SpeechSynthesisPort>,
}

impl RelayChatHandler {
    pub fn new(
        text_generator: Arc<dyn TextGenerationPort>,
        speech_synthesizer: Arc<dyn SpeechSynthesisPort>,
    ) -> Self {
        Self {
            text_generator,
            speech_synthesizer,
        }
    }

    pub async fn handle(&self, cmd: RelayChatCommand) -> Result<RelayChatResponse, ApplicationError> {
        if cmd.user_input.trim().is_empty() {
            return Err(ApplicationError::validation("userInput must not be empty"));
        }

        let span = tracing::info_span!(
            "relay_chat",
            request_id = %Uuid::new_v4(),
            voice_enabled = cmd.voice_enabled
        );
        self.relay(cmd).instrument(span).await
    }

    async fn relay(&self, cmd: RelayChatCommand) -> Result<RelayChatResponse, ApplicationError> {
        tracing::debug!(input_len = cmd.user_input.len(), "Requesting text generation");

        let generated = self
            .text_generator
            .generate(GenerationRequest::with_persona(cmd.user_input))
            .await
            .map_err(|e| {
                match &e {
                    GenerationError::Upstream { status, body } => {
                        tracing::error!(status = *status, body = %body, "Text generation API error");
                    }
                    other => {
                        tracing::error!(error = %other, "Text generation call failed");
                    }
                }
                ApplicationError::from(e)
            })?;

        let text = ReplyText::from_generated(generated.text.as_deref());
        if text.is_fallback() {
            tracing::warn!("No usable text in generation result, using fallback reply");
        }

        let audio = if cmd.voice_enabled {
            self.synthesize(&text).await
        } else {
            None
        };

        tracing::info!(
            text_len = text.as_str().len(),
            has_audio = audio.is_some(),
            "Chat relay completed"
        );

        Ok(RelayChatResponse { text, audio })
    }

    /// 语音合成；任何失败都只记录日志并返回 None
    async fn synthesize(&self, text: &ReplyText) -> Option<AudioDataUri> {
        let request = SpeechRequest {
            text: text.as_str().to_string(),
        };

        match self.speech_synthesizer.synthesize(request).await {
            Ok(response) => {
                tracing::debug!(audio_size = response.audio_data.len(), "Speech synthesized");
                Some(AudioDataUri::mpeg(&response.audio_data))
            }
            Err(SpeechError::Upstream { status, body }) => {
                tracing::warn!(status, body = %body, "Speech synthesis API error, replying without audio");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Speech synthesis failed, replying without audio");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::testing::{StubSpeechSynthesizer, StubTextGenerator};
    use crate::domain::chat::{FALLBACK_REPLY, PERSONA_INSTRUCTION};
    use base64::{engine::general_purpose, Engine as _};

    fn handler(
        text: Arc<StubTextGenerator>,
        speech: Arc<StubSpeechSynthesizer>,
    ) -> RelayChatHandler {
        RelayChatHandler::new(text, speech)
    }

    fn command(input: &str, voice_enabled: bool) -> RelayChatCommand {
        RelayChatCommand {
            user_input: input.to_string(),
            voice_enabled,
        }
    }

    #[tokio::test]
    async fn test_text_only_reply_strips_asterisks() {
        let text = Arc::new(StubTextGenerator::replying("Stay confident. *Smile* and move on."));
        let speech = Arc::new(StubSpeechSynthesizer::returning(b"mp3"));
        let handler = handler(text.clone(), speech.clone());

        let result = handler
            .handle(command("How do I handle a cold call rejection?", false))
            .await
            .unwrap();

        assert_eq!(result.text.as_str(), "Stay confident. Smile and move on.");
        assert!(result.audio.is_none());
        assert_eq!(speech.calls(), 0);
    }

    #[tokio::test]
    async fn test_generation_request_carries_persona_and_search() {
        let text = Arc::new(StubTextGenerator::replying("Keep dialing."));
        let handler = handler(text.clone(), Arc::new(StubSpeechSynthesizer::returning(b"")));

        handler.handle(command("Any tips?", false)).await.unwrap();

        let requests = text.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].prompt, "Any tips?");
        assert_eq!(requests[0].system_instruction, PERSONA_INSTRUCTION);
        assert!(requests[0].search_grounding);
    }

    #[tokio::test]
    async fn test_voice_reply_contains_data_uri() {
        let audio = vec![0x49u8, 0x44, 0x33, 0x04, 0x00, 0xFF];
        let text = Arc::new(StubTextGenerator::replying("*Ask* for the meeting."));
        let speech = Arc::new(StubSpeechSynthesizer::returning(&audio));
        let handler = handler(text, speech.clone());

        let result = handler.handle(command("Closing tips?", true)).await.unwrap();

        let uri = result.audio.expect("audio should be present");
        assert!(uri.as_str().starts_with("data:audio/mpeg;base64,"));
        assert_eq!(general_purpose::STANDARD.decode(uri.payload()).unwrap(), audio);
        // 合成使用的是已清洗的文本
        assert_eq!(speech.texts(), vec!["Ask for the meeting.".to_string()]);
    }

    #[tokio::test]
    async fn test_speech_failure_keeps_text() {
        let text = Arc::new(StubTextGenerator::replying("Follow up tomorrow."));
        let speech = Arc::new(StubSpeechSynthesizer::failing(401));
        let handler = handler(text, speech.clone());

        let result = handler.handle(command("When to follow up?", true)).await.unwrap();

        assert_eq!(result.text.as_str(), "Follow up tomorrow.");
        assert!(result.audio.is_none());
        assert_eq!(speech.calls(), 1);
    }

    #[tokio::test]
    async fn test_speech_timeout_keeps_text() {
        let text = Arc::new(StubTextGenerator::replying("Set the next step."));
        let speech = Arc::new(StubSpeechSynthesizer::timing_out());
        let handler = handler(text, speech.clone());

        let result = handler.handle(command("After the demo?", true)).await.unwrap();

        assert_eq!(result.text.as_str(), "Set the next step.");
        assert!(result.audio.is_none());
        assert_eq!(speech.calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_voice_configuration_keeps_text() {
        let text = Arc::new(StubTextGenerator::replying("Prospect daily."));
        let handler = handler(text, Arc::new(StubSpeechSynthesizer::not_configured()));

        let result = handler.handle(command("Habits?", true)).await.unwrap();

        assert_eq!(result.text.as_str(), "Prospect daily.");
        assert!(result.audio.is_none());
    }

    #[tokio::test]
    async fn test_missing_text_uses_fallback() {
        let text = Arc::new(StubTextGenerator::without_text());
        let speech = Arc::new(StubSpeechSynthesizer::returning(b"mp3"));
        let handler = handler(text, speech.clone());

        let result = handler.handle(command("Hello?", true)).await.unwrap();

        assert_eq!(result.text.as_str(), FALLBACK_REPLY);
        assert!(result.audio.is_some());
        assert_eq!(speech.texts(), vec![FALLBACK_REPLY.to_string()]);
    }

    #[tokio::test]
    async fn test_generation_failure_fails_request_without_speech() {
        for voice_enabled in [false, true] {
            let text = Arc::new(StubTextGenerator::failing(503));
            let speech = Arc::new(StubSpeechSynthesizer::returning(b"mp3"));
            let handler = handler(text, speech.clone());

            let err = handler
                .handle(command("Pricing objections?", voice_enabled))
                .await
                .unwrap_err();

            assert!(matches!(err, ApplicationError::UpstreamTextFailure(_)));
            assert_eq!(speech.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_generation_timeout_is_text_failure() {
        let handler = handler(
            Arc::new(StubTextGenerator::timing_out()),
            Arc::new(StubSpeechSynthesizer::returning(b"mp3")),
        );

        let err = handler.handle(command("Hi", false)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::UpstreamTextFailure(_)));
    }

    #[tokio::test]
    async fn test_network_error_is_unexpected() {
        let handler = handler(
            Arc::new(StubTextGenerator::unreachable()),
            Arc::new(StubSpeechSynthesizer::returning(b"mp3")),
        );

        let err = handler.handle(command("Hi", false)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unexpected(_)));
    }

    #[tokio::test]
    async fn test_blank_input_rejected_before_generation() {
        let text = Arc::new(StubTextGenerator::replying("unused"));
        let handler = handler(text.clone(), Arc::new(StubSpeechSynthesizer::returning(b"")));

        let err = handler.handle(command("   ", true)).await.unwrap_err();

        assert!(matches!(err, ApplicationError::ValidationError(_)));
        assert!(text.requests().is_empty());
    }
}
