//! 测试用端口桩实现

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{
    GenerationError, GenerationRequest, GenerationResponse, SpeechError, SpeechRequest,
    SpeechResponse, SpeechSynthesisPort, TextGenerationPort,
};

enum GenerationOutcome {
    Text(Option<String>),
    Status(u16),
    Timeout,
    Network,
}

/// 返回固定结果的文本生成桩
pub struct StubTextGenerator {
    outcome: GenerationOutcome,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl StubTextGenerator {
    fn with_outcome(outcome: GenerationOutcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::with_outcome(GenerationOutcome::Text(Some(text.to_string())))
    }

    pub fn without_text() -> Self {
        Self::with_outcome(GenerationOutcome::Text(None))
    }

    pub fn failing(status: u16) -> Self {
        Self::with_outcome(GenerationOutcome::Status(status))
    }

    pub fn timing_out() -> Self {
        Self::with_outcome(GenerationOutcome::Timeout)
    }

    pub fn unreachable() -> Self {
        Self::with_outcome(GenerationOutcome::Network)
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerationPort for StubTextGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenerationError> {
        self.requests.lock().unwrap().push(request);
        match &self.outcome {
            GenerationOutcome::Text(text) => Ok(GenerationResponse { text: text.clone() }),
            GenerationOutcome::Status(status) => Err(GenerationError::Upstream {
                status: *status,
                body: "upstream unavailable".to_string(),
            }),
            GenerationOutcome::Timeout => Err(GenerationError::Timeout),
            GenerationOutcome::Network => {
                Err(GenerationError::NetworkError("connection refused".to_string()))
            }
        }
    }
}

enum SpeechOutcome {
    Audio(Vec<u8>),
    Status(u16),
    Timeout,
    NotConfigured,
}

/// 返回固定结果的语音合成桩
pub struct StubSpeechSynthesizer {
    outcome: SpeechOutcome,
    calls: AtomicUsize,
    texts: Mutex<Vec<String>>,
}

impl StubSpeechSynthesizer {
    fn with_outcome(outcome: SpeechOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            texts: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(audio: &[u8]) -> Self {
        Self::with_outcome(SpeechOutcome::Audio(audio.to_vec()))
    }

    pub fn failing(status: u16) -> Self {
        Self::with_outcome(SpeechOutcome::Status(status))
    }

    pub fn timing_out() -> Self {
        Self::with_outcome(SpeechOutcome::Timeout)
    }

    pub fn not_configured() -> Self {
        Self::with_outcome(SpeechOutcome::NotConfigured)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesisPort for StubSpeechSynthesizer {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse, SpeechError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts.lock().unwrap().push(request.text);
        match &self.outcome {
            SpeechOutcome::Audio(audio) => Ok(SpeechResponse {
                audio_data: audio.clone(),
            }),
            SpeechOutcome::Status(status) => Err(SpeechError::Upstream {
                status: *status,
                body: "quota exceeded".to_string(),
            }),
            SpeechOutcome::Timeout => Err(SpeechError::Timeout),
            SpeechOutcome::NotConfigured => Err(SpeechError::NotConfigured("voice_id")),
        }
    }

    fn is_available(&self) -> bool {
        !matches!(self.outcome, SpeechOutcome::NotConfigured)
    }
}
