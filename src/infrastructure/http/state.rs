//! Application State
//!
//! 持有端口实现与用例处理器，请求之间无共享可变状态

use std::sync::Arc;

use crate::application::{RelayChatHandler, SpeechSynthesisPort, TextGenerationPort};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub speech_synthesizer: Arc<dyn SpeechSynthesisPort>,

    // ========== Command Handlers ==========
    pub relay_chat_handler: RelayChatHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        text_generator: Arc<dyn TextGenerationPort>,
        speech_synthesizer: Arc<dyn SpeechSynthesisPort>,
    ) -> Self {
        Self {
            speech_synthesizer: speech_synthesizer.clone(),
            relay_chat_handler: RelayChatHandler::new(text_generator, speech_synthesizer),
        }
    }
}
