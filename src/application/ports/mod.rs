//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod speech_synthesis;
mod text_generation;

#[cfg(test)]
pub(crate) mod testing;

pub use speech_synthesis::{SpeechError, SpeechRequest, SpeechResponse, SpeechSynthesisPort};
pub use text_generation::{
    GenerationError, GenerationRequest, GenerationResponse, TextGenerationPort,
};
