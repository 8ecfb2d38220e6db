//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod llm;
pub mod tts;

#[cfg(test)]
pub(crate) mod testing;

pub use llm::*;
pub use tts::*;
