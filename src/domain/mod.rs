//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Chat Context: 人设、回复清洗、音频封装

pub mod chat;
