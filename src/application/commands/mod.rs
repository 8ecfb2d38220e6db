//! Commands - 用例命令及处理器

mod chat_commands;
pub mod handlers;

pub use chat_commands::{RelayChatCommand, RelayChatResponse};
