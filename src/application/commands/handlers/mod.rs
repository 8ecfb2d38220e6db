//! Command Handlers

mod chat_command_handlers;

pub use chat_command_handlers::RelayChatHandler;
