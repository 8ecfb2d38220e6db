//! HTTP Handlers

mod chat;
mod ping;

pub use chat::*;
pub use ping::*;
