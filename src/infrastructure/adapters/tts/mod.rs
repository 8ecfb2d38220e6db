//! TTS Adapter - ElevenLabs 语音合成客户端

mod elevenlabs_client;

pub use elevenlabs_client::*;
