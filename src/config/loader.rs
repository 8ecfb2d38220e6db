//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 兼容旧部署的环境变量（PORT、GEMINI_API_KEY、ELEVENLABS_API_KEY、VOICE_ID）
//! 2. 环境变量（前缀 `VOXRELAY_`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 旧部署使用的环境变量 → 配置键
const LEGACY_ENV_VARS: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("GEMINI_API_KEY", "llm.api_key"),
    ("ELEVENLABS_API_KEY", "tts.api_key"),
    ("VOICE_ID", "tts.voice_id"),
];

/// 加载应用配置
///
/// # 环境变量示例
/// - `VOXRELAY_SERVER__PORT=8080`
/// - `VOXRELAY_LLM__API_KEY=...`
/// - `VOXRELAY_TTS__VOICE_ID=...`
/// - `GEMINI_API_KEY=...`（兼容旧变量名）
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("llm.base_url", "https://generativelanguage.googleapis.com/v1beta")?
        .set_default("llm.model", "gemini-2.5-flash-preview-05-20")?
        .set_default("llm.api_key", "")?
        .set_default("llm.timeout_secs", 30)?
        .set_default("tts.base_url", "https://api.elevenlabs.io/v1")?
        .set_default("tts.api_key", "")?
        .set_default("tts.voice_id", "")?
        .set_default("tts.model_id", "eleven_multilingual_v2")?
        .set_default("tts.stability", 0.5)?
        .set_default("tts.similarity_boost", 0.75)?
        .set_default("tts.timeout_secs", 30)?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量
    // 前缀: VOXRELAY_，层级分隔符: __
    builder = builder.add_source(
        Environment::with_prefix("VOXRELAY")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 旧变量名
    for (var, key) in LEGACY_ENV_VARS {
        let value = std::env::var(var).ok().filter(|v| !v.is_empty());
        builder = builder.set_override_option(*key, value)?;
    }

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
///
/// 文本生成凭据启动时必须存在；语音凭据允许缺失
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.llm.base_url.is_empty() || config.llm.model.is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM base URL and model cannot be empty".to_string(),
        ));
    }

    if config.llm.api_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM API key is required (set GEMINI_API_KEY or VOXRELAY_LLM__API_KEY)".to_string(),
        ));
    }

    if config.llm.timeout_secs == 0 || config.tts.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Timeouts must be greater than 0".to_string(),
        ));
    }

    if config.tts.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS base URL cannot be empty".to_string(),
        ));
    }

    for (name, value) in [
        ("stability", config.tts.stability),
        ("similarity_boost", config.tts.similarity_boost),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::ValidationError(format!(
                "TTS {} must be within 0.0..=1.0, got {}",
                name, value
            )));
        }
    }

    Ok(())
}

fn mask(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<set>"
    }
}

/// 打印配置信息（用于启动时日志，不输出密钥）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("LLM: {} ({})", config.llm.model, config.llm.base_url);
    tracing::info!("LLM API Key: {}", mask(&config.llm.api_key));
    tracing::info!("LLM Timeout: {}s", config.llm.timeout_secs);
    tracing::info!("TTS: {} ({})", config.tts.model_id, config.tts.base_url);
    tracing::info!("TTS API Key: {}", mask(&config.tts.api_key));
    tracing::info!("TTS Voice: {}", mask(&config.tts.voice_id));
    tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
    if !config.tts.is_configured() {
        tracing::warn!("TTS credentials missing, voice replies will be text only");
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
