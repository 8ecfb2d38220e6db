//! voxrelay - 语音聊天中继服务

use std::sync::Arc;

use voxrelay::config::{load_config, print_config};
use voxrelay::infrastructure::adapters::{
    ElevenLabsClient, ElevenLabsClientConfig, GeminiClient, GeminiClientConfig,
};
use voxrelay::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},voxrelay={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("voxrelay - 语音聊天中继服务");
    print_config(&config);

    // 文本生成客户端
    let gemini_config = GeminiClientConfig {
        base_url: config.llm.base_url.clone(),
        model: config.llm.model.clone(),
        api_key: config.llm.api_key.clone(),
        timeout_secs: config.llm.timeout_secs,
    };
    let text_generator = Arc::new(GeminiClient::new(gemini_config)?);

    // 语音合成客户端
    let tts_config = ElevenLabsClientConfig {
        base_url: config.tts.base_url.clone(),
        api_key: config.tts.api_key.clone(),
        voice_id: config.tts.voice_id.clone(),
        model_id: config.tts.model_id.clone(),
        stability: config.tts.stability,
        similarity_boost: config.tts.similarity_boost,
        timeout_secs: config.tts.timeout_secs,
    };
    let speech_synthesizer = Arc::new(ElevenLabsClient::new(tts_config)?);

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(text_generator, speech_synthesizer);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
