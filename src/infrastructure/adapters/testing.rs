//! 适配器测试辅助：本地启动一个 axum 服务充当上游

use axum::Router;
use tokio::net::TcpListener;

/// 在随机端口启动上游桩服务，返回其 base URL
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
