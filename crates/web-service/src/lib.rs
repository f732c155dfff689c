//! Web服务模块
//!
//! 提供管理后台 HTTP API 接口和文档服务

use color_eyre::Result;
use database::{DatabasePool, UserRepository};
use services::{UserService, UserServiceTrait};
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod extract;
pub mod models;
pub mod routes;
pub mod services;

/// 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

/// 启动 Web 服务
///
/// `shutdown_rx` 收到变更时开始优雅关闭
pub async fn start_web_service(pool: DatabasePool, bind_addr: &str, mut shutdown_rx: Receiver<bool>) -> Result<()> {
    let shared_state = AppState {
        user_service: Arc::new(UserService::new(UserRepository::new(pool))),
    };

    let router = routes::create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            if shutdown_rx.changed().await.is_err() {
                // 发送端已被丢弃，不会再收到关闭信号
                std::future::pending::<()>().await;
            }
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
