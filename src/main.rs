//! 管理后台服务入口
//!
//! 加载配置、初始化日志、连接数据库，然后启动 Web 服务。
//! 收到 Ctrl-C 后通过 watch 通道通知 Web 服务优雅关闭。

use color_eyre::Result;
use shared_lib::AppConfig;
use tokio::sync::watch;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load()?;

    tracing_subscriber::fmt().with_max_level(config.log_level).init();

    info!("🚀 启动管理后台服务...");

    let pool = database::initialize_database(config.clone()).await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("❌ 监听退出信号失败: {err}");
            return;
        }
        info!("📥 收到退出信号");
        let _ = shutdown_tx.send(true);
    });

    web_service::start_web_service(pool.clone(), &config.bind_addr, shutdown_rx).await?;

    pool.close().await;
    info!("👋 管理后台服务已退出");

    Ok(())
}
