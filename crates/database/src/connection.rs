//! 数据库连接
//!
//! 管理后台只读 `sys_user` 表，连接池按 [`AppConfig::db_max_connections`] 设置上限，
//! 启动时执行 `migrations/` 下的迁移保证表结构存在。

use crate::{DatabaseError, DatabaseResult};
use shared_lib::AppConfig;
use sqlx::postgres::{PgPoolOptions, Postgres};
use sqlx::Pool;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// 数据库连接池
pub type DatabasePool = Pool<Postgres>;

/// 获取连接的最长等待时间，超时后请求返回500
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// 管理后台访问量小，空闲连接10分钟后释放
const IDLE_TIMEOUT: Duration = Duration::from_secs(600);

/// 根据配置生成连接池参数
fn pool_options(config: &AppConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        // 常驻一个连接，避免冷启动后第一次查询变慢
        .min_connections(1)
        .max_connections(config.db_max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
}

/// 连接PostgreSQL并执行迁移
pub async fn initialize_database(config: Arc<AppConfig>) -> DatabaseResult<DatabasePool> {
    let pool = pool_options(&config)
        .connect(&config.postgresql_conn_str)
        .await
        .map_err(|e| DatabaseError::connection(format!("连接PostgreSQL数据库失败: {e}")))?;

    info!("🗄️ 用户库连接成功，最大连接数 {}", config.db_max_connections);

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .map_err(|e| DatabaseError::migration(format!("sys_user 表迁移失败: {e}")))?;

    info!("✅ sys_user 表结构已就绪");

    Ok(pool)
}
