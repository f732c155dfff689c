use color_eyre::eyre::{eyre, Context};
use color_eyre::{Help, Result};
use std::sync::Arc;
use tracing::Level;

/// 默认监听地址
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// 默认数据库连接池大小
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// postgresql数据库链接字符串
    pub postgresql_conn_str: String,

    /// 数据库连接池最大连接数
    ///
    /// 可通过环境变量 `DB_MAX_CONNECTIONS` 来调整，默认 [`DEFAULT_DB_MAX_CONNECTIONS`]
    pub db_max_connections: u32,

    /// Web服务监听地址
    ///
    /// 可通过环境变量 `BIND_ADDR` 来调整，默认 [`DEFAULT_BIND_ADDR`]
    pub bind_addr: String,

    /// 日志级别
    ///
    /// 可通过环境变量 `LOG_LEVEL` 来调整（trace/debug/info/warn/error），默认 info
    pub log_level: Level,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件，所以文件不存在时忽略
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err).context("Can not parse .env file");
            }
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        Ok(Arc::new(config))
    }

    /// 根据 `lookup` 读取配置项，`lookup` 返回 `None` 表示变量未设置
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 读取数据库地址信息（仅支持postgresql）
        let db_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| eyre!("Can not load DATABASE_URL in environment"))
            .suggestion("设置 DATABASE_URL 环境变量")?;

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => level
                .parse::<Level>()
                .map_err(|_| eyre!("Invalid LOG_LEVEL: {level}"))
                .suggestion("LOG_LEVEL 可选值: trace/debug/info/warn/error")?,
            None => Level::INFO,
        };

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| eyre!("Invalid DB_MAX_CONNECTIONS: {value}"))
                .suggestion("DB_MAX_CONNECTIONS 需要是大于0的整数")?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        Ok(AppConfig {
            postgresql_conn_str: db_url,
            db_max_connections,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/admin")])).unwrap();

        assert_eq!(config.postgresql_conn_str, "postgres://localhost/admin");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/admin"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("LOG_LEVEL", "debug"),
            ("DB_MAX_CONNECTIONS", "25"),
        ]))
        .unwrap();

        assert_eq!(config.db_max_connections, 25);
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_missing_database_url() {
        assert!(AppConfig::from_lookup(lookup_from(&[])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).is_err());
    }

    #[test]
    fn test_invalid_db_max_connections() {
        for value in ["0", "many", "-3"] {
            let result = AppConfig::from_lookup(lookup_from(&[
                ("DATABASE_URL", "postgres://db/admin"),
                ("DB_MAX_CONNECTIONS", value),
            ]));
            assert!(result.is_err(), "{value}");
        }
    }

    #[test]
    fn test_invalid_log_level() {
        let result = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/admin"), ("LOG_LEVEL", "loud")]));
        assert!(result.is_err());
    }
}
