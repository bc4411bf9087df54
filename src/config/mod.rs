use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::trends::BatchPolicy;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub api_key: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    pub provider_base_url: String,
    pub provider_hl: String,
    pub provider_tz: i32,
    pub provider_timeout_secs: u64,
    pub batch_concurrency: usize,
    pub batch_spacing_ms: u64,
    pub cache_sweep_secs: u64,
}

// 读取环境变量，缺失或解析失败时使用默认值
fn var_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Ok(Config {
            api_key: env::var("API_KEY")?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://data.db".to_string()),
            database_max_connections: var_or("DATABASE_MAX_CONNECTIONS", 5),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: var_or("SERVER_PORT", 8000),
            provider_base_url: env::var("PROVIDER_BASE_URL")
                .unwrap_or_else(|_| "https://trends.google.com".to_string()),
            provider_hl: env::var("PROVIDER_HL").unwrap_or_else(|_| "cs-CZ".to_string()),
            provider_tz: var_or("PROVIDER_TZ", 120),
            provider_timeout_secs: var_or("PROVIDER_TIMEOUT_SECS", 30),
            batch_concurrency: var_or("BATCH_CONCURRENCY", 1),
            batch_spacing_ms: var_or("BATCH_SPACING_MS", 0),
            cache_sweep_secs: var_or("CACHE_SWEEP_SECS", 0),
        })
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    pub fn batch_policy(&self) -> BatchPolicy {
        BatchPolicy {
            concurrency: self.batch_concurrency.max(1),
            min_spacing: Duration::from_millis(self.batch_spacing_ms),
        }
    }

    /// 后台清理过期缓存的周期，0 表示关闭
    pub fn cache_sweep_interval(&self) -> Option<Duration> {
        (self.cache_sweep_secs > 0).then(|| Duration::from_secs(self.cache_sweep_secs))
    }
}
