pub mod group;
pub mod keyword;
pub mod trends;

/// 健康检查，不需要密钥
pub async fn health() -> &'static str {
    "ok"
}
