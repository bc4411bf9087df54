use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use trends_backend::{
    AppState,
    config::Config,
    database,
    router::create_router,
    trends::{GoogleTrendsClient, TrendService},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration (is API_KEY set?)");

    // 设置数据库连接池并建表
    let pool = database::connect(&config.database_url, config.database_max_connections)
        .await
        .expect("Failed to open database");
    database::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    // 趋势数据源
    let provider = GoogleTrendsClient::new(&config).expect("Failed to build HTTP client");
    let policy = config.batch_policy();
    tracing::info!(
        "Provider {} (hl={}, tz={}), batch concurrency {}, spacing {:?}",
        config.provider_base_url,
        config.provider_hl,
        config.provider_tz,
        policy.concurrency,
        policy.min_spacing
    );
    let trends = Arc::new(TrendService::new(Arc::new(provider), policy));

    // 后台清理过期缓存
    if let Some(every) = config.cache_sweep_interval() {
        let trends = trends.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                let purged = trends.purge_expired();
                if purged > 0 {
                    tracing::debug!("Purged {} expired cache entries", purged);
                }
            }
        });
    }

    // 设置应用状态
    let state = AppState {
        pool,
        config: config.clone(),
        trends,
    };

    let app = create_router(state.clone());

    // 启动服务器
    let addr = SocketAddr::new(
        state.config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        state.config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
