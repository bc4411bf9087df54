use config::Config;
use sqlx::SqlitePool;
use std::sync::Arc;
use trends::TrendService;

pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod trends;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub trends: Arc<TrendService>,
}
