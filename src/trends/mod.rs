// 趋势数据获取、整理与缓存

pub mod batch;
pub mod error;
pub mod fetch;
pub mod google;
pub mod normalize;
pub mod provider;
pub mod service;
pub mod types;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use batch::{BatchAggregator, BatchPolicy, MAX_SEEDS};
pub use error::{FetchError, FetchErrorKind, Operation};
pub use fetch::{FetchClient, TRENDING_LIMIT};
pub use google::GoogleTrendsClient;
pub use provider::TrendsProvider;
pub use service::TrendService;
pub use types::*;
