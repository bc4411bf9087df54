use std::sync::Arc;

use chrono::Duration;

use crate::cache::{CacheStore, keys};

use super::batch::{BatchAggregator, BatchPolicy};
use super::error::FetchError;
use super::fetch::FetchClient;
use super::normalize;
use super::provider::TrendsProvider;
use super::types::{BatchResult, CachedPayload, RelatedBlock, TimeSeries};
use super::window;

/// 热门搜索缓存过期时间（秒）
pub const TRENDING_TTL_SECS: i64 = 60 * 30;

/// 相关查询缓存过期时间（秒）
pub const RELATED_TTL_SECS: i64 = 60 * 30;

/// 带缓存的趋势查询入口
///
/// 单关键词查询先查缓存，未命中再调用数据源并写回；失败结果不缓存。
/// 批量查询不经过缓存。
pub struct TrendService {
    fetch: FetchClient,
    batch: BatchAggregator,
    cache: CacheStore<CachedPayload>,
}

impl TrendService {
    pub fn new(provider: Arc<dyn TrendsProvider>, policy: BatchPolicy) -> Self {
        let fetch = FetchClient::new(provider);
        Self {
            batch: BatchAggregator::new(fetch.clone(), policy),
            fetch,
            cache: CacheStore::new(),
        }
    }

    pub fn cache(&self) -> &CacheStore<CachedPayload> {
        &self.cache
    }

    pub async fn trending(&self, geo: &str) -> Result<Vec<String>, FetchError> {
        let key = keys::trending_key(geo);
        if let Some(CachedPayload::Trending(items)) = self.cache.get(&key) {
            tracing::debug!("Get trending from cache: {}", key);
            return Ok(items);
        }

        let items = self.fetch.list_trending(geo).await?;
        self.cache.set_with_ttl(
            key.as_str(),
            CachedPayload::Trending(items.clone()),
            Duration::seconds(TRENDING_TTL_SECS),
        );
        tracing::debug!("Set trending to cache: {}", key);
        Ok(items)
    }

    pub async fn interest(&self, term: &str, geo: &str, since: &str) -> Result<TimeSeries, FetchError> {
        let window = window::translate(since);
        let key = keys::interest_key(term, geo, &window);
        if let Some(CachedPayload::Interest(series)) = self.cache.get(&key) {
            tracing::debug!("Get interest from cache: {}", key);
            return Ok(series);
        }

        let raw = self.fetch.interest_over_time(term, geo, &window).await?;
        let series = normalize::interest_series(&raw);
        self.cache
            .set(key.as_str(), CachedPayload::Interest(series.clone()));
        tracing::debug!("Set interest to cache: {}", key);
        Ok(series)
    }

    pub async fn related(&self, term: &str, geo: &str, since: &str) -> Result<RelatedBlock, FetchError> {
        let window = window::translate(since);
        let key = keys::related_key(term, geo, &window);
        if let Some(CachedPayload::Related(block)) = self.cache.get(&key) {
            tracing::debug!("Get related from cache: {}", key);
            return Ok(block);
        }

        let raw = self.fetch.related_queries(term, geo, &window).await?;
        let block = normalize::related_block(&raw);
        self.cache.set_with_ttl(
            key.as_str(),
            CachedPayload::Related(block.clone()),
            Duration::seconds(RELATED_TTL_SECS),
        );
        tracing::debug!("Set related to cache: {}", key);
        Ok(block)
    }

    pub async fn batch_interest(&self, seeds: &[String], geo: &str, since: &str) -> BatchResult {
        self.batch.aggregate(seeds, geo, since).await
    }

    /// 清理过期缓存，供后台任务调用
    pub fn purge_expired(&self) -> usize {
        self.cache.purge_expired()
    }
}
