use std::sync::Arc;

use super::error::{FetchError, FetchErrorKind, Operation};
use super::provider::TrendsProvider;
use super::types::{RawBucket, RawRelated, RawSeries};

/// 热门搜索最多返回的条数
pub const TRENDING_LIMIT: usize = 30;

/// 对数据源调用的统一封装，所有失败都以 `FetchError` 返回
#[derive(Clone)]
pub struct FetchClient {
    provider: Arc<dyn TrendsProvider>,
}

fn wrap(operation: Operation) -> impl FnOnce(FetchErrorKind) -> FetchError {
    move |kind| {
        let err = FetchError::new(operation, kind);
        tracing::warn!("Provider call failed: {}", err);
        err
    }
}

impl FetchClient {
    pub fn new(provider: Arc<dyn TrendsProvider>) -> Self {
        Self { provider }
    }

    pub async fn list_trending(&self, geo: &str) -> Result<Vec<String>, FetchError> {
        let items = self
            .provider
            .daily_trends(geo)
            .await
            .map_err(wrap(Operation::Trending))?;

        Ok(items
            .into_iter()
            .filter(|item| !item.trim().is_empty())
            .take(TRENDING_LIMIT)
            .collect())
    }

    pub async fn interest_over_time(
        &self,
        term: &str,
        geo: &str,
        window: &str,
    ) -> Result<RawSeries, FetchError> {
        let timeline = self
            .provider
            .interest_over_time(term, geo, window)
            .await
            .map_err(wrap(Operation::InterestOverTime))?;

        let no_data = || wrap(Operation::InterestOverTime)(FetchErrorKind::NoData);

        let column = timeline
            .keywords
            .iter()
            .position(|kw| kw == term)
            .ok_or_else(no_data)?;
        // 没有任何点带有该关键词的列，视为关键词缺失
        if !timeline.points.iter().any(|p| p.values.len() > column) {
            return Err(no_data());
        }

        let buckets = timeline
            .points
            .into_iter()
            .map(|p| RawBucket {
                time: p.time,
                value: p.values.get(column).copied().flatten(),
            })
            .collect();

        Ok(RawSeries {
            term: term.to_string(),
            buckets,
        })
    }

    pub async fn related_queries(
        &self,
        term: &str,
        geo: &str,
        window: &str,
    ) -> Result<RawRelated, FetchError> {
        self.provider
            .related_queries(term, geo, window)
            .await
            .map_err(wrap(Operation::RelatedQueries))
    }
}
