use async_trait::async_trait;

use super::error::FetchErrorKind;
use super::types::{RawRelated, RawTimeline};

/// 外部趋势数据源
///
/// 实现者只负责传输和解析，返回的错误由 `FetchClient` 统一包装。
#[async_trait]
pub trait TrendsProvider: Send + Sync {
    /// 当前热门搜索，按数据源顺序
    async fn daily_trends(&self, geo: &str) -> Result<Vec<String>, FetchErrorKind>;

    async fn interest_over_time(
        &self,
        term: &str,
        geo: &str,
        window: &str,
    ) -> Result<RawTimeline, FetchErrorKind>;

    async fn related_queries(
        &self,
        term: &str,
        geo: &str,
        window: &str,
    ) -> Result<RawRelated, FetchErrorKind>;
}
