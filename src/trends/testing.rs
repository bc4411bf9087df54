use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::DateTime;

use super::error::FetchErrorKind;
use super::provider::TrendsProvider;
use super::types::{RawPoint, RawRelated, RawTimeline};

/// 单元测试用的数据源，记录每次调用
#[derive(Default)]
pub struct FakeProvider {
    trending: Option<Result<Vec<String>, FetchErrorKind>>,
    timelines: HashMap<String, Result<RawTimeline, FetchErrorKind>>,
    related: HashMap<String, Result<RawRelated, FetchErrorKind>>,
    calls: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trending(mut self, result: Result<Vec<String>, FetchErrorKind>) -> Self {
        self.trending = Some(result);
        self
    }

    pub fn with_timeline(mut self, term: &str, result: Result<RawTimeline, FetchErrorKind>) -> Self {
        self.timelines.insert(term.to_string(), result);
        self
    }

    pub fn with_related(mut self, term: &str, result: Result<RawRelated, FetchErrorKind>) -> Self {
        self.related.insert(term.to_string(), result);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TrendsProvider for FakeProvider {
    async fn daily_trends(&self, geo: &str) -> Result<Vec<String>, FetchErrorKind> {
        self.record(format!("trending:{}", geo));
        self.trending.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn interest_over_time(
        &self,
        term: &str,
        geo: &str,
        window: &str,
    ) -> Result<RawTimeline, FetchErrorKind> {
        self.record(format!("interest:{}:{}:{}", term, geo, window));
        self.timelines
            .get(term)
            .cloned()
            .unwrap_or_else(|| Ok(RawTimeline::default()))
    }

    async fn related_queries(
        &self,
        term: &str,
        geo: &str,
        window: &str,
    ) -> Result<RawRelated, FetchErrorKind> {
        self.record(format!("related:{}:{}:{}", term, geo, window));
        self.related
            .get(term)
            .cloned()
            .unwrap_or_else(|| Ok(RawRelated::default()))
    }
}

/// 构造单关键词时间线，时间为 unix 秒
pub fn timeline(term: &str, points: &[(i64, Option<f64>)]) -> RawTimeline {
    RawTimeline {
        keywords: vec![term.to_string()],
        points: points
            .iter()
            .map(|(secs, value)| RawPoint {
                time: DateTime::from_timestamp(*secs, 0).unwrap(),
                values: vec![*value],
            })
            .collect(),
    }
}
