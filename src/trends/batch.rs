use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use tokio::time::Instant;

use super::error::FetchError;
use super::fetch::FetchClient;
use super::normalize;
use super::types::{BatchResult, BatchSeries, TimeSeries};
use super::window;

/// 单次批量请求最多处理的关键词数，多余的直接忽略
pub const MAX_SEEDS: usize = 5;

/// 批量请求对数据源的调用节奏
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPolicy {
    /// 同时进行的调用数，至少为 1
    pub concurrency: usize,
    /// 相邻两次调用开始时间的最小间隔
    pub min_spacing: Duration,
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self {
            concurrency: 1,
            min_spacing: Duration::ZERO,
        }
    }
}

// 为每次调用分配开始时间，锁只在分配时持有
struct Pacer {
    spacing: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl Pacer {
    fn new(spacing: Duration) -> Self {
        Self {
            spacing,
            next_slot: Mutex::new(None),
        }
    }

    async fn wait(&self) {
        if self.spacing.is_zero() {
            return;
        }
        let start_at = {
            let mut slot = self.next_slot.lock().unwrap_or_else(PoisonError::into_inner);
            let now = Instant::now();
            let at = slot.map_or(now, |next| next.max(now));
            *slot = Some(at + self.spacing);
            at
        };
        tokio::time::sleep_until(start_at).await;
    }
}

#[derive(Clone)]
pub struct BatchAggregator {
    fetch: FetchClient,
    policy: BatchPolicy,
}

impl BatchAggregator {
    pub fn new(fetch: FetchClient, policy: BatchPolicy) -> Self {
        Self { fetch, policy }
    }

    /// 逐个获取关键词热度并合并，单个关键词失败只会被跳过
    pub async fn aggregate(&self, seeds: &[String], geo: &str, range_spec: &str) -> BatchResult {
        let window = window::translate(range_spec);
        let pacer = Arc::new(Pacer::new(self.policy.min_spacing));

        if seeds.len() > MAX_SEEDS {
            tracing::debug!("Batch truncated from {} to {} seeds", seeds.len(), MAX_SEEDS);
        }

        let outcomes: Vec<(String, Result<TimeSeries, FetchError>)> =
            stream::iter(seeds.iter().take(MAX_SEEDS).cloned())
                .map(|term| {
                    let fetch = self.fetch.clone();
                    let pacer = pacer.clone();
                    let geo = geo.to_string();
                    let window = window.clone();
                    async move {
                        pacer.wait().await;
                        let result = fetch
                            .interest_over_time(&term, &geo, &window)
                            .await
                            .map(|raw| normalize::interest_series(&raw));
                        (term, result)
                    }
                })
                .buffered(self.policy.concurrency.max(1))
                .collect()
                .await;

        let mut labels = None;
        let mut series = Vec::new();
        for (term, outcome) in outcomes {
            match outcome {
                Ok(ts) if !ts.values.is_empty() => {
                    // 第一个有数据的关键词决定整批的标签
                    if labels.is_none() {
                        labels = Some(ts.labels);
                    }
                    series.push(BatchSeries {
                        term,
                        values: ts.values,
                    });
                }
                Ok(_) => tracing::debug!("Skipping seed {:?}: empty series", term),
                Err(e) => tracing::warn!("Skipping seed {:?}: {}", term, e),
            }
        }

        BatchResult {
            labels: labels.unwrap_or_default(),
            series,
        }
    }
}
