use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---- 数据源原始结构 ----

/// 一次热度查询的原始结果，`keywords` 与每个点的 `values` 按下标对应
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTimeline {
    pub keywords: Vec<String>,
    pub points: Vec<RawPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawPoint {
    pub time: DateTime<Utc>,
    pub values: Vec<Option<f64>>,
}

/// 单个关键词的原始时间序列
#[derive(Debug, Clone, PartialEq)]
pub struct RawSeries {
    pub term: String,
    pub buckets: Vec<RawBucket>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawBucket {
    pub time: DateTime<Utc>,
    pub value: Option<f64>,
}

/// 相关查询原始结果，`None` 表示数据源没有返回该区块
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRelated {
    pub top: Option<Vec<RawRankedQuery>>,
    pub rising: Option<Vec<RawRankedQuery>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRankedQuery {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
}

// ---- 对外的稳定结构 ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingList {
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedQueryRecord {
    pub query: String,
    pub value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedBlock {
    pub top: Vec<RelatedQueryRecord>,
    pub rising: Vec<RelatedQueryRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSeries {
    pub term: String,
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub labels: Vec<String>,
    pub series: Vec<BatchSeries>,
}

/// 缓存中保存的结果
#[derive(Debug, Clone, PartialEq)]
pub enum CachedPayload {
    Trending(Vec<String>),
    Interest(TimeSeries),
    Related(RelatedBlock),
}
