use std::fmt;

use thiserror::Error;

/// 对外部数据源的三种调用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Trending,
    InterestOverTime,
    RelatedQueries,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Trending => "trending",
            Operation::InterestOverTime => "interest_over_time",
            Operation::RelatedQueries => "related_queries",
        };
        f.write_str(name)
    }
}

/// 数据源调用失败的原因
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchErrorKind {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("rate limited by provider")]
    RateLimited,

    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("no data")]
    NoData,
}

/// 获取层对外暴露的唯一错误类型，带上失败的操作名
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {kind}")]
pub struct FetchError {
    pub operation: Operation,
    pub kind: FetchErrorKind,
}

impl FetchError {
    pub fn new(operation: Operation, kind: FetchErrorKind) -> Self {
        Self { operation, kind }
    }

    pub fn is_no_data(&self) -> bool {
        self.kind == FetchErrorKind::NoData
    }
}

impl From<reqwest::Error> for FetchErrorKind {
    fn from(err: reqwest::Error) -> Self {
        if err.status() == Some(reqwest::StatusCode::TOO_MANY_REQUESTS) {
            FetchErrorKind::RateLimited
        } else if let Some(status) = err.status() {
            FetchErrorKind::Status(status.as_u16())
        } else if err.is_decode() {
            FetchErrorKind::MalformedResponse(err.to_string())
        } else {
            FetchErrorKind::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchErrorKind {
    fn from(err: serde_json::Error) -> Self {
        FetchErrorKind::MalformedResponse(err.to_string())
    }
}
