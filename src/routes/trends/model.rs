use serde::Deserialize;

/// 默认地区
pub const DEFAULT_GEO: &str = "CZ";

/// 默认时间范围
pub const DEFAULT_SINCE: &str = "12m";

fn default_geo() -> String {
    DEFAULT_GEO.to_string()
}

fn default_since() -> String {
    DEFAULT_SINCE.to_string()
}

#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    #[serde(default = "default_geo")]
    pub geo: String,
}

#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    pub kw: String,
    #[serde(default = "default_geo")]
    pub geo: String,
    #[serde(default = "default_since")]
    pub since: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchInterestRequest {
    #[serde(default = "default_geo")]
    pub geo: String,
    #[serde(default = "default_since")]
    pub since: String,
    pub seeds: Vec<String>,
}
