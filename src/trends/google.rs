//! Google Trends 网页接口的数据源实现
//!
//! 单关键词查询需要两次请求：先调用 `explore` 拿到各个 widget 的 token，
//! 再请求对应的 widget 接口取数据。响应体带有防 XSSI 前缀，解析前要跳过。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::OnceCell;

use crate::config::Config;

use super::error::FetchErrorKind;
use super::provider::TrendsProvider;
use super::types::{RawPoint, RawRankedQuery, RawRelated, RawTimeline};

const USER_AGENT: &str = concat!("trends-backend/", env!("CARGO_PKG_VERSION"));

const TIMESERIES_WIDGET: &str = "TIMESERIES";
const RELATED_QUERIES_WIDGET: &str = "RELATED_QUERIES";

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Widget {
    pub id: String,
    pub token: String,
    pub request: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ExploreResponse {
    widgets: Vec<Widget>,
}

#[derive(Debug, Deserialize)]
struct MultilineResponse {
    default: MultilineData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MultilineData {
    #[serde(default)]
    timeline_data: Vec<TimelinePoint>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Timestamp {
    Secs(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct TimelinePoint {
    time: Timestamp,
    #[serde(default)]
    value: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct RelatedResponse {
    default: RelatedData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RelatedData {
    #[serde(default)]
    ranked_list: Vec<RankedList>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RankedList {
    #[serde(default)]
    ranked_keyword: Vec<RawRankedQuery>,
}

#[derive(Debug, Deserialize)]
struct DailyTrendsResponse {
    default: DailyTrendsData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyTrendsData {
    #[serde(default)]
    trending_searches_days: Vec<TrendingDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrendingDay {
    #[serde(default)]
    trending_searches: Vec<TrendingSearch>,
}

#[derive(Debug, Deserialize)]
struct TrendingSearch {
    title: TrendingTitle,
}

#[derive(Debug, Deserialize)]
struct TrendingTitle {
    query: String,
}

fn strip_xssi(body: &str) -> &str {
    body.find('{').map_or(body, |start| &body[start..])
}

pub(crate) fn parse_explore(body: &str) -> Result<Vec<Widget>, FetchErrorKind> {
    let response: ExploreResponse = serde_json::from_str(strip_xssi(body))?;
    Ok(response.widgets)
}

fn parse_timestamp(ts: &Timestamp) -> Result<DateTime<Utc>, FetchErrorKind> {
    let secs = match ts {
        Timestamp::Secs(secs) => Some(*secs),
        Timestamp::Text(text) => text.trim().parse().ok(),
    };
    secs.and_then(|s| DateTime::from_timestamp(s, 0))
        .ok_or_else(|| FetchErrorKind::MalformedResponse(format!("bad timestamp {:?}", ts)))
}

pub(crate) fn parse_timeline(body: &str, keywords: Vec<String>) -> Result<RawTimeline, FetchErrorKind> {
    let response: MultilineResponse = serde_json::from_str(strip_xssi(body))?;
    let points = response
        .default
        .timeline_data
        .into_iter()
        .map(|p| {
            Ok(RawPoint {
                time: parse_timestamp(&p.time)?,
                values: p.value,
            })
        })
        .collect::<Result<Vec<_>, FetchErrorKind>>()?;
    Ok(RawTimeline { keywords, points })
}

pub(crate) fn parse_related(body: &str) -> Result<RawRelated, FetchErrorKind> {
    let response: RelatedResponse = serde_json::from_str(strip_xssi(body))?;
    let mut lists = response
        .default
        .ranked_list
        .into_iter()
        .map(|list| Some(list.ranked_keyword).filter(|kw| !kw.is_empty()));
    // 第一个列表是 top，第二个是 rising
    let top = lists.next().flatten();
    let rising = lists.next().flatten();
    Ok(RawRelated { top, rising })
}

pub(crate) fn parse_daily_trends(body: &str) -> Result<Vec<String>, FetchErrorKind> {
    let response: DailyTrendsResponse = serde_json::from_str(strip_xssi(body))?;
    Ok(response
        .default
        .trending_searches_days
        .into_iter()
        .flat_map(|day| day.trending_searches)
        .map(|search| search.title.query)
        .collect())
}

fn find_widget(widgets: Vec<Widget>, id: &str) -> Result<Widget, FetchErrorKind> {
    widgets
        .into_iter()
        .find(|w| w.id.starts_with(id))
        .ok_or_else(|| FetchErrorKind::MalformedResponse(format!("missing {} widget", id)))
}

pub struct GoogleTrendsClient {
    client: Client,
    base_url: String,
    hl: String,
    tz: String,
    warmed_up: OnceCell<()>,
}

impl GoogleTrendsClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .timeout(config.provider_timeout())
            .build()?;
        Ok(Self::with_client(
            client,
            &config.provider_base_url,
            &config.provider_hl,
            config.provider_tz,
        ))
    }

    pub fn with_client(client: Client, base_url: &str, hl: &str, tz: i32) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            hl: hl.to_string(),
            tz: tz.to_string(),
            warmed_up: OnceCell::new(),
        }
    }

    // 首次调用前访问首页拿到会话 cookie，失败不影响后续请求
    async fn warm_up(&self, geo: &str) {
        self.warmed_up
            .get_or_init(|| async {
                let url = format!("{}/", self.base_url);
                match self.client.get(url).query(&[("geo", geo)]).send().await {
                    Ok(resp) => tracing::debug!("Provider session warm-up: {}", resp.status()),
                    Err(e) => tracing::debug!("Provider session warm-up failed: {}", e),
                }
            })
            .await;
    }

    async fn send(&self, request: RequestBuilder) -> Result<String, FetchErrorKind> {
        let response = request
            .query(&[("hl", self.hl.as_str()), ("tz", self.tz.as_str())])
            .send()
            .await?;
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchErrorKind::RateLimited);
        }
        if !status.is_success() {
            return Err(FetchErrorKind::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }

    async fn explore(&self, term: &str, geo: &str, window: &str) -> Result<Vec<Widget>, FetchErrorKind> {
        self.warm_up(geo).await;
        let req = json!({
            "comparisonItem": [{ "keyword": term, "time": window, "geo": geo }],
            "category": 0,
            "property": "",
        });
        let url = format!("{}/trends/api/explore", self.base_url);
        let body = self
            .send(self.client.post(url).query(&[("req", req.to_string())]))
            .await?;
        parse_explore(&body)
    }

    async fn widget_data(&self, endpoint: &str, widget: &Widget) -> Result<String, FetchErrorKind> {
        let url = format!("{}/trends/api/widgetdata/{}", self.base_url, endpoint);
        self.send(self.client.get(url).query(&[
            ("req", widget.request.to_string()),
            ("token", widget.token.clone()),
        ]))
        .await
    }
}

#[async_trait]
impl TrendsProvider for GoogleTrendsClient {
    async fn daily_trends(&self, geo: &str) -> Result<Vec<String>, FetchErrorKind> {
        self.warm_up(geo).await;
        let url = format!("{}/trends/api/dailytrends", self.base_url);
        let body = self
            .send(self.client.get(url).query(&[("geo", geo), ("ns", "15")]))
            .await?;
        parse_daily_trends(&body)
    }

    async fn interest_over_time(
        &self,
        term: &str,
        geo: &str,
        window: &str,
    ) -> Result<RawTimeline, FetchErrorKind> {
        let widgets = self.explore(term, geo, window).await?;
        let widget = find_widget(widgets, TIMESERIES_WIDGET)?;
        let body = self.widget_data("multiline", &widget).await?;
        parse_timeline(&body, vec![term.to_string()])
    }

    async fn related_queries(
        &self,
        term: &str,
        geo: &str,
        window: &str,
    ) -> Result<RawRelated, FetchErrorKind> {
        let widgets = self.explore(term, geo, window).await?;
        let widget = find_widget(widgets, RELATED_QUERIES_WIDGET)?;
        let body = self.widget_data("relatedsearches", &widget).await?;
        parse_related(&body)
    }
}
