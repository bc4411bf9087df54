//! 用本地假服务返回固定响应，测试 Google Trends 数据源实现

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::Value;
use trends_backend::trends::{
    BatchPolicy, FetchErrorKind, GoogleTrendsClient, Operation, TrendService,
};

const EXPLORE: &str = r#")]}'
{"widgets":[
  {"id":"TIMESERIES","token":"ts-token","request":{"time":"today 3-m","resolution":"WEEK"}},
  {"id":"GEO_MAP","token":"geo-token","request":{}},
  {"id":"RELATED_QUERIES","token":"rq-token","request":{"restriction":{}}}
]}"#;

const MULTILINE: &str = r#")]}',
{"default":{"timelineData":[
  {"time":"1704585600","value":[12],"hasData":[true]},
  {"time":"1705190400","value":[0],"hasData":[false]},
  {"time":"1705795200","value":[87],"hasData":[true]}
]}}"#;

const RELATED: &str = r#")]}',
{"default":{"rankedList":[
  {"rankedKeyword":[{"query":"rust book","value":100},{"query":"rust game","value":40}]},
  {"rankedKeyword":[]}
]}}"#;

const DAILY: &str = r#")]}',
{"default":{"trendingSearchesDays":[
  {"trendingSearches":[{"title":{"query":"hokej"}},{"title":{"query":"volby"}}]}
]}}"#;

#[derive(Clone, Default)]
struct Seen {
    explore_reqs: Arc<Mutex<Vec<Value>>>,
    widget_tokens: Arc<Mutex<Vec<String>>>,
}

async fn explore(State(seen): State<Seen>, Query(params): Query<HashMap<String, String>>) -> &'static str {
    if let Some(req) = params.get("req") {
        seen.explore_reqs
            .lock()
            .unwrap()
            .push(serde_json::from_str(req).unwrap_or(Value::Null));
    }
    EXPLORE
}

async fn multiline(State(seen): State<Seen>, Query(params): Query<HashMap<String, String>>) -> &'static str {
    seen.widget_tokens
        .lock()
        .unwrap()
        .push(params.get("token").cloned().unwrap_or_default());
    MULTILINE
}

async fn related(State(seen): State<Seen>, Query(params): Query<HashMap<String, String>>) -> &'static str {
    seen.widget_tokens
        .lock()
        .unwrap()
        .push(params.get("token").cloned().unwrap_or_default());
    RELATED
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn fake_trends() -> (SocketAddr, Seen) {
    let seen = Seen::default();
    let router = Router::new()
        .route("/trends/api/explore", post(explore))
        .route("/trends/api/widgetdata/multiline", get(multiline))
        .route("/trends/api/widgetdata/relatedsearches", get(related))
        .route("/trends/api/dailytrends", get(|| async { DAILY }))
        .with_state(seen.clone());
    (serve(router).await, seen)
}

fn service(addr: SocketAddr) -> TrendService {
    let client = GoogleTrendsClient::with_client(
        reqwest::Client::new(),
        &format!("http://{}/", addr),
        "cs-CZ",
        120,
    );
    TrendService::new(Arc::new(client), BatchPolicy::default())
}

#[tokio::test]
async fn interest_goes_through_explore_and_multiline() {
    let (addr, seen) = fake_trends().await;
    let svc = service(addr);

    let series = svc.interest("rust", "CZ", "3m").await.unwrap();
    assert_eq!(
        series.labels,
        vec!["2024-01-07 00:00:00", "2024-01-14 00:00:00", "2024-01-21 00:00:00"]
    );
    assert_eq!(series.values, vec![12, 0, 87]);

    let reqs = seen.explore_reqs.lock().unwrap().clone();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0]["comparisonItem"][0]["keyword"], "rust");
    assert_eq!(reqs[0]["comparisonItem"][0]["time"], "today 3-m");
    assert_eq!(reqs[0]["comparisonItem"][0]["geo"], "CZ");
    assert_eq!(*seen.widget_tokens.lock().unwrap(), vec!["ts-token"]);
}

#[tokio::test]
async fn related_uses_related_queries_widget() {
    let (addr, seen) = fake_trends().await;
    let svc = service(addr);

    let block = svc.related("rust", "CZ", "12m").await.unwrap();
    assert_eq!(block.top.len(), 2);
    assert_eq!(block.top[1].query, "rust game");
    assert_eq!(block.top[1].value, 40);
    assert!(block.rising.is_empty());
    assert_eq!(*seen.widget_tokens.lock().unwrap(), vec!["rq-token"]);
}

#[tokio::test]
async fn trending_reads_daily_trends() {
    let (addr, _) = fake_trends().await;
    let svc = service(addr);
    assert_eq!(svc.trending("CZ").await.unwrap(), vec!["hokej", "volby"]);
}

#[tokio::test]
async fn rate_limit_is_reported_as_such() {
    let router = Router::new().fallback(|| async { StatusCode::TOO_MANY_REQUESTS });
    let svc = service(serve(router).await);

    let err = svc.interest("rust", "CZ", "12m").await.unwrap_err();
    assert_eq!(err.operation, Operation::InterestOverTime);
    assert_eq!(err.kind, FetchErrorKind::RateLimited);
}

#[tokio::test]
async fn server_errors_carry_the_status() {
    let router = Router::new().fallback(|| async { StatusCode::SERVICE_UNAVAILABLE });
    let svc = service(serve(router).await);

    let err = svc.trending("CZ").await.unwrap_err();
    assert_eq!(err.kind, FetchErrorKind::Status(503));
}

#[tokio::test]
async fn html_instead_of_json_is_malformed() {
    let router = Router::new().fallback(|| async { "<html>sorry</html>" });
    let svc = service(serve(router).await);

    let err = svc.related("rust", "CZ", "12m").await.unwrap_err();
    assert!(matches!(err.kind, FetchErrorKind::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_provider_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = service(addr).trending("CZ").await.unwrap_err();
    assert!(matches!(err.kind, FetchErrorKind::Transport(_)));
}
