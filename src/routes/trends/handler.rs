use axum::extract::{
    Json, Query, State,
    rejection::{JsonRejection, QueryRejection},
};

use crate::{
    AppState,
    error::AppError,
    trends::{BatchResult, RelatedBlock, TimeSeries, TrendingList},
};

use super::model::{BatchInterestRequest, KeywordQuery, TrendingQuery};

#[axum::debug_handler]
pub async fn trending(
    State(state): State<AppState>,
    query: Result<Query<TrendingQuery>, QueryRejection>,
) -> Result<Json<TrendingList>, AppError> {
    let Query(query) = query?;
    let items = state.trends.trending(&query.geo).await?;
    Ok(Json(TrendingList { items }))
}

#[axum::debug_handler]
pub async fn interest(
    State(state): State<AppState>,
    query: Result<Query<KeywordQuery>, QueryRejection>,
) -> Result<Json<TimeSeries>, AppError> {
    let Query(query) = query?;
    let series = state
        .trends
        .interest(&query.kw, &query.geo, &query.since)
        .await?;
    Ok(Json(series))
}

#[axum::debug_handler]
pub async fn related(
    State(state): State<AppState>,
    query: Result<Query<KeywordQuery>, QueryRejection>,
) -> Result<Json<RelatedBlock>, AppError> {
    let Query(query) = query?;
    let block = state
        .trends
        .related(&query.kw, &query.geo, &query.since)
        .await?;
    Ok(Json(block))
}

/// 批量查询不会因为单个关键词失败而失败，失败的关键词直接从结果中省略；
/// 只有请求体本身无法解析时返回 400
#[axum::debug_handler]
pub async fn batch_interest(
    State(state): State<AppState>,
    req: Result<Json<BatchInterestRequest>, JsonRejection>,
) -> Result<Json<BatchResult>, AppError> {
    let Json(req) = req?;
    Ok(Json(
        state
            .trends
            .batch_interest(&req.seeds, &req.geo, &req.since)
            .await,
    ))
}
