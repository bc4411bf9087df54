use axum::{
    Router,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::{
    AppState,
    middleware::{api_key_middleware, log_errors},
    routes,
};

// 趋势相关的路由
fn trend_routes() -> Router<AppState> {
    Router::new()
        .route("/trending", get(routes::trends::trending))
        .route("/interest", get(routes::trends::interest))
        .route("/related", get(routes::trends::related))
        .route("/batch_interest", post(routes::trends::batch_interest))
}

// 群组和关键词路由
fn group_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/groups",
            get(routes::group::list_groups).post(routes::group::create_group),
        )
        .route("/groups/{group_id}", delete(routes::group::delete_group))
        .route("/keywords", post(routes::keyword::create_keyword))
        .route("/keywords/{keyword_id}", delete(routes::keyword::delete_keyword))
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    // /api 下的所有路由都需要密钥
    let api_routes = Router::new()
        .merge(trend_routes())
        .merge(group_routes())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            api_key_middleware,
        ));

    Router::new()
        .route("/health", get(routes::health))
        .nest("/api", api_routes)
        .layer(
            // 浏览器预检请求不带密钥，CORS 必须在最外层
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(axum::middleware::from_fn(log_errors)),
        )
        .with_state(state)
}
