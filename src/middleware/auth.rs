use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};

use crate::{AppState, error::AppError};

/// 共享密钥所在的请求头
pub const API_KEY_HEADER: &str = "X-API-Key";

// 比较摘要而不是原文，比较时间与密钥内容无关
fn secret_matches(provided: &str, expected: &str) -> bool {
    Sha256::digest(provided.as_bytes()) == Sha256::digest(expected.as_bytes())
}

pub async fn api_key_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|header| header.to_str().ok());

    match provided {
        Some(key) if secret_matches(key, &state.config.api_key) => Ok(next.run(request).await),
        _ => {
            tracing::debug!("Rejected request to {}: missing or invalid API key", request.uri().path());
            Err(AppError::Unauthorized)
        }
    }
}
