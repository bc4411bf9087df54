use axum::extract::{
    Json, Path, State,
    rejection::{JsonRejection, PathRejection},
};

use crate::{AppState, error::AppError, routes::group::{DeleteResponse, Group}};

use super::model::{CreateKeywordRequest, Keyword};

#[axum::debug_handler]
pub async fn create_keyword(
    State(state): State<AppState>,
    req: Result<Json<CreateKeywordRequest>, JsonRejection>,
) -> Result<Json<Keyword>, AppError> {
    let Json(req) = req?;
    if req.term.trim().is_empty() {
        return Err(AppError::BadRequest("Keyword must not be empty".to_string()));
    }
    if !Group::exists(&state.pool, req.group_id).await? {
        return Err(AppError::NotFound("Group does not exist".to_string()));
    }

    let keyword = Keyword::create(&state.pool, req.group_id, &req.term).await?;
    tracing::info!("Added keyword {:?} to group {}", keyword.term, keyword.group_id);
    Ok(Json(keyword))
}

#[axum::debug_handler]
pub async fn delete_keyword(
    State(state): State<AppState>,
    keyword_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, AppError> {
    let Path(keyword_id) = keyword_id?;
    Keyword::delete(&state.pool, keyword_id).await?;
    Ok(Json(DeleteResponse { ok: true }))
}
