use axum::extract::{
    Json, Path, State,
    rejection::{JsonRejection, PathRejection},
};
use serde::Serialize;

use crate::{AppState, error::AppError};

use super::model::{CreateGroupRequest, Group, GroupInfo};

#[derive(Debug, Serialize)]
pub struct GroupList {
    pub items: Vec<GroupInfo>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

#[axum::debug_handler]
pub async fn list_groups(State(state): State<AppState>) -> Result<Json<GroupList>, AppError> {
    let items = Group::list_with_keywords(&state.pool).await?;
    Ok(Json(GroupList { items }))
}

#[axum::debug_handler]
pub async fn create_group(
    State(state): State<AppState>,
    req: Result<Json<CreateGroupRequest>, JsonRejection>,
) -> Result<Json<Group>, AppError> {
    let Json(req) = req?;
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Group name must not be empty".to_string()));
    }
    let group = Group::create(&state.pool, &req.name).await?;
    tracing::info!("Created group {} ({})", group.id, group.name);
    Ok(Json(group))
}

#[axum::debug_handler]
pub async fn delete_group(
    State(state): State<AppState>,
    group_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, AppError> {
    let Path(group_id) = group_id?;
    Group::delete(&state.pool, group_id).await?;
    tracing::info!("Deleted group {}", group_id);
    Ok(Json(DeleteResponse { ok: true }))
}
