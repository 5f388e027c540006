//! User REST API handlers
//!
//! Lookups and updates of an unknown id answer `200 null`, and delete
//! always acknowledges. Only bad input and store failures are errors.

use crate::{
    ApiResult, AppState, CreateUserRequest, DeleteResponse, JsonBody, PathId, UpdateUserRequest,
    UserDto,
};

use axum::{Json, extract::State};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/users
///
/// List all users in insertion order
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let users = state.store.list_all().await?;
    log::debug!("Listed {} users", users.len());

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> ApiResult<Json<UserDto>> {
    let user = state.store.insert(req.fields).await?;

    log::info!("Created user {} via REST API", user.id);

    Ok(Json(user.into()))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    PathId(user_id): PathId,
) -> ApiResult<Json<Option<UserDto>>> {
    let user = state.store.find_by_id(user_id).await?;
    if user.is_none() {
        log::debug!("User {} not found", user_id);
    }

    Ok(Json(user.map(UserDto::from)))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    PathId(user_id): PathId,
    JsonBody(req): JsonBody<UpdateUserRequest>,
) -> ApiResult<Json<Option<UserDto>>> {
    let user = state.store.update_by_id(user_id, req.fields).await?;
    match user {
        Some(_) => log::info!("Updated user {} via REST API", user_id),
        None => log::debug!("Update skipped, user {} not found", user_id),
    }

    Ok(Json(user.map(UserDto::from)))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    PathId(user_id): PathId,
) -> ApiResult<Json<DeleteResponse>> {
    if state.store.delete_by_id(user_id).await? {
        log::info!("Deleted user {} via REST API", user_id);
    } else {
        log::debug!("Delete of unknown user {}", user_id);
    }

    Ok(Json(DeleteResponse::user_deleted()))
}
