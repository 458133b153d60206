//! `/users` endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::User;
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

/// Create the users router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    debug!("Creating user");

    let user = state
        .user_service
        .create(request)
        .await
        .map_err(ApiError::from)?;

    debug!(id = %user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    debug!("Listing users");

    let users = state.user_service.list().await.map_err(ApiError::from)?;

    Ok(Json(users))
}

/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    debug!(id = %id, "Getting user");

    let user = state.user_service.get(&id).await.map_err(ApiError::from)?;

    Ok(Json(user))
}

/// PUT /users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    debug!(id = %id, "Updating user");

    let user = state
        .user_service
        .update(&id, request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(user))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(id = %id, "Deleting user");

    state
        .user_service
        .delete(&id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
