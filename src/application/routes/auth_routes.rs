// src/application/routes/auth_routes.rs
//
// Registration and login. No session is issued; a successful login
// returns the user.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tokio::task::JoinError;

use crate::application::dto::{CredentialsDto, UserDto};
use crate::application::error_handling::ErrorResponse;
use crate::application::state::AppState;
use crate::error::AppError;
use crate::services::RegisterUserRequest;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<CredentialsDto>,
) -> Result<(StatusCode, Json<UserDto>), ErrorResponse> {
    // Argon2 hashing is CPU-bound
    let user = tokio::task::spawn_blocking(move || {
        state.auth_service.add_user(RegisterUserRequest {
            user_name: dto.user_name,
            password: dto.password,
        })
    })
    .await
    .map_err(blocking_task_failed)??;

    Ok((StatusCode::CREATED, Json(UserDto::from(user.as_ref()))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<CredentialsDto>,
) -> Result<Json<UserDto>, ErrorResponse> {
    let user = tokio::task::spawn_blocking(move || {
        state
            .auth_service
            .authenticate_user(&dto.user_name, &dto.password)
    })
    .await
    .map_err(blocking_task_failed)??;

    Ok(Json(UserDto::from(user.as_ref())))
}

fn blocking_task_failed(err: JoinError) -> ErrorResponse {
    ErrorResponse::from_app_error(AppError::Other(format!(
        "Credential task failed: {}",
        err
    )))
}
