use std::fmt;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{CountResponse, MessageResponse, UserMessageResponse, UserResponse},
    domain::models::{ProfilePatch, Registration},
    routes::ApiError,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/total-users-count", get(total_users_count))
        .route("/all-users", get(all_users))
        .route("/update-password/:email", put(update_password))
        .route(
            "/:email",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[instrument(name = "POST /users/register", skip(app_state, body))]
async fn register(
    State(app_state): State<AppState>,
    body: Result<Json<Registration>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(registration) = body?;
    app_state.user_service.register(registration).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

#[derive(Deserialize)]
struct LoginPayload {
    email: String,
    password: String,
}

impl fmt::Debug for LoginPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginPayload")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[instrument(name = "POST /users/login", skip(app_state, body))]
async fn login(
    State(app_state): State<AppState>,
    body: Result<Json<LoginPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = body?;
    let user = app_state
        .user_service
        .login(&payload.email, &payload.password)
        .await?;

    tracing::debug!(user_id = %user.id, "credentials accepted");
    Ok(Json(MessageResponse::new("User Logged In Succesfully !!")))
}

#[instrument(name = "GET /users/total-users-count", skip(app_state))]
async fn total_users_count(
    State(app_state): State<AppState>,
) -> Result<Json<CountResponse>, ApiError> {
    let count = app_state.user_service.count().await?;

    Ok(Json(CountResponse { count }))
}

#[instrument(name = "GET /users/all-users", skip(app_state))]
async fn all_users(State(app_state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = app_state.user_service.all().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[instrument(name = "GET /users/:email", skip(app_state))]
async fn get_user(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = app_state.user_service.get(&email).await?;

    Ok(Json(user.into()))
}

#[instrument(name = "PUT /users/:email", skip(app_state, body))]
async fn update_user(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
    body: Result<Json<ProfilePatch>, JsonRejection>,
) -> Result<Json<UserMessageResponse>, ApiError> {
    let Json(patch) = body?;
    let user = app_state.user_service.update_profile(&email, patch).await?;

    Ok(Json(UserMessageResponse {
        message: "User updated successfully".to_string(),
        user: user.into(),
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordChange {
    current_password: String,
    new_password: String,
}

impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChange")
            .field("current_password", &"[redacted]")
            .field("new_password", &"[redacted]")
            .finish()
    }
}

#[instrument(name = "PUT /users/update-password/:email", skip(app_state, body))]
async fn update_password(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
    body: Result<Json<PasswordChange>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(change) = body?;
    app_state
        .user_service
        .update_password(&email, &change.current_password, &change.new_password)
        .await?;

    Ok(Json(MessageResponse::new("Password updated successfully")))
}

#[instrument(name = "DELETE /users/:email", skip(app_state))]
async fn delete_user(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserMessageResponse>, ApiError> {
    let user = app_state.user_service.delete(&email).await?;

    Ok(Json(UserMessageResponse {
        message: "User deleted successfully".to_string(),
        user: user.into(),
    }))
}
