use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::session::GuestSession;

/// Request body for signing in
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

/// The current guest session
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub username: String,
}

/// Sign in with a display name
///
/// POST /api/auth/login
///
/// There is no credential: any name of at least 4 characters opens a
/// session. A rejected name writes nothing.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = GuestSession::open(req.username)?;

    state.session_store.save(session.username()).await?;

    Ok(Json(SessionResponse {
        username: session.username().to_string(),
    }))
}

/// Return the stored session, if one exists
///
/// GET /api/auth/session
pub async fn current_session(
    State(state): State<AppState>,
) -> Result<Json<SessionResponse>, ApiError> {
    match state.session_store.load().await? {
        Some(username) if !username.is_empty() => Ok(Json(SessionResponse { username })),
        _ => Err(ApiError::unauthorized("Not signed in")),
    }
}

/// Drop the stored session
///
/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.session_store.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
