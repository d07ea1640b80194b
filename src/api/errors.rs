use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::repositories::StoreError;
use crate::domain::session::SessionError;
use crate::domain::team::TeamError;
use crate::feed::FeedError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 429 Too Many Requests error
    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self::new(StatusCode::TOO_MANY_REQUESTS, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<TeamError> for ApiError {
    fn from(error: TeamError) -> Self {
        match &error {
            TeamError::NameTooShort
            | TeamError::RegionTooShort
            | TeamError::CountryTooShort => Self::bad_request(error.to_string()),
            TeamError::DuplicateName | TeamError::PlayerAlreadyAssigned(_) => {
                Self::conflict(error.to_string())
            }
            TeamError::TeamNotFound(_) | TeamError::PlayerNotInRoster(_) => {
                Self::not_found(error.to_string())
            }
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        Self::bad_request(error.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        Self::internal_server_error(format!("Storage failure: {}", error))
    }
}

impl From<FeedError> for ApiError {
    fn from(error: FeedError) -> Self {
        match &error {
            FeedError::RateLimited => Self::too_many_requests(error.to_string()),
            FeedError::Fetch(_) => Self::internal_server_error(error.to_string()),
        }
    }
}
