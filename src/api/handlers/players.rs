use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::player::Player;
use crate::feed::source::PlayerSource;

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

/// Query string accepted by the proxy route
#[derive(Debug, Deserialize)]
pub struct PlayerQuery {
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

/// Proxy one page of the external player directory
///
/// GET /api/player?search=&page=&per_page=
///
/// Relays the upstream body verbatim on success. Any upstream failure
/// collapses into a generic error body carrying the upstream's status code,
/// or 500 when the request never completed.
pub async fn proxy_players(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Response {
    let reply = state
        .players
        .fetch_raw(query.search.as_deref(), query.page, query.per_page)
        .await;

    match reply {
        Ok(reply) if reply.is_success() => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            reply.body,
        )
            .into_response(),
        Ok(reply) => {
            let status = StatusCode::from_u16(reply.status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            ApiError::new(status, "Failed to fetch players").into_response()
        }
        Err(e) => {
            tracing::warn!("Player directory request failed: {}", e);
            ApiError::internal_server_error("Failed to fetch players").into_response()
        }
    }
}

/// The feed's accumulated state after a load
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub players: Vec<Player>,
    pub page: u32,
    pub has_more: bool,
}

/// Advance the player feed by one page
///
/// GET /api/players/feed
///
/// Each call pulls the next page into the accumulated list and returns the
/// whole list. Once exhausted (empty page or the 200-player ceiling) calls
/// become no-ops that keep returning the accumulated state.
pub async fn feed_next(State(state): State<AppState>) -> Result<Json<FeedResponse>, ApiError> {
    let mut feed = state.feed.lock().await;
    feed.load_more(&*state.players).await?;

    Ok(Json(FeedResponse {
        players: feed.players().to_vec(),
        page: feed.page(),
        has_more: feed.has_more(),
    }))
}

/// Query string for the available-players view
#[derive(Debug, Deserialize)]
pub struct AvailableQuery {
    pub search: Option<String>,
}

/// Players not owned by any team
#[derive(Debug, Serialize)]
pub struct AvailableResponse {
    pub players: Vec<Player>,
}

/// List the available players for team assignment
///
/// GET /api/players/available?search=
///
/// Fetches the first directory page and subtracts every id a team already
/// owns, deduplicating by id.
pub async fn available_players(
    State(state): State<AppState>,
    Query(query): Query<AvailableQuery>,
) -> Result<Json<AvailableResponse>, ApiError> {
    let page = state
        .players
        .fetch_page(query.search.as_deref(), 1, 10)
        .await?;

    let directory = state.directory.read().await;
    let players = directory.available_from(&page.data);

    Ok(Json(AvailableResponse { players }))
}
