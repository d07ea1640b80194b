// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod state;

use axum::routing::{delete, get, post, put};
use axum::Router;

use handlers::{auth, players, teams};
use state::AppState;

/// Builds the application router
///
/// Shared between `main` and the integration tests; middleware layers are
/// applied by the caller.
pub fn routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(auth::health_check))
        // Session routes
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::current_session))
        // Player routes
        .route("/api/player", get(players::proxy_players))
        .route("/api/players/feed", get(players::feed_next))
        .route("/api/players/available", get(players::available_players))
        // Team routes
        .route("/api/teams", get(teams::list_teams).post(teams::create_team))
        .route(
            "/api/teams/:id",
            put(teams::update_team).delete(teams::delete_team),
        )
        .route("/api/teams/:id/players", post(teams::assign_player))
        .route(
            "/api/teams/:id/players/:player_id",
            delete(teams::remove_player),
        )
        // Shared state
        .with_state(state)
}
