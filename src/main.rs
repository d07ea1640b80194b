use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use courtside_api::api;
use courtside_api::api::state::AppState;
use courtside_api::domain::repositories::TeamStore;
use courtside_api::domain::team::TeamDirectory;
use courtside_api::infrastructure::directory_client::{
    PlayerDirectoryClient, DEFAULT_PLAYERS_API_URL,
};
use courtside_api::infrastructure::repositories::{JsonFileSessionStore, JsonFileTeamStore};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Upstream player directory configuration
    let base_url = std::env::var("PLAYERS_API_URL").unwrap_or_else(|_| {
        tracing::info!("PLAYERS_API_URL not set, using default");
        DEFAULT_PLAYERS_API_URL.to_string()
    });
    let credential = std::env::var("AUTHORIZATION").ok();
    if credential.is_none() {
        tracing::warn!("AUTHORIZATION not set, directory calls will be unauthenticated");
    }
    let players = PlayerDirectoryClient::new(base_url, credential)
        .expect("Failed to build directory client");

    // Storage location
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());
    let team_store = JsonFileTeamStore::new(Path::new(&data_dir).join("teams.json"));
    let session_store = JsonFileSessionStore::new(Path::new(&data_dir).join("session.json"));

    // Rebuild the directory from persisted teams
    let teams = team_store.load().await.expect("Failed to load stored teams");
    tracing::info!("Loaded {} persisted teams", teams.len());
    let directory = TeamDirectory::from_teams(teams);

    let state = AppState::new(
        directory,
        Arc::new(team_store),
        Arc::new(session_store),
        Arc::new(players),
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = api::routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
