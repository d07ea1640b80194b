use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::player::Player;
use crate::domain::team::Team;

/// Request body for creating or updating a team
#[derive(Debug, Deserialize)]
pub struct TeamRequest {
    pub name: String,
    pub declared_count: u32,
    pub region: String,
    pub country: String,
}

/// Response shape for a single team
///
/// `player_count` is derived from the roster; `declared_count` echoes the
/// user-entered capacity.
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub declared_count: u32,
    pub player_count: usize,
    pub region: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub players: Vec<Player>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            declared_count: team.declared_count(),
            player_count: team.player_count(),
            region: team.region().to_string(),
            country: team.country().to_string(),
            created_at: team.created_at(),
            players: team.players().to_vec(),
        }
    }
}

/// List all teams
///
/// GET /api/teams
pub async fn list_teams(State(state): State<AppState>) -> Json<Vec<TeamResponse>> {
    let directory = state.directory.read().await;
    Json(directory.teams().iter().map(TeamResponse::from).collect())
}

/// Create a new team
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(req): Json<TeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let mut directory = state.directory.write().await;
    let team = directory.create_team(req.name, req.declared_count, req.region, req.country)?;

    state.team_store.save(directory.teams()).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// Replace a team's details
///
/// PUT /api/teams/:id
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let mut directory = state.directory.write().await;
    let team = directory.update_team(id, req.name, req.declared_count, req.region, req.country)?;

    state.team_store.save(directory.teams()).await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Delete a team, releasing its roster
///
/// DELETE /api/teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut directory = state.directory.write().await;
    directory.delete_team(id)?;

    state.team_store.save(directory.teams()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Assign an available player to a team
///
/// POST /api/teams/:id/players
///
/// The body is the player snapshot being moved out of the available pool.
pub async fn assign_player(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(player): Json<Player>,
) -> Result<Json<TeamResponse>, ApiError> {
    let player_name = player.full_name();
    let mut directory = state.directory.write().await;
    let team = directory.assign_player(id, player)?;

    state.team_store.save(directory.teams()).await?;
    tracing::info!("{} added to {}", player_name, team.name());

    Ok(Json(TeamResponse::from(&team)))
}

/// Remove a player from a team's roster
///
/// DELETE /api/teams/:id/players/:player_id
pub async fn remove_player(
    State(state): State<AppState>,
    Path((id, player_id)): Path<(Uuid, String)>,
) -> Result<Json<TeamResponse>, ApiError> {
    let mut directory = state.directory.write().await;
    let removed = directory.remove_player(id, &player_id)?;

    state.team_store.save(directory.teams()).await?;

    let team = directory
        .find(id)
        .map(TeamResponse::from)
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;
    tracing::info!("{} removed from {}", removed.full_name(), team.name);

    Ok(Json(team))
}
