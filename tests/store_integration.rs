//! Integration tests for the storage layer
//!
//! These tests verify that the JSON-file store implementations round-trip
//! the team collection and the guest session exactly, including the
//! empty-storage and overwrite paths.

use courtside_api::domain::player::Player;
use courtside_api::domain::repositories::{SessionStore, TeamStore};
use courtside_api::domain::team::{Team, TeamDirectory};
use courtside_api::infrastructure::repositories::{JsonFileSessionStore, JsonFileTeamStore};

fn player(id: &str) -> Player {
    Player {
        id: id.to_string(),
        first_name: format!("First{}", id),
        last_name: format!("Last{}", id),
        position: Some("C".to_string()),
        height_feet: Some(7),
        height_inches: Some(0),
        team: None,
    }
}

fn sample_teams() -> Vec<Team> {
    let mut directory = TeamDirectory::new();
    directory.create_team("Team Alpha", 5, "West", "USA").unwrap();
    directory.create_team("Team Beta", 8, "East", "USA").unwrap();

    let alpha = directory.teams()[0].id();
    directory.assign_player(alpha, player("1")).unwrap();
    directory.assign_player(alpha, player("2")).unwrap();

    directory.teams().to_vec()
}

#[tokio::test]
async fn test_team_store_round_trip_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileTeamStore::new(dir.path().join("teams.json"));
    let teams = sample_teams();

    store.save(&teams).await.expect("save teams");
    let loaded = store.load().await.expect("load teams");

    assert_eq!(loaded, teams);
    assert_eq!(loaded[0].player_count(), 2);
    assert_eq!(loaded[0].players()[0].id, "1");
    assert_eq!(loaded[0].players()[1].id, "2");
}

#[tokio::test]
async fn test_team_store_missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileTeamStore::new(dir.path().join("teams.json"));

    let loaded = store.load().await.expect("load from missing file");

    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_team_store_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("state").join("deep").join("teams.json");
    let store = JsonFileTeamStore::new(&nested);

    store.save(&sample_teams()).await.expect("save into nested dir");

    assert!(nested.exists());
}

#[tokio::test]
async fn test_team_store_save_replaces_previous_collection() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileTeamStore::new(dir.path().join("teams.json"));

    store.save(&sample_teams()).await.expect("first save");

    let mut directory = TeamDirectory::new();
    directory.create_team("Only Team", 3, "North", "CAN").unwrap();
    store.save(directory.teams()).await.expect("second save");

    let loaded = store.load().await.expect("load teams");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name(), "Only Team");
}

#[tokio::test]
async fn test_reloaded_collection_keeps_partition_invariant() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileTeamStore::new(dir.path().join("teams.json"));
    store.save(&sample_teams()).await.expect("save teams");

    let directory = TeamDirectory::from_teams(store.load().await.expect("load teams"));

    // ids owned before the round trip are still owned after it
    assert!(directory.owner_of("1").is_some());
    assert!(directory.owner_of("2").is_some());
    let available = directory.available_from(&[player("1"), player("3")]);
    let ids: Vec<&str> = available.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["3"]);
}

#[tokio::test]
async fn test_session_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileSessionStore::new(dir.path().join("session.json"));

    store.save("jordan").await.expect("save session");
    let loaded = store.load().await.expect("load session");

    assert_eq!(loaded.as_deref(), Some("jordan"));
}

#[tokio::test]
async fn test_session_store_missing_file_is_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileSessionStore::new(dir.path().join("session.json"));

    assert!(store.load().await.expect("load session").is_none());
}

#[tokio::test]
async fn test_session_store_empty_file_is_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    tokio::fs::write(&path, "").await.unwrap();
    let store = JsonFileSessionStore::new(&path);

    assert!(store.load().await.expect("load session").is_none());
}

#[tokio::test]
async fn test_session_store_clear_removes_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileSessionStore::new(dir.path().join("session.json"));

    store.save("jordan").await.expect("save session");
    store.clear().await.expect("clear session");

    assert!(store.load().await.expect("load session").is_none());
}

#[tokio::test]
async fn test_session_store_clear_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileSessionStore::new(dir.path().join("session.json"));

    store.clear().await.expect("clear with nothing stored");
    store.save("jordan").await.expect("save session");
    store.clear().await.expect("first clear");
    store.clear().await.expect("second clear");

    assert!(store.load().await.expect("load session").is_none());
}
