use std::collections::HashSet;

use uuid::Uuid;

use super::errors::{TeamError, TeamResult};
use super::team::Team;
use crate::domain::player::Player;

/// The in-memory team collection and its partition rules
///
/// Owns every user-created team and enforces the one invariant the whole
/// application hangs on: a player id is owned by at most one team. The
/// available-players view is derived, never stored: whatever the directory
/// fetch returned minus every owned id, deduplicated by id.
///
/// Every operation that can fail validates before mutating, so a rejected
/// call leaves the collection exactly as it was.
#[derive(Debug, Default)]
pub struct TeamDirectory {
    teams: Vec<Team>,
}

impl TeamDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a directory from previously persisted teams
    pub fn from_teams(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    /// Returns all teams in creation order
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Looks up a team by id
    pub fn find(&self, id: Uuid) -> Option<&Team> {
        self.teams.iter().find(|t| t.id() == id)
    }

    /// Creates a team and appends it to the collection
    ///
    /// # Returns
    /// * `Ok(Team)` - A copy of the stored record
    /// * `Err(TeamError)` - On a field constraint violation or a
    ///   case-insensitive name collision; the collection is unchanged
    pub fn create_team(
        &mut self,
        name: impl Into<String>,
        declared_count: u32,
        region: impl Into<String>,
        country: impl Into<String>,
    ) -> TeamResult<Team> {
        let team = Team::new(name, declared_count, region, country)?;
        if self.is_name_taken(team.name()) {
            return Err(TeamError::DuplicateName);
        }
        self.teams.push(team.clone());
        Ok(team)
    }

    /// Replaces a team's editable details, keeping its roster
    ///
    /// Uniqueness is not re-checked on update, so a team may keep its own
    /// name across an edit.
    pub fn update_team(
        &mut self,
        id: Uuid,
        name: impl Into<String>,
        declared_count: u32,
        region: impl Into<String>,
        country: impl Into<String>,
    ) -> TeamResult<Team> {
        let team = self.find_mut(id)?;
        team.update_details(name, declared_count, region, country)?;
        Ok(team.clone())
    }

    /// Removes a team, releasing its roster back to the available pool
    ///
    /// # Returns
    /// * `Ok(Team)` - The removed team, roster included
    /// * `Err(TeamError::TeamNotFound)` - If no team has that id
    pub fn delete_team(&mut self, id: Uuid) -> TeamResult<Team> {
        let index = self
            .teams
            .iter()
            .position(|t| t.id() == id)
            .ok_or(TeamError::TeamNotFound(id))?;
        Ok(self.teams.remove(index))
    }

    /// Moves a player snapshot from the available pool into a team's roster
    ///
    /// # Returns
    /// * `Ok(Team)` - A copy of the updated team
    /// * `Err(TeamError::PlayerAlreadyAssigned)` - If any team owns the id
    /// * `Err(TeamError::TeamNotFound)` - If no team has that id
    pub fn assign_player(&mut self, team_id: Uuid, player: Player) -> TeamResult<Team> {
        if self.owner_of(&player.id).is_some() {
            return Err(TeamError::PlayerAlreadyAssigned(player.id));
        }
        let team = self.find_mut(team_id)?;
        team.add_player(player)?;
        Ok(team.clone())
    }

    /// Removes a player from a team's roster and returns the snapshot
    ///
    /// The id reappears in the available view on the next recomputation.
    pub fn remove_player(&mut self, team_id: Uuid, player_id: &str) -> TeamResult<Player> {
        let team = self.find_mut(team_id)?;
        team.remove_player(player_id)
    }

    /// Returns the team currently owning a player id, if any
    pub fn owner_of(&self, player_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.has_player(player_id))
    }

    /// Returns every player id owned by any team
    pub fn owned_ids(&self) -> HashSet<&str> {
        self.teams
            .iter()
            .flat_map(|t| t.players().iter().map(|p| p.id.as_str()))
            .collect()
    }

    /// Computes the available view of a directory fetch
    ///
    /// Keeps fetch order, drops every owned id, and deduplicates by id so a
    /// repeated upstream row can never appear twice.
    pub fn available_from(&self, fetched: &[Player]) -> Vec<Player> {
        let owned = self.owned_ids();
        let mut seen: HashSet<&str> = HashSet::new();
        fetched
            .iter()
            .filter(|p| !owned.contains(p.id.as_str()) && seen.insert(p.id.as_str()))
            .cloned()
            .collect()
    }

    /// Case-insensitive name collision check
    fn is_name_taken(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.teams.iter().any(|t| t.name().to_lowercase() == lowered)
    }

    fn find_mut(&mut self, id: Uuid) -> TeamResult<&mut Team> {
        self.teams
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(TeamError::TeamNotFound(id))
    }
}
