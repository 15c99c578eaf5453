// src/services/team_service.rs
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{validate_team, Team, TeamHierarchy, TeamWithPlayerCount};
use crate::error::{AppError, AppResult};
use crate::repositories::{PlayerRepository, TeamRepository};

#[derive(Debug, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
    pub logo: String,
    pub color: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateTeamRequest {
    pub team_id: Uuid,
    pub name: String,
    pub logo: String,
    pub color: String,
    pub description: Option<String>,
}

pub struct TeamService {
    team_repo: Arc<dyn TeamRepository>,
    player_repo: Arc<dyn PlayerRepository>,
}

impl TeamService {
    pub fn new(team_repo: Arc<dyn TeamRepository>, player_repo: Arc<dyn PlayerRepository>) -> Self {
        Self {
            team_repo,
            player_repo,
        }
    }

    pub fn create_team(&self, request: CreateTeamRequest, owner_id: Uuid) -> AppResult<Team> {
        let team = Team::new(
            request.name,
            &request.logo,
            &request.color,
            request.description,
            owner_id,
        );
        validate_team(&team).map_err(AppError::Domain)?;

        self.team_repo.save(&team)?;
        debug!("Created team {} for owner {}", team.id, owner_id);
        Ok(team)
    }

    pub fn get_team(&self, id: Uuid, owner_id: Uuid) -> AppResult<Team> {
        self.team_repo
            .get_by_id(id, owner_id)?
            .ok_or(AppError::NotFound)
    }

    pub fn get_team_with_player_count(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> AppResult<TeamWithPlayerCount> {
        self.team_repo
            .get_by_id_with_player_count(id, owner_id)?
            .ok_or(AppError::NotFound)
    }

    pub fn list_teams(&self, owner_id: Uuid) -> AppResult<Vec<Team>> {
        self.team_repo.list_by_owner(owner_id)
    }

    pub fn list_teams_with_player_count(
        &self,
        owner_id: Uuid,
    ) -> AppResult<Vec<TeamWithPlayerCount>> {
        self.team_repo.list_by_owner_with_player_count(owner_id)
    }

    /// Full replace of the mutable fields. Rejects an empty name before
    /// touching the store, so an invalid request mutates nothing.
    pub fn update_team(&self, request: UpdateTeamRequest, owner_id: Uuid) -> AppResult<Team> {
        let mut team = self
            .team_repo
            .get_by_id(request.team_id, owner_id)?
            .ok_or(AppError::NotFound)?;

        team.apply_update(
            request.name,
            &request.logo,
            &request.color,
            request.description,
        );
        validate_team(&team).map_err(AppError::Domain)?;

        if !self.team_repo.update(&team)? {
            return Err(AppError::NotFound);
        }
        Ok(team)
    }

    /// Deleting a team never deletes its players; the store's
    /// ON DELETE SET NULL turns them into global players atomically.
    pub fn delete_team(&self, id: Uuid, owner_id: Uuid) -> AppResult<()> {
        if !self.team_repo.delete(id, owner_id)? {
            return Err(AppError::NotFound);
        }
        debug!("Deleted team {} for owner {}", id, owner_id);
        Ok(())
    }

    /// The team together with its ordered roster (position NULL last,
    /// then position, then name).
    pub fn get_hierarchy(&self, id: Uuid, owner_id: Uuid) -> AppResult<TeamHierarchy> {
        let team = self
            .team_repo
            .get_by_id(id, owner_id)?
            .ok_or(AppError::NotFound)?;
        let players = self.player_repo.list_by_team(id, owner_id)?;

        Ok(TeamHierarchy { team, players })
    }

    pub fn count_teams(&self, owner_id: Uuid) -> AppResult<i64> {
        self.team_repo.count_by_owner(owner_id)
    }
}
