// src/services/player_service.rs
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{validate_player, Player, PlayerWithTeam};
use crate::error::{AppError, AppResult};
use crate::repositories::{PlayerRepository, TeamRepository};

#[derive(Debug, Clone)]
pub struct CreatePlayerRequest {
    pub name: String,
    pub position: Option<String>,
    pub jersey_number: Option<u32>,
    /// None creates a global (unassigned) player
    pub team_id: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct UpdatePlayerRequest {
    pub player_id: Uuid,
    pub name: String,
    pub position: Option<String>,
    pub jersey_number: Option<u32>,
    /// None makes the player global
    pub team_id: Option<Uuid>,
}

pub struct PlayerService {
    player_repo: Arc<dyn PlayerRepository>,
    team_repo: Arc<dyn TeamRepository>,
}

impl PlayerService {
    pub fn new(player_repo: Arc<dyn PlayerRepository>, team_repo: Arc<dyn TeamRepository>) -> Self {
        Self {
            player_repo,
            team_repo,
        }
    }

    /// A non-null team_id must reference a team owned by the same caller.
    /// Because team lookup is owner-scoped, another user's team and a
    /// non-existent team are rejected identically.
    fn ensure_team_owned(&self, team_id: Option<Uuid>, owner_id: Uuid) -> AppResult<()> {
        if let Some(team_id) = team_id {
            if self.team_repo.get_by_id(team_id, owner_id)?.is_none() {
                return Err(AppError::Validation(
                    "Team not owned by caller".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn create_player(&self, request: CreatePlayerRequest, owner_id: Uuid) -> AppResult<Player> {
        let player = Player::new(
            request.name,
            request.position,
            request.jersey_number,
            request.team_id,
            owner_id,
        );
        validate_player(&player).map_err(AppError::Domain)?;
        self.ensure_team_owned(player.team_id, owner_id)?;

        self.player_repo.save(&player)?;
        debug!("Created player {} for owner {}", player.id, owner_id);
        Ok(player)
    }

    /// Joined single-player lookup. Contract detail: this resolves through
    /// the team join, so a GLOBAL player is NotFound here. Use
    /// `list_global_players` to reach unassigned players.
    pub fn get_player(&self, id: Uuid, owner_id: Uuid) -> AppResult<PlayerWithTeam> {
        self.player_repo
            .get_by_id(id, owner_id)?
            .ok_or(AppError::NotFound)
    }

    pub fn list_players(&self, owner_id: Uuid) -> AppResult<Vec<PlayerWithTeam>> {
        self.player_repo.list_by_owner(owner_id)
    }

    pub fn list_global_players(&self, owner_id: Uuid) -> AppResult<Vec<Player>> {
        self.player_repo.list_global_by_owner(owner_id)
    }

    pub fn list_team_players(&self, team_id: Uuid, owner_id: Uuid) -> AppResult<Vec<Player>> {
        self.player_repo.list_by_team(team_id, owner_id)
    }

    /// Full replace of the mutable fields. Rejects an empty name or a
    /// foreign team before touching the store.
    pub fn update_player(&self, request: UpdatePlayerRequest, owner_id: Uuid) -> AppResult<Player> {
        let mut player = self.require_owned(request.player_id, owner_id)?;

        player.apply_update(
            request.name,
            request.position,
            request.jersey_number,
            request.team_id,
        );
        validate_player(&player).map_err(AppError::Domain)?;
        self.ensure_team_owned(player.team_id, owner_id)?;

        if !self.player_repo.update(&player)? {
            return Err(AppError::NotFound);
        }
        Ok(player)
    }

    pub fn assign_to_team(&self, player_id: Uuid, team_id: Uuid, owner_id: Uuid) -> AppResult<()> {
        self.ensure_team_owned(Some(team_id), owner_id)?;

        if !self.player_repo.assign_to_team(player_id, team_id, owner_id)? {
            return Err(AppError::NotFound);
        }
        debug!("Assigned player {} to team {}", player_id, team_id);
        Ok(())
    }

    /// Idempotent: unassigning an already-global player succeeds.
    pub fn unassign_from_team(&self, player_id: Uuid, owner_id: Uuid) -> AppResult<()> {
        if !self.player_repo.unassign_from_team(player_id, owner_id)? {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    pub fn delete_player(&self, id: Uuid, owner_id: Uuid) -> AppResult<()> {
        if !self.player_repo.delete(id, owner_id)? {
            return Err(AppError::NotFound);
        }
        debug!("Deleted player {} for owner {}", id, owner_id);
        Ok(())
    }

    pub fn count_players(&self, owner_id: Uuid) -> AppResult<i64> {
        self.player_repo.count_by_owner(owner_id)
    }

    pub fn count_team_players(&self, team_id: Uuid, owner_id: Uuid) -> AppResult<i64> {
        self.player_repo.count_by_team(team_id, owner_id)
    }

    /// Case-insensitive substring search over player and team names.
    /// A blank query is rejected before reaching the store.
    pub fn search_players(&self, text: &str, owner_id: Uuid) -> AppResult<Vec<PlayerWithTeam>> {
        let query = text.trim();
        if query.is_empty() {
            return Err(AppError::Validation(
                "Search query cannot be empty".to_string(),
            ));
        }
        self.player_repo.search(query, owner_id)
    }

    /// Owner-scoped row fetch; reaches global players too, unlike
    /// `get_player`.
    fn require_owned(&self, player_id: Uuid, owner_id: Uuid) -> AppResult<Player> {
        self.player_repo
            .get_owned(player_id, owner_id)?
            .ok_or(AppError::NotFound)
    }
}
