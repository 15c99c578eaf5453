// src/repositories/player_repository.rs

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::{Player, PlayerWithTeam};
use crate::error::{AppError, AppResult};

/// Shared SELECT list for player + optional team display fields
const PLAYER_WITH_TEAM_COLUMNS: &str = "p.id, p.name, p.position, p.jersey_number, p.team_id,
       p.owner_id, p.created_at, p.updated_at,
       t.name AS team_name, t.logo AS team_logo, t.color AS team_color";

#[cfg_attr(test, mockall::automock)]
pub trait PlayerRepository: Send + Sync {
    fn save(&self, player: &Player) -> AppResult<()>;
    /// Literal contract: INNER join to teams. A global player is absent
    /// through this entry point; fetch those via `list_global_by_owner`
    /// or `get_owned`.
    fn get_by_id(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<PlayerWithTeam>>;
    /// Plain owner-scoped row fetch, no join; reaches global players too
    fn get_owned(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Player>>;
    /// Outer-join listing: global players sort first, then by team name,
    /// then by player name.
    fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<PlayerWithTeam>>;
    /// Players with no team association, ordered by name
    fn list_global_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Player>>;
    /// Roster of one team: players without a position sort last, the rest
    /// by position, ties broken by name
    fn list_by_team(&self, team_id: Uuid, owner_id: Uuid) -> AppResult<Vec<Player>>;
    /// Returns false when no row matches id + owner_id
    fn update(&self, player: &Player) -> AppResult<bool>;
    fn assign_to_team(&self, player_id: Uuid, team_id: Uuid, owner_id: Uuid) -> AppResult<bool>;
    /// Idempotent; matching an already-global player still counts as success
    fn unassign_from_team(&self, player_id: Uuid, owner_id: Uuid) -> AppResult<bool>;
    fn delete(&self, id: Uuid, owner_id: Uuid) -> AppResult<bool>;
    fn count_by_owner(&self, owner_id: Uuid) -> AppResult<i64>;
    fn count_by_team(&self, team_id: Uuid, owner_id: Uuid) -> AppResult<i64>;
    /// Case-insensitive substring match on player name OR team name;
    /// ordering identical to `list_by_owner`
    fn search(&self, text: &str, owner_id: Uuid) -> AppResult<Vec<PlayerWithTeam>>;
}

pub struct SqlitePlayerRepository {
    pool: Arc<ConnectionPool>,
}

impl SqlitePlayerRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_player(row: &Row) -> Result<Player, rusqlite::Error> {
        let id = Uuid::parse_str(&row.get::<_, String>("id")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        let owner_id = Uuid::parse_str(&row.get::<_, String>("owner_id")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let team_id = row
            .get::<_, Option<String>>("team_id")?
            .map(|raw| Uuid::parse_str(&raw))
            .transpose()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let created_at = DateTime::parse_from_rfc3339(&row.get::<_, String>("created_at")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?
            .with_timezone(&Utc);
        let updated_at = DateTime::parse_from_rfc3339(&row.get::<_, String>("updated_at")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(Player {
            id,
            name: row.get("name")?,
            position: row.get("position")?,
            jersey_number: row.get("jersey_number")?,
            team_id,
            owner_id,
            created_at,
            updated_at,
        })
    }

    fn row_to_player_with_team(row: &Row) -> Result<PlayerWithTeam, rusqlite::Error> {
        let player = Self::row_to_player(row)?;
        Ok(PlayerWithTeam {
            player,
            team_name: row.get("team_name")?,
            team_logo: row.get("team_logo")?,
            team_color: row.get("team_color")?,
        })
    }
}

impl PlayerRepository for SqlitePlayerRepository {
    fn save(&self, player: &Player) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO players (id, name, position, jersey_number, team_id, owner_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                player.id.to_string(),
                player.name,
                player.position,
                player.jersey_number,
                player.team_id.map(|id| id.to_string()),
                player.owner_id.to_string(),
                player.created_at.to_rfc3339(),
                player.updated_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<PlayerWithTeam>> {
        let conn = self.pool.get()?;

        // INNER join on purpose: see trait doc
        let sql = format!(
            "SELECT {PLAYER_WITH_TEAM_COLUMNS}
               FROM players p
               JOIN teams t ON t.id = p.team_id
              WHERE p.id = ?1 AND p.owner_id = ?2"
        );
        let mut stmt = conn.prepare(&sql)?;

        match stmt.query_row(
            params![id.to_string(), owner_id.to_string()],
            Self::row_to_player_with_team,
        ) {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn get_owned(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Player>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT * FROM players WHERE id = ?1 AND owner_id = ?2")?;

        match stmt.query_row(
            params![id.to_string(), owner_id.to_string()],
            Self::row_to_player,
        ) {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<PlayerWithTeam>> {
        let conn = self.pool.get()?;

        // Global players first, then assigned players grouped by team name
        let sql = format!(
            "SELECT {PLAYER_WITH_TEAM_COLUMNS}
               FROM players p
               LEFT JOIN teams t ON t.id = p.team_id
              WHERE p.owner_id = ?1
              ORDER BY CASE WHEN p.team_id IS NULL THEN 0 ELSE 1 END,
                       t.name ASC,
                       p.name ASC"
        );
        let mut stmt = conn.prepare(&sql)?;

        let players: Vec<PlayerWithTeam> = stmt
            .query_map(params![owner_id.to_string()], Self::row_to_player_with_team)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(players)
    }

    fn list_global_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Player>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT * FROM players
              WHERE owner_id = ?1 AND team_id IS NULL
              ORDER BY name ASC",
        )?;

        let players: Vec<Player> = stmt
            .query_map(params![owner_id.to_string()], Self::row_to_player)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(players)
    }

    fn list_by_team(&self, team_id: Uuid, owner_id: Uuid) -> AppResult<Vec<Player>> {
        let conn = self.pool.get()?;

        // Position NULL sorts LAST here, unlike the team-name rule above
        let mut stmt = conn.prepare(
            "SELECT * FROM players
              WHERE team_id = ?1 AND owner_id = ?2
              ORDER BY CASE WHEN position IS NULL THEN 1 ELSE 0 END,
                       position ASC,
                       name ASC",
        )?;

        let players: Vec<Player> = stmt
            .query_map(
                params![team_id.to_string(), owner_id.to_string()],
                Self::row_to_player,
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(players)
    }

    fn update(&self, player: &Player) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let affected = conn.execute(
            "UPDATE players
                SET name = ?1, position = ?2, jersey_number = ?3, team_id = ?4, updated_at = ?5
              WHERE id = ?6 AND owner_id = ?7",
            params![
                player.name,
                player.position,
                player.jersey_number,
                player.team_id.map(|id| id.to_string()),
                player.updated_at.to_rfc3339(),
                player.id.to_string(),
                player.owner_id.to_string(),
            ],
        )?;

        Ok(affected > 0)
    }

    fn assign_to_team(&self, player_id: Uuid, team_id: Uuid, owner_id: Uuid) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let affected = conn.execute(
            "UPDATE players SET team_id = ?1, updated_at = ?2
              WHERE id = ?3 AND owner_id = ?4",
            params![
                team_id.to_string(),
                Utc::now().to_rfc3339(),
                player_id.to_string(),
                owner_id.to_string(),
            ],
        )?;

        Ok(affected > 0)
    }

    fn unassign_from_team(&self, player_id: Uuid, owner_id: Uuid) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let affected = conn.execute(
            "UPDATE players SET team_id = NULL, updated_at = ?1
              WHERE id = ?2 AND owner_id = ?3",
            params![
                Utc::now().to_rfc3339(),
                player_id.to_string(),
                owner_id.to_string(),
            ],
        )?;

        Ok(affected > 0)
    }

    fn delete(&self, id: Uuid, owner_id: Uuid) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let affected = conn.execute(
            "DELETE FROM players WHERE id = ?1 AND owner_id = ?2",
            params![id.to_string(), owner_id.to_string()],
        )?;

        Ok(affected > 0)
    }

    fn count_by_owner(&self, owner_id: Uuid) -> AppResult<i64> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM players WHERE owner_id = ?1",
            params![owner_id.to_string()],
            |row| row.get(0),
        )?;

        Ok(count)
    }

    fn count_by_team(&self, team_id: Uuid, owner_id: Uuid) -> AppResult<i64> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM players WHERE team_id = ?1 AND owner_id = ?2",
            params![team_id.to_string(), owner_id.to_string()],
            |row| row.get(0),
        )?;

        Ok(count)
    }

    fn search(&self, text: &str, owner_id: Uuid) -> AppResult<Vec<PlayerWithTeam>> {
        let conn = self.pool.get()?;

        let sql = format!(
            "SELECT {PLAYER_WITH_TEAM_COLUMNS}
               FROM players p
               LEFT JOIN teams t ON t.id = p.team_id
              WHERE p.owner_id = ?1
                AND (LOWER(p.name) LIKE '%' || LOWER(?2) || '%'
                     OR LOWER(t.name) LIKE '%' || LOWER(?2) || '%')
              ORDER BY CASE WHEN p.team_id IS NULL THEN 0 ELSE 1 END,
                       t.name ASC,
                       p.name ASC"
        );
        let mut stmt = conn.prepare(&sql)?;

        let players: Vec<PlayerWithTeam> = stmt
            .query_map(
                params![owner_id.to_string(), text],
                Self::row_to_player_with_team,
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(players)
    }
}
