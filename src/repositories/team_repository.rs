// src/repositories/team_repository.rs

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::{Team, TeamWithPlayerCount};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait TeamRepository: Send + Sync {
    fn save(&self, team: &Team) -> AppResult<()>;
    fn get_by_id(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Team>>;
    fn get_by_id_with_player_count(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> AppResult<Option<TeamWithPlayerCount>>;
    fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Team>>;
    fn list_by_owner_with_player_count(&self, owner_id: Uuid)
        -> AppResult<Vec<TeamWithPlayerCount>>;
    /// Returns false when no row matches id + owner_id
    fn update(&self, team: &Team) -> AppResult<bool>;
    /// Returns false when no row matches id + owner_id.
    /// Players referencing the team survive; the store's ON DELETE SET NULL
    /// turns them into global players in the same statement.
    fn delete(&self, id: Uuid, owner_id: Uuid) -> AppResult<bool>;
    fn count_by_owner(&self, owner_id: Uuid) -> AppResult<i64>;
}

pub struct SqliteTeamRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteTeamRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_team(row: &Row) -> Result<Team, rusqlite::Error> {
        let id = Uuid::parse_str(&row.get::<_, String>("id")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        let owner_id = Uuid::parse_str(&row.get::<_, String>("owner_id")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let created_at = DateTime::parse_from_rfc3339(&row.get::<_, String>("created_at")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?
            .with_timezone(&Utc);
        let updated_at = DateTime::parse_from_rfc3339(&row.get::<_, String>("updated_at")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(Team {
            id,
            name: row.get("name")?,
            logo: row.get("logo")?,
            color: row.get("color")?,
            description: row.get("description")?,
            owner_id,
            created_at,
            updated_at,
        })
    }

    fn row_to_team_with_count(row: &Row) -> Result<TeamWithPlayerCount, rusqlite::Error> {
        let team = Self::row_to_team(row)?;
        let player_count: i64 = row.get("player_count")?;
        Ok(TeamWithPlayerCount { team, player_count })
    }
}

impl TeamRepository for SqliteTeamRepository {
    fn save(&self, team: &Team) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO teams (id, name, logo, color, description, owner_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                team.id.to_string(),
                team.name,
                team.logo,
                team.color,
                team.description,
                team.owner_id.to_string(),
                team.created_at.to_rfc3339(),
                team.updated_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Team>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT * FROM teams WHERE id = ?1 AND owner_id = ?2")?;

        match stmt.query_row(
            params![id.to_string(), owner_id.to_string()],
            Self::row_to_team,
        ) {
            Ok(team) => Ok(Some(team)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn get_by_id_with_player_count(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> AppResult<Option<TeamWithPlayerCount>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT t.*, COUNT(p.id) AS player_count
               FROM teams t
               LEFT JOIN players p ON p.team_id = t.id
              WHERE t.id = ?1 AND t.owner_id = ?2
              GROUP BY t.id",
        )?;

        match stmt.query_row(
            params![id.to_string(), owner_id.to_string()],
            Self::row_to_team_with_count,
        ) {
            Ok(team) => Ok(Some(team)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Team>> {
        let conn = self.pool.get()?;

        let mut stmt =
            conn.prepare("SELECT * FROM teams WHERE owner_id = ?1 ORDER BY name ASC")?;

        let teams: Vec<Team> = stmt
            .query_map(params![owner_id.to_string()], Self::row_to_team)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(teams)
    }

    fn list_by_owner_with_player_count(
        &self,
        owner_id: Uuid,
    ) -> AppResult<Vec<TeamWithPlayerCount>> {
        let conn = self.pool.get()?;

        // Left outer aggregate: teams with no players report count 0
        let mut stmt = conn.prepare(
            "SELECT t.*, COUNT(p.id) AS player_count
               FROM teams t
               LEFT JOIN players p ON p.team_id = t.id
              WHERE t.owner_id = ?1
              GROUP BY t.id
              ORDER BY t.name ASC",
        )?;

        let teams: Vec<TeamWithPlayerCount> = stmt
            .query_map(params![owner_id.to_string()], Self::row_to_team_with_count)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(teams)
    }

    fn update(&self, team: &Team) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let affected = conn.execute(
            "UPDATE teams
                SET name = ?1, logo = ?2, color = ?3, description = ?4, updated_at = ?5
              WHERE id = ?6 AND owner_id = ?7",
            params![
                team.name,
                team.logo,
                team.color,
                team.description,
                team.updated_at.to_rfc3339(),
                team.id.to_string(),
                team.owner_id.to_string(),
            ],
        )?;

        Ok(affected > 0)
    }

    fn delete(&self, id: Uuid, owner_id: Uuid) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let affected = conn.execute(
            "DELETE FROM teams WHERE id = ?1 AND owner_id = ?2",
            params![id.to_string(), owner_id.to_string()],
        )?;

        Ok(affected > 0)
    }

    fn count_by_owner(&self, owner_id: Uuid) -> AppResult<i64> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM teams WHERE owner_id = ?1",
            params![owner_id.to_string()],
            |row| row.get(0),
        )?;

        Ok(count)
    }
}
