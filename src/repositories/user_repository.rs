// src/repositories/user_repository.rs

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::User;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn save(&self, user: &User) -> AppResult<()>;
    fn get_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
    fn get_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

pub struct SqliteUserRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &Row) -> Result<User, rusqlite::Error> {
        let id = Uuid::parse_str(&row.get::<_, String>("id")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        let username: String = row.get("username")?;
        let credential_hash: String = row.get("credential_hash")?;

        let created_at = DateTime::parse_from_rfc3339(&row.get::<_, String>("created_at")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(User {
            id,
            username,
            credential_hash,
            created_at,
        })
    }
}

impl UserRepository for SqliteUserRepository {
    fn save(&self, user: &User) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO users (id, username, credential_hash, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                user.id.to_string(),
                user.username,
                user.credential_hash,
                user.created_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT * FROM users WHERE id = ?1")?;

        match stmt.query_row(params![id.to_string()], Self::row_to_user) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT * FROM users WHERE username = ?1")?;

        match stmt.query_row(params![username], Self::row_to_user) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }
}
