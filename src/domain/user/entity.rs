use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account that owns teams and players
/// The credential hash is produced and checked by the auth layer above
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Unique, case-sensitive login name
    pub username: String,

    /// Opaque password hash
    #[serde(skip_serializing, default)]
    pub credential_hash: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(username: String, credential_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            credential_hash,
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}
