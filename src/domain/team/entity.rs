use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::player::Player;

/// Fallback glyph shown when a team is created without a logo
pub const DEFAULT_TEAM_LOGO: &str = "⚽";

/// Fallback hex color applied when a team is created without one
pub const DEFAULT_TEAM_COLOR: &str = "#4F46E5";

/// A sports team owned by exactly one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Display name (non-empty after trimming)
    pub name: String,

    /// Short string or emoji shown next to the name
    pub logo: String,

    /// Hex color string, e.g. "#4F46E5"
    pub color: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Owning user (immutable after creation)
    pub owner_id: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// Create a new Team; empty logo/color fall back to the defaults
    pub fn new(
        name: String,
        logo: &str,
        color: &str,
        description: Option<String>,
        owner_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            logo: non_empty_or(logo, DEFAULT_TEAM_LOGO),
            color: non_empty_or(color, DEFAULT_TEAM_COLOR),
            description: description.filter(|d| !d.trim().is_empty()),
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replace of the mutable fields; refreshes `updated_at`
    pub fn apply_update(
        &mut self,
        name: String,
        logo: &str,
        color: &str,
        description: Option<String>,
    ) {
        self.name = name.trim().to_string();
        self.logo = non_empty_or(logo, DEFAULT_TEAM_LOGO);
        self.color = non_empty_or(color, DEFAULT_TEAM_COLOR);
        self.description = description.filter(|d| !d.trim().is_empty());
        self.updated_at = Utc::now();
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A team annotated with how many players it currently has
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamWithPlayerCount {
    #[serde(flatten)]
    pub team: Team,
    pub player_count: i64,
}

/// A team together with its full ordered roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamHierarchy {
    #[serde(flatten)]
    pub team: Team,
    pub players: Vec<Player>,
}
