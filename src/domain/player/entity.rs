use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A player owned by exactly one user, optionally assigned to one team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Display name (non-empty after trimming)
    pub name: String,

    /// Optional field position, e.g. "Goalkeeper"
    pub position: Option<String>,

    /// Optional jersey number
    pub jersey_number: Option<u32>,

    /// Team association; None means "global player"
    pub team_id: Option<Uuid>,

    /// Owning user (immutable after creation)
    pub owner_id: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// Create a new Player; `team_id = None` creates a global player
    pub fn new(
        name: String,
        position: Option<String>,
        jersey_number: Option<u32>,
        team_id: Option<Uuid>,
        owner_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            position: position.filter(|p| !p.trim().is_empty()),
            jersey_number,
            team_id,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// True when the player has no team association
    pub fn is_global(&self) -> bool {
        self.team_id.is_none()
    }

    /// Unassigned → Assigned, or Assigned → Assigned(new)
    pub fn assign_to(&mut self, team_id: Uuid) {
        self.team_id = Some(team_id);
        self.updated_at = Utc::now();
    }

    /// Assigned → Unassigned; harmless when already unassigned
    pub fn unassign(&mut self) {
        self.team_id = None;
        self.updated_at = Utc::now();
    }

    /// Full replace of the mutable fields; refreshes `updated_at`
    pub fn apply_update(
        &mut self,
        name: String,
        position: Option<String>,
        jersey_number: Option<u32>,
        team_id: Option<Uuid>,
    ) {
        self.name = name.trim().to_string();
        self.position = position.filter(|p| !p.trim().is_empty());
        self.jersey_number = jersey_number;
        self.team_id = team_id;
        self.updated_at = Utc::now();
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A player joined with the display fields of its (optional) team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerWithTeam {
    #[serde(flatten)]
    pub player: Player,
    pub team_name: Option<String>,
    pub team_logo: Option<String>,
    pub team_color: Option<String>,
}
