// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod player;
pub mod team;
pub mod user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// User Domain
pub use user::{validate_user, User};

// Team Domain
pub use team::{
    validate_team, Team, TeamHierarchy, TeamWithPlayerCount, DEFAULT_TEAM_COLOR,
    DEFAULT_TEAM_LOGO,
};

// Player Domain
pub use player::{validate_player, Player, PlayerWithTeam};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
