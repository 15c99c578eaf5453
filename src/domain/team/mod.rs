//! Critical Team Invariants:
//!
//! 1. A Team always has a non-null owning user
//! 2. Team name cannot be empty (after trimming)
//! 3. Logo and color always hold a value; empty input falls back to defaults
//! 4. Deleting a Team does NOT delete its Players; they become global
//! 5. Teams are never shared between users

pub mod entity;

pub use entity::{Team, TeamHierarchy, TeamWithPlayerCount, DEFAULT_TEAM_COLOR, DEFAULT_TEAM_LOGO};

use crate::domain::{DomainError, DomainResult};

/// Validates Team invariants
pub fn validate_team(team: &Team) -> DomainResult<()> {
    if team.name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Team name cannot be empty".to_string(),
        ));
    }
    if team.logo.is_empty() || team.color.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Team logo and color must hold a value".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_new_team_applies_defaults() {
        let team = Team::new("Lions".to_string(), "", "", None, Uuid::new_v4());
        assert_eq!(team.logo, DEFAULT_TEAM_LOGO);
        assert_eq!(team.color, DEFAULT_TEAM_COLOR);
        assert!(team.description.is_none());
        assert!(validate_team(&team).is_ok());
    }

    #[test]
    fn test_new_team_keeps_explicit_values() {
        let team = Team::new(
            "  Tigers  ".to_string(),
            "🐯",
            "#FF8800",
            Some("away squad".to_string()),
            Uuid::new_v4(),
        );
        assert_eq!(team.name, "Tigers");
        assert_eq!(team.logo, "🐯");
        assert_eq!(team.color, "#FF8800");
        assert_eq!(team.description.as_deref(), Some("away squad"));
    }

    #[test]
    fn test_empty_name_violates_invariant() {
        let mut team = Team::new("Lions".to_string(), "", "", None, Uuid::new_v4());
        team.name = "   ".to_string();
        assert!(validate_team(&team).is_err());
    }
}
