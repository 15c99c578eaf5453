//! Critical Player Invariants:
//!
//! 1. Player name cannot be empty (after trimming)
//! 2. owner_id is set at creation and never changes
//! 3. team_id is NULLABLE: None means the player is "global" (unassigned)
//! 4. A non-null team_id must reference a team owned by the SAME user;
//!    enforced at the service layer before any write
//! 5. Team deletion never deletes players; their team_id becomes None
//!
//! The team association is a two-state machine: Unassigned ⇄ Assigned.
//! There is no "deleted-but-referenced" state; deletion removes the row.

pub mod entity;

pub use entity::{Player, PlayerWithTeam};

use crate::domain::{DomainError, DomainResult};

/// Validates Player invariants
pub fn validate_player(player: &Player) -> DomainResult<()> {
    if player.name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Player name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_new_player_defaults_to_global() {
        let player = Player::new("Amy".to_string(), None, None, None, Uuid::new_v4());
        assert!(player.team_id.is_none());
        assert!(player.is_global());
        assert!(validate_player(&player).is_ok());
    }

    #[test]
    fn test_assign_and_unassign_transitions() {
        let mut player = Player::new("Amy".to_string(), None, None, None, Uuid::new_v4());
        let team = Uuid::new_v4();

        player.assign_to(team);
        assert_eq!(player.team_id, Some(team));
        assert!(!player.is_global());

        player.unassign();
        assert!(player.team_id.is_none());

        // Unassigning twice is a no-op state-wise
        player.unassign();
        assert!(player.team_id.is_none());
    }

    #[test]
    fn test_blank_name_violates_invariant() {
        let player = Player::new("   ".to_string(), None, None, None, Uuid::new_v4());
        assert!(validate_player(&player).is_err());
    }
}
