//! Critical User Invariants:
//!
//! 1. Users are the identity anchor: every Team and Player is owned by one
//! 2. Username is unique and case-sensitive
//! 3. The credential hash is opaque here; hashing happens above the core
//! 4. Users are never deleted in normal operation

pub mod entity;

pub use entity::User;

use crate::domain::{DomainError, DomainResult};

/// Validates User invariants
pub fn validate_user(user: &User) -> DomainResult<()> {
    if user.username.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Username cannot be empty".to_string(),
        ));
    }
    if user.credential_hash.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Credential hash cannot be empty".to_string(),
        ));
    }
    Ok(())
}
