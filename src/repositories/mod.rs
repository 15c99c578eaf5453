// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Explicit SQL only
// - Every statement filters by owner_id: a row that exists but belongs to
//   another user is indistinguishable from a row that does not exist

pub mod player_repository;
pub mod team_repository;
pub mod user_repository;

pub use player_repository::{PlayerRepository, SqlitePlayerRepository};
pub use team_repository::{SqliteTeamRepository, TeamRepository};
pub use user_repository::{SqliteUserRepository, UserRepository};

#[cfg(test)]
pub use player_repository::MockPlayerRepository;
#[cfg(test)]
pub use team_repository::MockTeamRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
