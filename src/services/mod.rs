// src/services/mod.rs
//
// Service layer
//
// Services coordinate repositories and enforce the rules the repositories
// deliberately do not:
// - input validation (trimming, required fields)
// - cross-aggregate checks (a player may only join a team owned by the
//   same user)
// - promotion of "no matching row" into AppError::NotFound
//
// The caller identity (owner_id) is an explicit parameter on every
// operation, never ambient state.

pub mod player_service;
pub mod team_service;
pub mod user_service;

#[cfg(test)]
mod roster_flow_tests;

pub use player_service::{CreatePlayerRequest, PlayerService, UpdatePlayerRequest};
pub use team_service::{CreateTeamRequest, TeamService, UpdateTeamRequest};
pub use user_service::{RegisterUserRequest, UserService};
