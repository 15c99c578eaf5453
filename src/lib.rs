// src/lib.rs
// TeamHub - Owner-scoped team and player roster core
//
// Architecture:
// - Domain-centric: entities and invariants live in `domain`
// - Repositories: dumb SQL mappers, one per aggregate, always owner-scoped
// - Services: validation and cross-aggregate rules
// - Explicit: the caller identity is a parameter, never ambient state
//
// Transport, authentication and password hashing live ABOVE this crate;
// it only needs a connection pool and a caller's user id.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_player,
    validate_team,
    validate_user,
    // Player
    Player,
    PlayerWithTeam,
    // Team
    Team,
    TeamHierarchy,
    TeamWithPlayerCount,
    // User
    User,
    DEFAULT_TEAM_COLOR,
    DEFAULT_TEAM_LOGO,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, get_connection, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories & Services
// ============================================================================

pub use repositories::{
    PlayerRepository, SqlitePlayerRepository, SqliteTeamRepository, SqliteUserRepository,
    TeamRepository, UserRepository,
};

pub use services::{
    CreatePlayerRequest, CreateTeamRequest, PlayerService, RegisterUserRequest, TeamService,
    UpdatePlayerRequest, UpdateTeamRequest, UserService,
};
