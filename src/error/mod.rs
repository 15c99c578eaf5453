// src/error/mod.rs
//
// Error module
//
// Provides the application error taxonomy and result alias.

pub mod types;

pub use types::{AppError, AppResult};
