// src/services/user_service.rs
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{validate_user, User};
use crate::error::{AppError, AppResult};
use crate::repositories::UserRepository;

#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub username: String,
    /// Already-hashed credential; hashing is the auth layer's job
    pub credential_hash: String,
}

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Create a user account. Usernames are unique and case-sensitive.
    pub fn register(&self, request: RegisterUserRequest) -> AppResult<User> {
        let username = request.username.trim().to_string();

        let user = User::new(username, request.credential_hash);
        validate_user(&user).map_err(AppError::Domain)?;

        if self.user_repo.get_by_username(&user.username)?.is_some() {
            return Err(AppError::Validation(format!(
                "Username '{}' is already taken",
                user.username
            )));
        }

        self.user_repo.save(&user)?;
        debug!("Registered user {}", user.id);
        Ok(user)
    }

    pub fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.user_repo.get_by_id(id)?.ok_or(AppError::NotFound)
    }

    pub fn get_user_by_username(&self, username: &str) -> AppResult<User> {
        self.user_repo
            .get_by_username(username)?
            .ok_or(AppError::NotFound)
    }
}
