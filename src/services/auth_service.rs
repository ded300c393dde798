// src/services/auth_service.rs
use std::sync::Arc;

use log::{info, warn};

use crate::domain::{normalize_user_name, validate_password, validate_user, User};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, UserRegistered};
use crate::infrastructure::{hash_password, verify_password};
use crate::repositories::{Repository, RepositoryError};

#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub user_name: String,
    pub password: String,
}

pub struct AuthService {
    repo: Arc<dyn Repository>,
    event_bus: Arc<EventBus>,
}

impl AuthService {
    pub fn new(repo: Arc<dyn Repository>, event_bus: Arc<EventBus>) -> Self {
        Self { repo, event_bus }
    }

    pub fn add_user(&self, request: RegisterUserRequest) -> AppResult<Arc<User>> {
        let user_name = normalize_user_name(&request.user_name);
        if self.repo.get_user(&user_name).is_some() {
            return Err(AppError::NameNotUnique(user_name));
        }

        validate_password(&request.password)?;
        let user = User::new(&user_name, hash_password(&request.password)?);
        validate_user(&user)?;

        // A concurrent registration may still win the name between the
        // check above and the insert.
        self.repo.add_user(user).map_err(|e| match e {
            RepositoryError::DuplicateUser(name) => AppError::NameNotUnique(name),
            other => AppError::Repository(other),
        })?;

        info!("Registered user '{}'", user_name);
        self.event_bus.emit(UserRegistered::new(user_name.clone()));

        self.get_user(&user_name)
    }

    pub fn get_user(&self, user_name: &str) -> AppResult<Arc<User>> {
        self.repo
            .get_user(user_name)
            .ok_or_else(|| AppError::UnknownUser(normalize_user_name(user_name)))
    }

    pub fn authenticate_user(&self, user_name: &str, password: &str) -> AppResult<Arc<User>> {
        let user = self.repo.get_user(user_name).ok_or_else(|| {
            warn!("Login attempt for unknown user '{}'", user_name);
            AppError::AuthenticationFailed
        })?;

        if !verify_password(password, &user.password_hash) {
            warn!("Wrong password for user '{}'", user.user_name);
            return Err(AppError::AuthenticationFailed);
        }

        Ok(user)
    }
}
