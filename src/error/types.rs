// src/error/types.rs
use crate::domain::{DomainError, MovieId};
use crate::infrastructure::LoadError;
use crate::repositories::RepositoryError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Resource not found")]
    NotFound,

    #[error("Movie {0} does not exist")]
    NonExistentMovie(MovieId),

    #[error("Unknown user '{0}'")]
    UnknownUser(String),

    #[error("User name '{0}' is already taken")]
    NameNotUnique(String),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AppError::PasswordHash(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
