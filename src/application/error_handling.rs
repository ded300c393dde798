// src/application/error_handling.rs
//
// Error Handling for HTTP Handlers
//
// ARCHITECTURE:
// - Maps internal errors → client-friendly responses
// - Provides consistent JSON error format
// - Never exposes internal implementation details
// - Logs errors for debugging

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::repositories::RepositoryError;

/// Standard error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input/validation error (400)
    Validation,

    /// Bad credentials (401)
    Unauthorized,

    /// Name or id already taken (409)
    Conflict,

    /// Domain invariant violation (422)
    DomainError,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorType {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::Validation => StatusCode::BAD_REQUEST,
            ErrorType::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorType::Conflict => StatusCode::CONFLICT,
            ErrorType::DomainError => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: &str, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.to_string(),
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::new(ErrorType::NotFound, "Resource not found", None),

            AppError::NonExistentMovie(id) => Self::new(
                ErrorType::NotFound,
                "Movie not found",
                Some(format!("No movie with id {}", id)),
            ),

            AppError::UnknownUser(user_name) => Self::new(
                ErrorType::NotFound,
                "User not found",
                Some(format!("No user named '{}'", user_name)),
            ),

            AppError::NameNotUnique(user_name) => Self::new(
                ErrorType::Conflict,
                "User name already taken",
                Some(user_name),
            ),

            AppError::AuthenticationFailed => Self::new(
                ErrorType::Unauthorized,
                "Invalid user name or password",
                None,
            ),

            AppError::Domain(domain_error) => Self::new(
                ErrorType::DomainError,
                "Domain validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::Repository(repo_error) => match repo_error {
                RepositoryError::DuplicateMovieId(_) | RepositoryError::DuplicateUser(_) => {
                    Self::new(
                        ErrorType::Conflict,
                        "Resource already exists",
                        Some(repo_error.to_string()),
                    )
                }
                RepositoryError::MalformedAssociation(_) => Self::new(
                    ErrorType::DomainError,
                    "Domain validation failed",
                    Some(repo_error.to_string()),
                ),
            },

            AppError::Load(load_error) => {
                error!("Load error: {:?}", load_error);
                Self::new(ErrorType::Internal, "Data load failed", None)
            }

            AppError::PasswordHash(message) => {
                error!("Password hashing error: {}", message);
                Self::new(ErrorType::Internal, "Credential processing failed", None)
            }

            AppError::Other(message) => {
                error!("Other error: {}", message);
                Self::new(ErrorType::Internal, &message, None)
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self::new(ErrorType::Validation, &message, None)
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.error_type.status_code(), Json(self)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ErrorResponse::from_app_error(self).into_response()
    }
}
