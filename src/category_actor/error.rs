use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors that can occur during category operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    #[error("Category not found: {0}")]
    NotFound(String),
    #[error("Category already exists: {0}")]
    AlreadyExists(String),
    #[error("Category validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<CategoryError>> for CategoryError {
    fn from(err: FrameworkError<CategoryError>) -> Self {
        match err {
            FrameworkError::Entity(e) | FrameworkError::StepFailed { error: e, .. } => e,
            FrameworkError::NotFound(id) | FrameworkError::StepNotFound { id, .. } => CategoryError::NotFound(id),
            FrameworkError::Conflict(id) => CategoryError::AlreadyExists(id),
            other => CategoryError::ActorCommunicationError(other.to_string()),
        }
    }
}
