use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors that can occur during member operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MemberError {
    #[error("Member not found: {0}")]
    NotFound(String),
    #[error("Member already exists: {0}")]
    AlreadyExists(String),
    #[error("Member validation error: {0}")]
    ValidationError(String),
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Basket error: {0}")]
    Basket(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<MemberError>> for MemberError {
    fn from(err: FrameworkError<MemberError>) -> Self {
        match err {
            FrameworkError::Entity(e) | FrameworkError::StepFailed { error: e, .. } => e,
            FrameworkError::NotFound(id) | FrameworkError::StepNotFound { id, .. } => MemberError::NotFound(id),
            FrameworkError::Conflict(id) => MemberError::AlreadyExists(id),
            other => MemberError::ActorCommunicationError(other.to_string()),
        }
    }
}
