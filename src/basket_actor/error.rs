use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors that can occur during basket operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BasketError {
    #[error("Basket not found: {0}")]
    NotFound(String),
    #[error("Basket already exists: {0}")]
    AlreadyExists(String),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u64),
    #[error("Quantity overflow: {current} + {added}")]
    Overflow { current: u64, added: u64 },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<BasketError>> for BasketError {
    fn from(err: FrameworkError<BasketError>) -> Self {
        match err {
            FrameworkError::Entity(e) | FrameworkError::StepFailed { error: e, .. } => e,
            FrameworkError::NotFound(id) | FrameworkError::StepNotFound { id, .. } => BasketError::NotFound(id),
            FrameworkError::Conflict(id) => BasketError::AlreadyExists(id),
            other => BasketError::ActorCommunicationError(other.to_string()),
        }
    }
}
