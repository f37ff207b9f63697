use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Invalid product: {0}")]
    InvalidProduct(String),
    #[error("Invalid member: {0}")]
    InvalidMember(String),
    #[error("Basket is empty: {0}")]
    EmptyBasket(String),
    /// The first line that could not be served. No stock was taken for any line.
    #[error("Order placement failed for product {product_id}: requested {requested}, available {available}")]
    OrderPlacementFailed {
        product_id: String,
        requested: u64,
        available: u64,
    },
    #[error("Order already cancelled: {0}")]
    AlreadyCancelled(String),
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<OrderError>> for OrderError {
    fn from(err: FrameworkError<OrderError>) -> Self {
        match err {
            FrameworkError::Entity(e) | FrameworkError::StepFailed { error: e, .. } => e,
            FrameworkError::NotFound(id) | FrameworkError::StepNotFound { id, .. } => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
