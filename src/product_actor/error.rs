use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Reasons a stock change is refused. The product is left untouched in every case.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StockError {
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u64, available: u64 },
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u64),
    #[error("Stock overflow: {current} + {added}")]
    Overflow { current: u64, added: u64 },
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    /// Another product with the same name already sits in the category.
    #[error("Product already exists: {0}")]
    AlreadyExists(String),
    #[error(transparent)]
    Stock(#[from] StockError),
    /// A multi-product stock change stopped at this product.
    #[error("Stock change rejected for product {product_id}: {source}")]
    Rejected {
        product_id: String,
        #[source]
        source: StockError,
    },
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
    #[error("Product validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<ProductError>> for ProductError {
    fn from(err: FrameworkError<ProductError>) -> Self {
        match err {
            FrameworkError::Entity(e) | FrameworkError::StepFailed { error: e, .. } => e,
            FrameworkError::NotFound(id) | FrameworkError::StepNotFound { id, .. } => ProductError::NotFound(id),
            FrameworkError::Conflict(id) => ProductError::AlreadyExists(id),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
