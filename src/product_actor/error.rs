//! Error types for the Product actor.

use crate::model::Price;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The product name is empty or whitespace.
    #[error("Product name must not be empty")]
    EmptyName,

    /// Prices cannot be negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(Price),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
