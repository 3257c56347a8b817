//! # Services
//!
//! Application workflows built on the [`repositories`](crate::repositories)
//! traits. [`AppError`] is the single error type they return.

pub mod create_order;

pub use create_order::*;

use crate::customer_actor::CustomerError;
use crate::model::ProductId;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use std::fmt::Display;
use thiserror::Error;

/// The kind of record a lookup failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Customer,
    Product,
}

impl Resource {
    fn not_found(self) -> &'static str {
        match self {
            Resource::Customer => "Customer does not exist",
            Resource::Product => "Products not found",
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Customer => f.write_str("customer"),
            Resource::Product => f.write_str("product"),
        }
    }
}

/// Errors returned by application workflows.
///
/// The first five variants are business failures with a human-readable
/// message. The rest wrap a collaborator that failed underneath.
#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("Missing some arguments like customer_id or products")]
    InvalidArgument,

    #[error("{}", .0.not_found())]
    NotFound(Resource),

    /// A looked-up product has no matching entry in the request.
    #[error("Product does not exist")]
    Inconsistent,

    #[error("Product sold out: {0}")]
    OutOfStock(ProductId),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AppError::InvalidArgument.to_string(),
            "Missing some arguments like customer_id or products"
        );
        assert_eq!(
            AppError::NotFound(Resource::Customer).to_string(),
            "Customer does not exist"
        );
        assert_eq!(
            AppError::NotFound(Resource::Product).to_string(),
            "Products not found"
        );
        assert_eq!(
            AppError::Inconsistent.to_string(),
            "Product does not exist"
        );
        assert_eq!(
            AppError::OutOfStock("P1".into()).to_string(),
            "Product sold out: P1"
        );
    }

    #[test]
    fn test_collaborator_errors_are_transparent() {
        let err: AppError = ProductError::NotFound("P1".to_string()).into();
        assert_eq!(err.to_string(), "Product not found: P1");
    }
}
