//! # Product Actor
//!
//! This module implements the Product resource actor: the catalog and the
//! stock on hand for every product.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`actions`] - [`ProductAction`] for stock queries
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Stock Levels
//!
//! Stock is written through `UpdateMany`, one message for the whole batch of
//! products touched by an order. The actor either applies every update in the
//! batch or none of them.
//!
//! ```rust
//! use order_placement::product_actor;
//! use actor_framework::ActorClient;
//! use order_placement::model::{ProductCreate, ProductUpdate};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_product(ProductCreate {
//!             name: "Widget".to_string(),
//!             price: Decimal::new(2999, 2),
//!             quantity: 100,
//!         })
//!         .await?;
//!
//!     client
//!         .inner()
//!         .update_many(vec![(id.clone(), ProductUpdate::quantity(95))])
//!         .await?;
//!     assert_eq!(client.check_stock(id).await?, 95);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::{Product, ProductId};
use actor_framework::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ProductId::generate);
    (actor, ProductClient::new(generic_client))
}
