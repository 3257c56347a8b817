//! # Order Actor
//!
//! Stores placed orders. An order is written once, with its lines, and never
//! changes afterwards: `Update` and `Action` are `()`.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! The actor does not look up customers or products itself. By the time an
//! [`OrderCreate`](crate::model::OrderCreate) arrives, the
//! [`CreateOrderService`](crate::services::CreateOrderService) has already
//! validated it and written the stock levels.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::{Order, OrderId};
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, OrderId::generate);
    (actor, OrderClient::new(generic_client))
}
