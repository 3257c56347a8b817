//! # Order Placement
//!
//! Places customer orders against an in-memory catalog: validates the
//! request, checks stock, decrements inventory and writes the order with its
//! lines.
//!
//! ## Layout
//!
//! - [`model`] - Customers, products, orders and the incoming request
//! - [`customer_actor`], [`product_actor`], [`order_actor`] - one
//!   [`ResourceActor`](actor_framework::ResourceActor) per resource
//! - [`clients`] - typed clients for those actors
//! - [`repositories`] - the traits the workflow depends on, implemented by the clients
//! - [`services`] - [`CreateOrderService`](services::CreateOrderService) and [`AppError`](services::AppError)
//! - [`persistence`] - the `orders_products` table and its rows
//! - [`lifecycle`] - [`OrderSystem`](lifecycle::OrderSystem) and [`SystemConfig`](lifecycle::SystemConfig)
//!
//! ## Concurrency
//!
//! Each actor processes its requests one at a time, but an order touches
//! three actors in several requests. The product lookup and the stock write
//! are separate requests, so concurrent orders for the same product can
//! oversell it, and a failed order write does not restore the stock.
//!
//! ## Testing
//!
//! The workflow is generic over the [`repositories`] traits. Tests drive it
//! with [`actor_framework::mock::MockClient`] to check exactly which
//! collaborator calls were made.

pub mod clients;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod persistence;
pub mod product_actor;
pub mod repositories;
pub mod services;
