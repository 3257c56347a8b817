//! # System Lifecycle & Orchestration
//!
//! Starts the customer, product and order actors, hands their clients out,
//! and shuts them down again.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for all actor tasks to finish
//!
//! Every clone of a client keeps its actor alive, including the ones inside a
//! [`CreateOrderService`](crate::services::CreateOrderService).
//!
//! ## Configuration
//!
//! [`SystemConfig`] carries the settings read from the environment.
//! Logging is set up separately with
//! [`setup_tracing`](actor_framework::tracing::setup_tracing) and `RUST_LOG`.

pub mod config;
pub mod order_system;

pub use config::*;
pub use order_system::*;
