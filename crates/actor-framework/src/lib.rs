//! # Actor Framework
//!
//! Building blocks for resource-oriented actors on Tokio: each resource type
//! (customers, products, orders) lives in its own actor, which owns an in-memory
//! store and answers CRUD, batch and custom-action requests one at a time.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the domain type and its hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop and store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests
//!
//! Business rules go in the entity's hooks; the framework owns channels, id
//! generation, logging and error wrapping.
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`ResourceActor::run`], not to the constructor.
//! All actors can therefore be created first and wired afterwards, which keeps
//! the order of construction free of cycles.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Requests to one actor are processed sequentially
//! - Different actors run in parallel
//! - A read followed by a write is two requests; nothing holds a lock between them
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real [`ResourceClient`] from scripted
//! expectations, so code built on clients can be tested without actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
