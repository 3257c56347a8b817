//! # Persistence Mapping
//!
//! Table definitions and row types for stores that keep orders in SQL. The
//! in-process actors do not use them; they describe the shape the data takes
//! once it leaves the process.

pub mod orders_products;

pub use orders_products::*;
