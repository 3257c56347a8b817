//! # Observability & Tracing
//!
//! Structured logging for every actor built on this crate.
//!
//! Actors log their lifecycle (`Actor started`, `Shutdown`) and every request
//! with an `entity_type` field, so module targets are hidden to keep lines short.
//! Verbosity is controlled with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per create/update/action
//! RUST_LOG=debug cargo run    # adds payloads and lookups
//! ```
//!
//! With `RUST_LOG=info`, placing one order looks like:
//!
//! ```text
//! INFO create_order{customer_id=... lines=1}: Placing order
//! INFO Updated batch entity_type="Product" count=1
//! INFO Created entity_type="Order" id=... size=1
//! INFO create_order{customer_id=... lines=1}: Order placed order_id=...
//! ```
//!
//! Actors run in their own tasks, so their lines carry no span from the
//! caller; the caller's span does not travel over the channel.

/// Installs the global `tracing` subscriber.
///
/// Reads the filter from `RUST_LOG`. Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
