//! Orchestration: session wiring, startup, and shutdown.

pub mod storefront;
pub mod tracing;

pub use storefront::Storefront;
