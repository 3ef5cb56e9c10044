//! # Storefront
//!
//! > **A single-vendor food-ordering storefront with an actor-backed cart.**
//!
//! This crate implements the stateful core of a small ordering flow: a
//! product listing, a shared shopping cart, and a checkout that validates
//! contact details and places a simulated order. The cart is the single
//! source of truth for the in-progress order and is shared by both views.
//!
//! ## 🏗️ Design
//!
//! The cart is an **actor**: it owns its line collection inside one Tokio
//! task and processes requests from an mpsc channel sequentially. That gives
//! the two guarantees the cart must provide without any locking:
//! - **No torn reads**: totals are recomputed from fully settled state,
//!   because every mutation runs to completion before the next request.
//! - **Fail-fast wiring**: the only way to reach the cart is a
//!   [`CartClient`](clients::CartClient) obtained from a running
//!   [`Storefront`](lifecycle::Storefront); a client without a live session
//!   gets a loud [`SessionClosed`](cart_actor::CartError::SessionClosed)
//!   error, never a silently empty cart.
//!
//! ## 🗺️ Module Tour
//!
//! - **[`cart_actor`]**: the core. The [`CartActor`](cart_actor::CartActor)
//!   event loop and its [`CartRequest`](cart_actor::CartRequest) messages.
//! - **[`model`]**: pure data: [`Item`](model::Item),
//!   [`CartLine`](model::CartLine), [`CartTotals`](model::CartTotals).
//! - **[`catalog`]**: the static read-only menu.
//! - **[`clients`]**: the type-safe [`CartClient`](clients::CartClient)
//!   wrapper that hides the message passing.
//! - **[`checkout`]**: form validation, the
//!   [`OrderGateway`](checkout::OrderGateway) submission seam, and the
//!   [`CheckoutDesk`](checkout::CheckoutDesk) flow.
//! - **[`notify`]**: the fire-and-forget [`Notifier`](notify::Notifier)
//!   seam for user-facing messages.
//! - **[`lifecycle`]**: the [`Storefront`](lifecycle::Storefront) wiring
//!   plus tracing setup.
//!
//! ## 🧪 Testing
//!
//! The notifier and gateway seams ship with recording doubles
//! ([`RecordingNotifier`](notify::RecordingNotifier),
//! [`RecordingGateway`](checkout::RecordingGateway)) so tests can assert on
//! emitted messages and submitted receipts without a UI, and the simulated
//! submission delay can be zeroed for deterministic runs.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo flow with info logs
//! RUST_LOG=info cargo run
//! ```

pub mod cart_actor;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod notify;
