//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole
//! storefront. Log levels come from the `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Session lifecycle**: cart actor startup, shutdown, and final state
//! - **Cart operations**: AddItem, RemoveItem, UpdateQuantity, Clear, and reads
//! - **Checkout**: submissions, rejections with their reason, placed orders
//! - **Notifications**: every message routed through the tracing notifier
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show per-request payloads
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, client methods log once at entry (`Sending
//! request`) and the actor logs each request with its structured fields,
//! so a full add-to-order round trip reads as:
//!
//! ```text
//! DEBUG add_item{item_id=1}: Sending request
//! DEBUG AddItem item_id=1 name=Waffer
//! INFO  Appended line item_id=1 lines=1
//! INFO  Notification severity=Success message="Added Waffer to your order"
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Keep log lines short; structured fields carry the context
        .compact()
        .init();
}
