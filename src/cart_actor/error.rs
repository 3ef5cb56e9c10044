//! Error types for the cart actor.

use thiserror::Error;

/// Errors that can occur when talking to the cart.
///
/// Cart operations themselves are total: adding, removing, updating, and
/// clearing never fail, and acting on an absent id is a silent no-op. The
/// only failures are wiring bugs, where a caller holds a client whose
/// session is no longer (or was never properly) running. Those must surface
/// loudly instead of degrading to an empty cart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The cart session is not running; the request channel is closed.
    #[error("Cart session closed: no active session is accepting requests")]
    SessionClosed,

    /// The session dropped the response channel before answering.
    #[error("Cart session dropped the response before answering")]
    SessionDropped,
}
