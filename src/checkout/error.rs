//! Error types for checkout.

use crate::cart_actor::CartError;
use thiserror::Error;

/// Why a submission was rejected or failed.
///
/// Validation rejections leave the cart and the caller's form untouched so
/// the customer can correct and resubmit. Each rejection is also surfaced as
/// an error-severity notification with the same wording.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    /// No lines in the cart at submission time.
    #[error("Your order is empty. Please add items to your order.")]
    EmptyCart,

    /// Name or phone number left blank.
    #[error("Please provide your name and phone number.")]
    MissingContact,

    /// Phone number is not exactly ten digits.
    #[error("Please enter a valid 10-digit phone number.")]
    InvalidPhone,

    /// The order gateway reported a failure.
    #[error("Order submission failed: {0}")]
    Submission(String),

    /// The cart session failed underneath the checkout.
    #[error(transparent)]
    Cart(#[from] CartError),
}
