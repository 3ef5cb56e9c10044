//! Checkout: contact validation and the simulated order submission.
//!
//! The checkout view collects the customer's details, shows the order
//! summary read from the cart, and on confirmation runs the whole flow
//! through [`CheckoutDesk::place_order`]. Validation is a single linear
//! pass; the first failing check wins and is surfaced both as a
//! [`CheckoutError`] and as an error-severity notification.

pub mod error;
pub mod gateway;

pub use error::*;
pub use gateway::*;

use crate::clients::CartClient;
use crate::model::{CartLine, CartTotals};
use crate::notify::{Notifier, Severity};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// What the customer typed into the checkout form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
    /// Optional free-text instructions ("no ice", "call on arrival").
    pub special_instructions: String,
}

/// The confirmed order handed to the gateway: a snapshot of the cart at
/// submission time plus the validated contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub customer_name: String,
    pub phone: String,
    pub special_instructions: String,
    pub lines: Vec<CartLine>,
    pub total: f64,
}

/// Runs the checkout flow against a cart session.
///
/// Holds a cart client, the notifier shared with the cart, and the order
/// gateway. Created by [`Storefront`](crate::lifecycle::Storefront).
#[derive(Clone)]
pub struct CheckoutDesk {
    cart: CartClient,
    gateway: Arc<dyn OrderGateway>,
    notifier: Arc<dyn Notifier>,
}

impl CheckoutDesk {
    pub fn new(
        cart: CartClient,
        gateway: Arc<dyn OrderGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            cart,
            gateway,
            notifier,
        }
    }

    /// Validates the form and places the order.
    ///
    /// On success the cart is cleared (with its usual notification) and the
    /// receipt is returned. On rejection the cart is left exactly as it was
    /// so the customer can correct the form and resubmit.
    #[instrument(skip(self, form), fields(customer = %form.name))]
    pub async fn place_order(&self, form: &CheckoutForm) -> Result<OrderReceipt, CheckoutError> {
        debug!("Submission received");

        let lines = self.cart.lines().await?;
        if let Err(rejection) = Self::validate(&lines, form) {
            warn!(error = %rejection, "Submission rejected");
            self.notifier.notify(&rejection.to_string(), Severity::Error);
            return Err(rejection);
        }

        // Totals come from the same snapshot as the lines, so a concurrent
        // cart mutation cannot produce a receipt whose total and lines
        // disagree.
        let totals = CartTotals::of(&lines);
        let receipt = OrderReceipt {
            customer_name: form.name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            special_instructions: form.special_instructions.trim().to_string(),
            lines,
            total: totals.price,
        };

        self.gateway
            .submit(&receipt)
            .await
            .map_err(CheckoutError::Submission)?;

        info!(total = receipt.total, items = totals.items, "Order placed");
        self.notifier.notify(
            "Your order has been placed successfully!",
            Severity::Success,
        );
        self.cart.clear().await?;

        Ok(receipt)
    }

    /// Linear validation pass; first failure wins.
    fn validate(lines: &[CartLine], form: &CheckoutForm) -> Result<(), CheckoutError> {
        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if form.name.trim().is_empty() || form.phone.trim().is_empty() {
            return Err(CheckoutError::MissingContact);
        }
        let phone = form.phone.trim();
        if phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(CheckoutError::InvalidPhone);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> CartLine {
        CartLine {
            id: 1,
            name: "Waffer".to_string(),
            price: 30.0,
            image: String::new(),
            quantity: 1,
        }
    }

    fn form(name: &str, phone: &str) -> CheckoutForm {
        CheckoutForm {
            name: name.to_string(),
            phone: phone.to_string(),
            special_instructions: String::new(),
        }
    }

    #[test]
    fn empty_cart_is_rejected_first() {
        // Even with a blank form, the empty cart wins.
        let err = CheckoutDesk::validate(&[], &form("", "")).unwrap_err();
        assert_eq!(err, CheckoutError::EmptyCart);
    }

    #[test]
    fn blank_name_or_phone_is_rejected() {
        let lines = vec![line()];
        assert_eq!(
            CheckoutDesk::validate(&lines, &form("  ", "9876543210")).unwrap_err(),
            CheckoutError::MissingContact
        );
        assert_eq!(
            CheckoutDesk::validate(&lines, &form("Alice", "   ")).unwrap_err(),
            CheckoutError::MissingContact
        );
    }

    #[test]
    fn phone_must_be_exactly_ten_digits() {
        let lines = vec![line()];
        for phone in ["12345", "98765432101", "98765abc10", "98765 4321"] {
            assert_eq!(
                CheckoutDesk::validate(&lines, &form("Alice", phone)).unwrap_err(),
                CheckoutError::InvalidPhone,
                "phone {:?} should be rejected",
                phone
            );
        }
        // Surrounding whitespace is trimmed before the check.
        assert!(CheckoutDesk::validate(&lines, &form("Alice", " 9876543210 ")).is_ok());
    }
}
