//! The order-submission seam.
//!
//! There is no real backend: placing an order is simulated. The trait exists
//! so the delay lives behind a seam the tests can replace or zero out.

use crate::checkout::OrderReceipt;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;

/// Accepts a finished order for processing.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit(&self, receipt: &OrderReceipt) -> Result<(), String>;
}

/// The production gateway: waits a fixed pacing delay, then confirms.
///
/// Performs no I/O and cannot fail; the delay exists purely so the customer
/// sees the order "processing". It is short and not cancelable.
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    /// Creates a gateway with the given pacing delay. Use
    /// [`Duration::ZERO`] in tests for deterministic, instant submission.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    /// The pacing delay the storefront ships with.
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl OrderGateway for SimulatedGateway {
    async fn submit(&self, receipt: &OrderReceipt) -> Result<(), String> {
        tokio::time::sleep(self.delay).await;
        info!(
            customer = %receipt.customer_name,
            total = receipt.total,
            "Order accepted"
        );
        Ok(())
    }
}

/// Test gateway: records every submitted receipt, confirms instantly.
#[derive(Clone, Default)]
pub struct RecordingGateway {
    submitted: Arc<Mutex<Vec<OrderReceipt>>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receipts submitted so far, in order.
    pub fn receipts(&self) -> Vec<OrderReceipt> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderGateway for RecordingGateway {
    async fn submit(&self, receipt: &OrderReceipt) -> Result<(), String> {
        self.submitted.lock().unwrap().push(receipt.clone());
        Ok(())
    }
}
