use crate::cart_actor::{CartError, CartRequest};
use crate::model::{CartLine, CartTotals, Item};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the cart actor.
///
/// Both views hold clones of this client: the listing view adds, removes,
/// and re-quantifies lines, the checkout view reads the order summary and
/// clears the cart after a confirmed submission. A client is only obtainable
/// from a running [`Storefront`](crate::lifecycle::Storefront); using one
/// after shutdown fails loudly with [`CartError::SessionClosed`] rather than
/// pretending the cart is empty.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> CartRequest,
    ) -> Result<T, CartError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| CartError::SessionClosed)?;
        response.await.map_err(|_| CartError::SessionDropped)
    }

    /// Adds one unit of `item` to the order.
    ///
    /// Quantity is store-managed: repeated calls with the same id increment
    /// the existing line, they never duplicate it.
    #[instrument(skip(self, item), fields(item_id = item.id))]
    pub async fn add_item(&self, item: Item) -> Result<(), CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::AddItem { item, respond_to })
            .await
    }

    /// Removes the line with `id` entirely. No-op if absent.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: u32) -> Result<(), CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::RemoveItem { id, respond_to })
            .await
    }

    /// Sets the line's quantity to an absolute value; `quantity <= 0`
    /// removes the line. Never creates a line for an absent id.
    #[instrument(skip(self))]
    pub async fn update_quantity(&self, id: u32, quantity: i64) -> Result<(), CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::UpdateQuantity {
            id,
            quantity,
            respond_to,
        })
        .await
    }

    /// Empties the cart unconditionally.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::Clear { respond_to })
            .await
    }

    /// Snapshot of the ordered lines, first-added first.
    #[instrument(skip(self))]
    pub async fn lines(&self) -> Result<Vec<CartLine>, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::Lines { respond_to })
            .await
    }

    /// Totals recomputed from the current lines on every call.
    #[instrument(skip(self))]
    pub async fn totals(&self) -> Result<CartTotals, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::Totals { respond_to })
            .await
    }
}
