//! The cart actor: single source of truth for the in-progress order.
//!
//! ## Key Types
//!
//! - [`CartActor`]: owns the ordered line collection and processes requests.
//! - [`CartRequest`]: the message enum carrying one operation each.
//!
//! ## Concurrency Model
//!
//! The actor processes its messages sequentially in one task, so the line
//! collection needs no locking and every read of the totals observes a fully
//! settled state. Each mutation runs to completion before the next request
//! is taken off the channel.

use crate::model::{CartLine, CartTotals, Item};
use crate::notify::{Notifier, Severity};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

/// Requests the cart actor understands.
///
/// Each variant carries a `oneshot` responder so the caller can await
/// completion. Mutating operations respond with `()` once the state has
/// settled; reads respond with a snapshot. There is no error channel:
/// every operation is total over its input domain, and acting on an id
/// that is not in the cart is a deliberate no-op.
#[derive(Debug)]
pub enum CartRequest {
    /// Add one unit of `item`: increment an existing line in place, or
    /// append a fresh line with quantity 1.
    AddItem {
        item: Item,
        respond_to: oneshot::Sender<()>,
    },
    /// Remove the line with this id entirely, if present.
    RemoveItem {
        id: u32,
        respond_to: oneshot::Sender<()>,
    },
    /// Set the line's quantity to an absolute value. A value of zero or
    /// below removes the line instead.
    UpdateQuantity {
        id: u32,
        quantity: i64,
        respond_to: oneshot::Sender<()>,
    },
    /// Empty the cart unconditionally.
    Clear { respond_to: oneshot::Sender<()> },
    /// Snapshot of the ordered lines.
    Lines {
        respond_to: oneshot::Sender<Vec<CartLine>>,
    },
    /// Totals recomputed from the current lines.
    Totals {
        respond_to: oneshot::Sender<CartTotals>,
    },
}

/// The actor that owns the cart state for one session.
///
/// Holds the ordered collection of lines (insertion order is preserved so
/// the first-added item stays first unless removed) and the notifier the
/// session was wired with. Created via [`crate::cart_actor::new`].
pub struct CartActor {
    receiver: mpsc::Receiver<CartRequest>,
    lines: Vec<CartLine>,
    notifier: Box<dyn Notifier>,
}

impl CartActor {
    pub(super) fn with_channel(
        receiver: mpsc::Receiver<CartRequest>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            receiver,
            lines: Vec::new(),
            notifier,
        }
    }

    /// Runs the actor's event loop until every client is dropped.
    ///
    /// The session starts empty and nothing survives the loop: when the
    /// channel closes the lines are dropped with the actor.
    pub async fn run(mut self) {
        info!("Cart session started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddItem { item, respond_to } => {
                    debug!(item_id = item.id, name = %item.name, "AddItem");
                    self.add_item(item);
                    let _ = respond_to.send(());
                }
                CartRequest::RemoveItem { id, respond_to } => {
                    debug!(item_id = id, "RemoveItem");
                    self.remove_item(id);
                    let _ = respond_to.send(());
                }
                CartRequest::UpdateQuantity {
                    id,
                    quantity,
                    respond_to,
                } => {
                    debug!(item_id = id, quantity, "UpdateQuantity");
                    self.update_quantity(id, quantity);
                    let _ = respond_to.send(());
                }
                CartRequest::Clear { respond_to } => {
                    debug!("Clear");
                    self.clear();
                    let _ = respond_to.send(());
                }
                CartRequest::Lines { respond_to } => {
                    debug!(lines = self.lines.len(), "Lines");
                    let _ = respond_to.send(self.lines.clone());
                }
                CartRequest::Totals { respond_to } => {
                    let totals = CartTotals::of(&self.lines);
                    debug!(items = totals.items, price = totals.price, "Totals");
                    let _ = respond_to.send(totals);
                }
            }
        }

        info!(lines = self.lines.len(), "Cart session ended");
    }

    fn add_item(&mut self, item: Item) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == item.id) {
            // Existing line: bump quantity in place, position unchanged.
            line.quantity += 1;
            info!(item_id = item.id, quantity = line.quantity, "Incremented line");
            self.notifier.notify(
                &format!("Added another {} to your order", item.name),
                Severity::Success,
            );
        } else {
            self.lines.push(CartLine::first_of(&item));
            info!(item_id = item.id, lines = self.lines.len(), "Appended line");
            self.notifier.notify(
                &format!("Added {} to your order", item.name),
                Severity::Success,
            );
        }
    }

    fn remove_item(&mut self, id: u32) {
        // Silent no-op when the id is not in the cart: nothing to remove,
        // nothing to announce.
        let Some(index) = self.lines.iter().position(|line| line.id == id) else {
            debug!(item_id = id, "RemoveItem on absent id, ignoring");
            return;
        };
        let removed = self.lines.remove(index);
        info!(item_id = id, lines = self.lines.len(), "Removed line");
        self.notifier.notify(
            &format!("Removed {} from your order", removed.name),
            Severity::Info,
        );
    }

    fn update_quantity(&mut self, id: u32, quantity: i64) {
        if quantity <= 0 {
            // A quantity at or below zero deletes the line, however far
            // below zero the request went.
            self.remove_item(id);
            return;
        }
        // Absolute set, saturating at u32::MAX so an oversized request can
        // never wrap back into the deleted-line range. An absent id is left
        // absent: only AddItem creates lines.
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            info!(item_id = id, quantity = line.quantity, "Set line quantity");
        } else {
            debug!(item_id = id, "UpdateQuantity on absent id, ignoring");
        }
    }

    fn clear(&mut self) {
        self.lines.clear();
        info!("Cleared cart");
        self.notifier
            .notify("Your order has been cleared", Severity::Info);
    }
}
