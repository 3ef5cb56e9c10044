use crate::cart_actor;
use crate::checkout::{CheckoutDesk, OrderGateway, SimulatedGateway};
use crate::clients::CartClient;
use crate::notify::{Notifier, TracingNotifier};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime wiring for one ordering session.
///
/// `Storefront` is responsible for:
/// - **Lifecycle management**: spawning the cart actor and joining it on shutdown
/// - **Dependency wiring**: sharing one notifier between cart and checkout,
///   handing the checkout desk a cart client and an order gateway
///
/// It is the only way to obtain a [`CartClient`]: the cart cannot be reached
/// outside an initialized session, and a client that outlives its session
/// gets [`CartError::SessionClosed`](crate::cart_actor::CartError::SessionClosed)
/// instead of silently-empty state.
///
/// # Example
///
/// ```ignore
/// let store = Storefront::new();
///
/// store.cart_client.add_item(item).await?;
/// let receipt = store.checkout.place_order(&form).await?;
///
/// store.shutdown().await?;
/// ```
pub struct Storefront {
    /// Client for the cart actor, shared by the listing and checkout views.
    pub cart_client: CartClient,

    /// The checkout flow bound to this session's cart.
    pub checkout: CheckoutDesk,

    /// Handle of the running cart actor task, joined on shutdown.
    handle: tokio::task::JoinHandle<()>,
}

impl Storefront {
    /// Creates a session with production wiring: notifications go to the
    /// tracing pipeline and submissions use the default pacing delay.
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(TracingNotifier),
            Arc::new(SimulatedGateway::default()),
        )
    }

    /// Creates a session with an explicit notifier and gateway.
    ///
    /// Tests use this with a recording notifier and a zero-delay or
    /// recording gateway; the wiring is otherwise identical to production.
    pub fn with_parts(notifier: Arc<dyn Notifier>, gateway: Arc<dyn OrderGateway>) -> Self {
        let (actor, cart_client) = cart_actor::new(32, Box::new(notifier.clone()));
        let handle = tokio::spawn(actor.run());

        let checkout = CheckoutDesk::new(cart_client.clone(), gateway, notifier);

        Self {
            cart_client,
            checkout,
            handle,
        }
    }

    /// Gracefully ends the session.
    ///
    /// Drops the clients, which closes the request channel; the actor
    /// drains what is in flight and exits its loop. Nothing in the cart
    /// survives. Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.cart_client);
        drop(self.checkout);

        if let Err(e) = self.handle.await {
            error!("Cart actor task failed: {:?}", e);
            return Err(format!("Cart actor task failed: {:?}", e));
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}
