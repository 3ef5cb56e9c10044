//! Demo entry point: walks one complete ordering session.
//!
//! 1. Set up the [`Storefront`] (spawns the cart actor).
//! 2. Browse the [`catalog`](storefront::catalog) and fill the cart the way
//!    the listing view would.
//! 3. Run checkout with a validated form.
//! 4. Shut the session down gracefully.

use std::sync::Arc;
use storefront::catalog;
use storefront::checkout::{CheckoutForm, SimulatedGateway};
use storefront::lifecycle::tracing::setup_tracing;
use storefront::lifecycle::Storefront;
use storefront::notify::TracingNotifier;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting storefront session");

    let store = Storefront::with_parts(
        Arc::new(TracingNotifier),
        Arc::new(SimulatedGateway::default()),
    );

    // Fill the cart the way the listing view does: one click per unit.
    let span = tracing::info_span!("listing");
    async {
        let menu = catalog::menu();
        info!(items = menu.len(), "Menu loaded");

        for id in [1, 1, 2, 5] {
            let item = catalog::find(id).ok_or_else(|| format!("item {} not on menu", id))?;
            store
                .cart_client
                .add_item(item)
                .await
                .map_err(|e| e.to_string())?;
        }

        let totals = store.cart_client.totals().await.map_err(|e| e.to_string())?;
        info!(items = totals.items, price = totals.price, "Cart filled");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Place the order through checkout.
    let form = CheckoutForm {
        name: "Alice".to_string(),
        phone: "9876543210".to_string(),
        special_instructions: "Less sugar in the tea".to_string(),
    };

    let span = tracing::info_span!("checkout");
    let result = async {
        info!("Confirming order");
        store.checkout.place_order(&form).await
    }
    .instrument(span)
    .await;

    match result {
        Ok(receipt) => info!(total = receipt.total, "Order placed successfully"),
        Err(e) => error!(error = %e, "Order was rejected"),
    }

    store.shutdown().await?;

    info!("Session completed");
    Ok(())
}
