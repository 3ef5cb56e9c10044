use std::sync::Arc;
use storefront::cart_actor::{self, CartError};
use storefront::catalog;
use storefront::checkout::{CheckoutForm, RecordingGateway};
use storefront::lifecycle::Storefront;
use storefront::notify::{RecordingNotifier, Severity};

/// Full end-to-end flow: listing fills the cart, the cart summary edits it,
/// checkout places the order and empties it.
#[tokio::test]
async fn test_full_ordering_session() {
    let notifier = Arc::new(RecordingNotifier::new());
    let gateway = Arc::new(RecordingGateway::new());
    let store = Storefront::with_parts(notifier.clone(), gateway.clone());

    // Listing view: Waffer twice, Biscuit once.
    let waffer = catalog::find(1).unwrap();
    let biscuit = catalog::find(2).unwrap();
    store.cart_client.add_item(waffer.clone()).await.unwrap();
    store.cart_client.add_item(waffer).await.unwrap();
    store.cart_client.add_item(biscuit).await.unwrap();

    let lines = store.cart_client.lines().await.unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].name, "Waffer");
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(lines[1].name, "Biscuit");
    assert_eq!(lines[1].quantity, 1);

    let totals = store.cart_client.totals().await.unwrap();
    assert_eq!(totals.items, 3);
    assert_eq!(totals.price, 85.0);

    // Cart summary: bump the Waffer line to five.
    store.cart_client.update_quantity(1, 5).await.unwrap();
    let totals = store.cart_client.totals().await.unwrap();
    assert_eq!(totals.items, 6);
    assert_eq!(totals.price, 175.0);

    // Checkout view: validated form, order placed.
    let form = CheckoutForm {
        name: "Alice".to_string(),
        phone: "9876543210".to_string(),
        special_instructions: String::new(),
    };
    let receipt = store.checkout.place_order(&form).await.unwrap();
    assert_eq!(receipt.customer_name, "Alice");
    assert_eq!(receipt.total, 175.0);
    assert_eq!(receipt.lines.len(), 2);

    // The gateway saw exactly one order, and the cart is empty again.
    assert_eq!(gateway.receipts().len(), 1);
    let totals = store.cart_client.totals().await.unwrap();
    assert_eq!(totals.items, 0);
    assert_eq!(totals.price, 0.0);

    // The session narrated every step.
    let messages = notifier.messages();
    assert_eq!(messages[0].message, "Added Waffer to your order");
    assert_eq!(messages[1].message, "Added another Waffer to your order");
    assert_eq!(messages[2].message, "Added Biscuit to your order");
    assert_eq!(
        messages[3].message,
        "Your order has been placed successfully!"
    );
    assert_eq!(messages[3].severity, Severity::Success);
    assert_eq!(messages[4].message, "Your order has been cleared");
    assert_eq!(messages[4].severity, Severity::Info);

    store.shutdown().await.expect("Failed to shutdown storefront");
}

/// Concurrent additions from cloned clients land without loss: the actor
/// serializes them, so the final quantity equals the number of calls.
#[tokio::test]
async fn test_concurrent_adds_are_serialized() {
    let notifier = Arc::new(RecordingNotifier::new());
    let gateway = Arc::new(RecordingGateway::new());
    let store = Storefront::with_parts(notifier, gateway);

    let item = catalog::find(4).unwrap();
    let mut handles = vec![];
    for _ in 0..10 {
        let client = store.cart_client.clone();
        let item = item.clone();
        handles.push(tokio::spawn(async move { client.add_item(item).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let lines = store.cart_client.lines().await.unwrap();
    assert_eq!(lines.len(), 1, "same id must never duplicate a line");
    assert_eq!(lines[0].quantity, 10);

    store.shutdown().await.unwrap();
}

/// A client without a running session must fail loudly, not report an
/// empty cart.
#[tokio::test]
async fn test_client_without_session_fails_fast() {
    let (actor, client) = cart_actor::new(8, Box::new(RecordingNotifier::new()));
    drop(actor); // Session never started

    let err = client.lines().await.unwrap_err();
    assert_eq!(err, CartError::SessionClosed);

    let err = client.add_item(catalog::find(1).unwrap()).await.unwrap_err();
    assert_eq!(err, CartError::SessionClosed);
}
