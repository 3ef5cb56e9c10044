//! The shopping-cart actor: state, request handling, and errors.

pub mod actor;
pub mod error;

pub use actor::{CartActor, CartRequest};
pub use error::*;

use crate::clients::CartClient;
use crate::notify::Notifier;
use tokio::sync::mpsc;

/// Creates a new cart actor and its client.
///
/// The notifier is injected here so the whole session shares one sink;
/// production wiring passes [`TracingNotifier`](crate::notify::TracingNotifier),
/// tests pass a [`RecordingNotifier`](crate::notify::RecordingNotifier).
pub fn new(buffer_size: usize, notifier: Box<dyn Notifier>) -> (CartActor, CartClient) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let actor = CartActor::with_channel(receiver, notifier);
    let client = CartClient::new(sender);
    (actor, client)
}
