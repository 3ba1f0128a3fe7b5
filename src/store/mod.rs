//! In-memory order store, run as an actor.

pub mod actor;
pub mod error;
pub mod message;

pub use actor::OrderStoreActor;
pub use error::*;
pub use message::StoreRequest;

use crate::clients::OrderStoreClient;
use tokio::sync::mpsc;
use tracking_core::StatusCatalog;

/// Creates the store actor and its client. New orders start in the first
/// stage of `catalog`.
pub fn new(buffer_size: usize, catalog: &StatusCatalog) -> (OrderStoreActor, OrderStoreClient) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (OrderStoreActor::new(receiver, catalog), OrderStoreClient::new(sender))
}
