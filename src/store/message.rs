//! # Store Messages
//!
//! Requests sent from [`OrderStoreClient`](crate::clients::OrderStoreClient)
//! to [`OrderStoreActor`](super::OrderStoreActor). Each carries a oneshot
//! sender for its reply.

use super::StoreError;
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderScope};
use tokio::sync::oneshot;
use tracking_core::StatusUpdate;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

#[derive(Debug)]
pub enum StoreRequest {
    Create {
        params: OrderCreate,
        respond_to: Response<OrderId>,
    },
    Get {
        id: OrderId,
        respond_to: Response<Option<Order>>,
    },
    List {
        scope: OrderScope,
        filter: OrderFilter,
        respond_to: Response<Vec<Order>>,
    },
    /// Writes `update.estado`. When `update.expected` is set the write only
    /// happens if the stored status still matches it.
    SetStatus {
        update: StatusUpdate,
        respond_to: Response<Order>,
    },
    Delete {
        id: OrderId,
        respond_to: Response<()>,
    },
}
