//! The order panel's entry point for viewing and changing order statuses.
//!
//! Reads orders through the store, derives `can_edit` from the [`Viewer`],
//! and hands status changes to the [`TransitionAuthority`]. After a change the
//! store's copy is brought in line with what the updater accepted.

use super::OrderStoreClient;
use crate::model::{Order, OrderFilter, OrderId, Viewer};
use crate::store::StoreError;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use tracking_core::{
    status_eq, OrderUpdater, Progress, Stage, StageInfo, StatusCatalog, StatusChange,
    StatusUpdate, TimelineStep, TransitionAuthority, TransitionError,
};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TrackingError {
    /// Missing, or outside the viewer's scope.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Everything the panel shows for one order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingView {
    pub order: Order,
    pub progress: Progress,
    /// "X of Y", or "? of Y" for an unrecognized status.
    pub progress_label: String,
    /// Target of the advance button. `None` in the last stage or an unknown one.
    pub next: Option<StageInfo>,
    pub timeline: Vec<TimelineStep>,
    pub can_edit: bool,
}

#[derive(Clone)]
pub struct OrderTrackingClient<U> {
    store: OrderStoreClient,
    authority: Arc<TransitionAuthority<U>>,
}

impl<U: OrderUpdater> OrderTrackingClient<U> {
    pub fn new(store: OrderStoreClient, catalog: Arc<StatusCatalog>, updater: U) -> Self {
        Self {
            store,
            authority: Arc::new(TransitionAuthority::new(catalog, updater)),
        }
    }

    pub fn authority(&self) -> &TransitionAuthority<U> {
        &self.authority
    }

    pub fn catalog(&self) -> &StatusCatalog {
        self.authority.engine().catalog()
    }

    async fn fetch(&self, id: OrderId, viewer: &Viewer) -> Result<Order, TrackingError> {
        match self.store.get(id).await? {
            Some(order) if viewer.scope().includes(&order) => Ok(order),
            _ => Err(TrackingError::OrderNotFound(id)),
        }
    }

    /// Orders visible to `viewer` that match `filter`.
    #[instrument(skip(self, filter), fields(user_id = viewer.user_id))]
    pub async fn list(
        &self,
        viewer: &Viewer,
        filter: OrderFilter,
    ) -> Result<Vec<Order>, TrackingError> {
        let orders = self.store.list(viewer.scope(), filter).await?;
        debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    pub fn view_of(&self, order: Order, viewer: &Viewer) -> TrackingView {
        let engine = self.authority.engine();
        let current = engine.current_index(&order.estado);
        TrackingView {
            progress: engine.progress(current),
            progress_label: engine.progress_label(current),
            next: engine.next_stage(current).cloned(),
            timeline: engine.timeline(current),
            can_edit: viewer.can_edit_status(),
            order,
        }
    }

    #[instrument(skip(self), fields(user_id = viewer.user_id))]
    pub async fn view(&self, id: OrderId, viewer: &Viewer) -> Result<TrackingView, TrackingError> {
        let order = self.fetch(id, viewer).await?;
        Ok(self.view_of(order, viewer))
    }

    /// Moves the order one stage forward and returns the refreshed order.
    #[instrument(skip(self), fields(user_id = viewer.user_id))]
    pub async fn advance(&self, id: OrderId, viewer: &Viewer) -> Result<Order, TrackingError> {
        let order = self.fetch(id, viewer).await?;
        let result = self
            .authority
            .advance(&order, viewer.can_edit_status())
            .await;
        self.finish(order, result).await
    }

    /// Moves the order to `target` in either direction.
    #[instrument(skip(self), fields(user_id = viewer.user_id))]
    pub async fn jump_to(
        &self,
        id: OrderId,
        target: &str,
        viewer: &Viewer,
    ) -> Result<Order, TrackingError> {
        let order = self.fetch(id, viewer).await?;
        let result = self
            .authority
            .jump_to(&order, target, viewer.can_edit_status())
            .await;
        self.finish(order, result).await
    }

    pub async fn jump_to_stage(
        &self,
        id: OrderId,
        target: Stage,
        viewer: &Viewer,
    ) -> Result<Order, TrackingError> {
        let name = self.catalog().name(target).to_string();
        self.jump_to(id, &name, viewer).await
    }

    async fn finish(
        &self,
        mut order: Order,
        result: Result<StatusChange, TransitionError>,
    ) -> Result<Order, TrackingError> {
        let change = match result {
            Ok(change) => change,
            Err(e) => {
                warn!(order_id = %order.id, error = %e, transient = e.is_transient(), "Transition refused");
                return Err(e.into());
            }
        };
        info!(
            order_id = %change.order_id,
            from = %change.previous,
            to = %change.status,
            "Status changed"
        );
        match self.mirror(&change).await {
            Ok(Some(stored)) => Ok(stored),
            Ok(None) => {
                change.apply_to(&mut order);
                Ok(order)
            }
            // The change is committed; a store failure only costs the local copy.
            Err(e) => {
                warn!(order_id = %change.order_id, error = %e, "Could not sync store after status change");
                change.apply_to(&mut order);
                Ok(order)
            }
        }
    }

    /// Brings the store's copy in line with an accepted change. A write that
    /// landed after ours wins: the mirror is conditional on the status we
    /// replaced.
    async fn mirror(&self, change: &StatusChange) -> Result<Option<Order>, StoreError> {
        let Some(stored) = self.store.get(change.order_id).await? else {
            return Ok(None);
        };
        if status_eq(&stored.estado, &change.status) {
            return Ok(Some(stored));
        }
        let update = StatusUpdate::new(change.order_id, change.status.clone())
            .expecting(change.previous.clone());
        match self.store.set_status(update).await {
            Ok(order) => Ok(Some(order)),
            Err(StoreError::Conflict { actual, .. }) => {
                debug!(order_id = %change.order_id, %actual, "Store moved on, keeping its status");
                self.store.get(change.order_id).await
            }
            Err(e) => Err(e),
        }
    }
}
