//! # Order Updater
//!
//! The seam between the tracking core and whatever persists orders. The core
//! issues exactly one [`StatusUpdate`] per successful transition and treats
//! the outcome opaquely: `Ok(())` or an [`UpdateError`].

use crate::error::UpdateError;
use crate::order::OrderId;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// "Set order `estado` to `<name>`".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub order_id: OrderId,
    /// Canonical stage name to store.
    pub estado: String,
    /// Status the caller read before deciding on this update.
    ///
    /// Backends that support conditional writes compare it with the stored
    /// status and answer [`UpdateError::Conflict`] on mismatch. Backends that
    /// cannot express the precondition ignore it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
}

impl StatusUpdate {
    pub fn new(order_id: OrderId, estado: impl Into<String>) -> Self {
        Self {
            order_id,
            estado: estado.into(),
            expected: None,
        }
    }

    pub fn expecting(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}

/// External collaborator that persists status changes.
#[async_trait]
pub trait OrderUpdater: Send + Sync {
    async fn update_status(&self, update: StatusUpdate) -> Result<(), UpdateError>;
}

#[async_trait]
impl<U: OrderUpdater + ?Sized> OrderUpdater for Arc<U> {
    async fn update_status(&self, update: StatusUpdate) -> Result<(), UpdateError> {
        (**self).update_status(update).await
    }
}
