//! # Errors
//!
//! [`TransitionError`] is what callers of the
//! [`TransitionAuthority`](crate::TransitionAuthority) match on. Every variant
//! except [`TransitionError::UpdateFailed`] is decided locally, before the
//! order service is contacted.
//!
//! [`UpdateError`] is the error surface of an [`OrderUpdater`](crate::OrderUpdater)
//! implementation and is carried unchanged inside `UpdateFailed` so the caller
//! can tell a conflict from a dropped connection.

use crate::order::OrderId;
use thiserror::Error;

/// Failures reported by the order service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UpdateError {
    /// The request never got an answer (connection, timeout, decoding).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Update rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// A conditional write found a different status than expected.
    #[error("Status conflict: expected {expected:?}, found {actual:?}")]
    Conflict { expected: String, actual: String },

    /// The service is shut down or unreachable for good.
    #[error("Order service unavailable")]
    Unavailable,
}

/// Errors returned by status transitions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError {
    #[error("Permission denied: caller may not change order status")]
    PermissionDenied,

    #[error("Order {order_id} is already in its final stage")]
    AlreadyTerminal { order_id: OrderId },

    /// The requested target is the order's current status.
    #[error("Order {order_id} is already {status:?}")]
    NoOp { order_id: OrderId, status: String },

    #[error("Unrecognized order status: {0:?}")]
    UnrecognizedStatus(String),

    #[error("Status update failed: {0}")]
    UpdateFailed(#[from] UpdateError),
}

impl TransitionError {
    /// True for failures where repeating the same user action may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            TransitionError::UpdateFailed(UpdateError::Transport(_) | UpdateError::Unavailable)
        )
    }
}
