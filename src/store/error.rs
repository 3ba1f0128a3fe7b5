//! Error types for the order store actor.

use thiserror::Error;
use tracking_core::{OrderId, UpdateError};

/// Errors that can occur during order store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The actor's request channel is closed.
    #[error("Order store closed")]
    ActorClosed,

    /// The actor dropped the response channel before answering.
    #[error("Order store dropped response channel")]
    ActorDropped,

    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// A conditional status write found a different status than expected.
    #[error("Status conflict: expected {expected:?}, found {actual:?}")]
    Conflict { expected: String, actual: String },

    #[error("Invalid order: {0}")]
    InvalidOrder(String),
}

impl From<StoreError> for UpdateError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::ActorClosed | StoreError::ActorDropped => UpdateError::Unavailable,
            StoreError::NotFound(id) => UpdateError::NotFound(id),
            StoreError::Conflict { expected, actual } => UpdateError::Conflict { expected, actual },
            StoreError::InvalidOrder(msg) => UpdateError::Rejected {
                status: 422,
                body: msg,
            },
        }
    }
}
