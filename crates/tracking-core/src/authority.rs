//! # Transition Authority
//!
//! The only component that changes an order's status. It runs the local
//! checks (terminal stage, permission, no-op, unrecognized status) and, when
//! they pass, issues a single [`StatusUpdate`] through the injected
//! [`OrderUpdater`].
//!
//! ## Advance vs. Jump
//!
//! - [`TransitionAuthority::advance`] is forward-only and moves exactly one
//!   stage.
//! - [`TransitionAuthority::jump_to`] moves to any of the four stages,
//!   backwards included, and is how a seller corrects a wrong advance.
//!
//! Neither retries. A failed update comes back as
//! [`TransitionError::UpdateFailed`] and the caller decides what to do.
//!
//! ## Concurrency
//!
//! Two callers advancing the same order from the same snapshot both compute
//! the same next stage. Every update therefore carries the status that was
//! read (`StatusUpdate::expected`) so that a backend able to do conditional
//! writes can reject the second one with [`UpdateError::Conflict`](crate::UpdateError::Conflict).

use crate::catalog::StatusCatalog;
use crate::error::TransitionError;
use crate::order::{Order, OrderId};
use crate::progression::ProgressionEngine;
use crate::stage::{status_eq, Stage, StageInfo};
use crate::updater::{OrderUpdater, StatusUpdate};
use std::sync::Arc;

/// A status change the order service accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub order_id: OrderId,
    /// Status string before the change, as the caller had it.
    pub previous: String,
    pub stage: Stage,
    /// Canonical name written to the order service.
    pub status: String,
}

impl StatusChange {
    /// Replaces the cached status of `order` if it is the order that changed.
    pub fn apply_to(&self, order: &mut Order) -> bool {
        if order.id != self.order_id {
            return false;
        }
        order.estado = self.status.clone();
        true
    }
}

/// Gates status mutations behind a caller-supplied permission flag.
///
/// ```rust
/// use std::sync::Arc;
/// use tracking_core::mock::MockUpdater;
/// use tracking_core::{Order, OrderId, StatusCatalog, TransitionAuthority};
///
/// # #[tokio::main]
/// # async fn main() {
/// let updater = MockUpdater::new();
/// updater.expect_update(OrderId(7)).return_ok();
///
/// let authority = TransitionAuthority::new(Arc::new(StatusCatalog::standard()), updater.clone());
/// let created = chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// let order = Order::new(OrderId(7), created, 120_000.0, "Procesando");
///
/// let change = authority.advance(&order, true).await.unwrap();
/// assert_eq!(change.status, "Enviado");
/// updater.verify();
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TransitionAuthority<U> {
    engine: ProgressionEngine,
    updater: U,
}

impl<U: OrderUpdater> TransitionAuthority<U> {
    pub fn new(catalog: Arc<StatusCatalog>, updater: U) -> Self {
        Self {
            engine: ProgressionEngine::new(catalog),
            updater,
        }
    }

    pub fn engine(&self) -> &ProgressionEngine {
        &self.engine
    }

    pub fn updater(&self) -> &U {
        &self.updater
    }

    /// Moves `order` one stage forward.
    ///
    /// The terminal check runs before the permission check, so an order in
    /// the last stage reports `AlreadyTerminal` to every caller.
    pub async fn advance(
        &self,
        order: &Order,
        can_edit: bool,
    ) -> Result<StatusChange, TransitionError> {
        let current = self.engine.current_index(&order.estado);
        if self.engine.is_terminal(current) {
            return Err(TransitionError::AlreadyTerminal { order_id: order.id });
        }
        if !can_edit {
            return Err(TransitionError::PermissionDenied);
        }
        if current.is_none() {
            return Err(TransitionError::UnrecognizedStatus(order.estado.clone()));
        }
        let next = self
            .engine
            .next_stage(current)
            .ok_or(TransitionError::AlreadyTerminal { order_id: order.id })?;

        self.commit(order, next).await
    }

    /// Moves `order` to `target`, in either direction.
    pub async fn jump_to(
        &self,
        order: &Order,
        target: &str,
        can_edit: bool,
    ) -> Result<StatusChange, TransitionError> {
        if !can_edit {
            return Err(TransitionError::PermissionDenied);
        }
        if status_eq(target, &order.estado) {
            return Err(TransitionError::NoOp {
                order_id: order.id,
                status: order.estado.clone(),
            });
        }
        let info = self
            .engine
            .catalog()
            .lookup(target)
            .ok_or_else(|| TransitionError::UnrecognizedStatus(target.to_string()))?;

        self.commit(order, info).await
    }

    /// Same as [`jump_to`](Self::jump_to) with a typed target.
    pub async fn jump_to_stage(
        &self,
        order: &Order,
        target: Stage,
        can_edit: bool,
    ) -> Result<StatusChange, TransitionError> {
        let name = self.engine.catalog().name(target).to_string();
        self.jump_to(order, &name, can_edit).await
    }

    async fn commit(
        &self,
        order: &Order,
        target: &StageInfo,
    ) -> Result<StatusChange, TransitionError> {
        let update =
            StatusUpdate::new(order.id, target.name.clone()).expecting(order.estado.clone());
        self.updater.update_status(update).await?;

        Ok(StatusChange {
            order_id: order.id,
            previous: order.estado.clone(),
            stage: target.stage,
            status: target.name.clone(),
        })
    }
}
