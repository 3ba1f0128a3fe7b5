//! # Tracking Core
//!
//! The order status progression model of the JosniShop order panel: four fixed
//! stages, a forward-only `advance`, an unguarded `jump_to` for corrections, and
//! a permission flag in front of both.
//!
//! ## Lifecycle
//!
//! ```text
//! Procesando (0) ──► Enviado (1) ──► En Tránsito (2) ──► Entregado (3)
//! ```
//!
//! A status string that matches none of these (compared ignoring case) is the
//! "unknown" pseudo-state. `advance` never moves out of it; `jump_to` can.
//!
//! ## Architecture Overview
//!
//! 1. **Catalog** ([`StatusCatalog`]) - the ordered stages and their display metadata
//! 2. **Engine** ([`ProgressionEngine`]) - positions, next stage, progress, timeline
//! 3. **Authority** ([`TransitionAuthority`]) - local checks, then one update through the collaborator
//! 4. **Collaborator** ([`OrderUpdater`]) - whatever persists the order
//!
//! The catalog is injected as an `Arc<StatusCatalog>` and the permission flag
//! is passed on every call; nothing is read from ambient state.
//!
//! ## Errors
//!
//! [`TransitionError`] separates the local refusals (`PermissionDenied`,
//! `AlreadyTerminal`, `NoOp`, `UnrecognizedStatus`) from
//! `UpdateFailed`, which wraps the collaborator's [`UpdateError`]. Nothing is
//! retried and nothing is logged here; the caller owns both decisions.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockUpdater`], an in-memory
//! collaborator with queued responses and call recording.

pub mod authority;
pub mod catalog;
pub mod error;
pub mod mock;
pub mod order;
pub mod progression;
pub mod stage;
pub mod updater;

pub use authority::{StatusChange, TransitionAuthority};
pub use catalog::{CatalogError, StatusCatalog};
pub use error::{TransitionError, UpdateError};
pub use order::{Order, OrderId};
pub use progression::{Progress, ProgressionEngine, StepState, TimelineStep};
pub use stage::{status_eq, ParsedStatus, Stage, StageInfo};
pub use updater::{OrderUpdater, StatusUpdate};
