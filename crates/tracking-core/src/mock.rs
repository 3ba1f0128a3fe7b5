//! # Mock Updater & Testing Guide
//!
//! [`MockUpdater`] implements [`OrderUpdater`] entirely in memory. Queue the
//! responses the order service should give, run the code under test, then
//! check what was sent with [`MockUpdater::calls`] and that every expectation
//! was consumed with [`MockUpdater::verify`].
//!
//! ## When to use the mock vs. a real backend
//!
//! | Feature | MockUpdater | Order store / HTTP |
//! |---------|-------------|--------------------|
//! | **Speed** | Instant | Spawns a task / needs a server |
//! | **Error Injection** | `return_err(...)` | Needs a real failure |
//! | **Call Recording** | Every `StatusUpdate` kept | Not recorded |
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use tracking_core::mock::MockUpdater;
//! use tracking_core::{Order, OrderId, StatusCatalog, TransitionAuthority, TransitionError, UpdateError};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let updater = MockUpdater::new();
//! updater
//!     .expect_update(OrderId(3))
//!     .return_err(UpdateError::Transport("connection reset".into()));
//!
//! let authority = TransitionAuthority::new(Arc::new(StatusCatalog::standard()), updater.clone());
//! let created = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let order = Order::new(OrderId(3), created, 10.0, "Enviado");
//!
//! let err = authority.advance(&order, true).await.unwrap_err();
//! assert!(matches!(err, TransitionError::UpdateFailed(UpdateError::Transport(_))));
//! assert_eq!(updater.calls()[0].estado, "En Tránsito");
//! updater.verify();
//! # }
//! ```
//!
//! A call that arrives with no queued expectation, or for another order than
//! the next expectation names, panics with a description of the mismatch.

use crate::error::UpdateError;
use crate::order::OrderId;
use crate::updater::{OrderUpdater, StatusUpdate};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

struct Expectation {
    order_id: OrderId,
    response: Result<(), UpdateError>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    calls: Vec<StatusUpdate>,
}

/// An [`OrderUpdater`] driven by queued expectations.
///
/// Clones share state, so keep one handle in the test and give a clone to
/// the code under test.
#[derive(Clone, Default)]
pub struct MockUpdater {
    state: Arc<Mutex<MockState>>,
}

impl MockUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one update for `order_id`.
    pub fn expect_update(&self, order_id: OrderId) -> UpdateExpectationBuilder {
        UpdateExpectationBuilder {
            order_id,
            state: self.state.clone(),
        }
    }

    /// Every update received so far, in order.
    pub fn calls(&self) -> Vec<StatusUpdate> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    /// Panics if queued expectations were never consumed.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

#[async_trait]
impl OrderUpdater for MockUpdater {
    async fn update_status(&self, update: StatusUpdate) -> Result<(), UpdateError> {
        let mut state = self.state.lock().unwrap();
        let expectation = state.expectations.pop_front();
        let order_id = update.order_id;
        state.calls.push(update);
        drop(state);

        match expectation {
            Some(exp) if exp.order_id == order_id => exp.response,
            Some(exp) => panic!(
                "Unexpected update for order {}, expected order {}",
                order_id, exp.order_id
            ),
            None => panic!("Unexpected update for order {}", order_id),
        }
    }
}

/// Builder for update expectations.
pub struct UpdateExpectationBuilder {
    order_id: OrderId,
    state: Arc<Mutex<MockState>>,
}

impl UpdateExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: UpdateError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), UpdateError>) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation {
            order_id: self.order_id,
            response,
        });
    }
}
