//! # Order Store Actor
//!
//! Owns the in-memory order table and processes [`StoreRequest`]s one at a
//! time in its own Tokio task, so the table needs no lock. The conditional
//! status write is a compare-and-set inside a single message, which makes it
//! atomic with respect to every other request.

use super::message::StoreRequest;
use super::StoreError;
use crate::model::{Order, OrderCreate, OrderId};
use chrono::Local;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tracking_core::{status_eq, StatusCatalog, StatusUpdate};

/// Server half of the order store.
pub struct OrderStoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    orders: BTreeMap<OrderId, Order>,
    next_id: u64,
    initial_status: String,
}

impl OrderStoreActor {
    pub(crate) fn new(receiver: mpsc::Receiver<StoreRequest>, catalog: &StatusCatalog) -> Self {
        Self {
            receiver,
            orders: BTreeMap::new(),
            next_id: 1,
            initial_status: catalog.stages()[0].name.clone(),
        }
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self) {
        info!(entity_type = "Order", "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(?params, "Create");
                    let result = self.create(params);
                    match &result {
                        Ok(id) => info!(order_id = %id, size = self.orders.len(), "Created"),
                        Err(e) => warn!(error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Get { id, respond_to } => {
                    let order = self.orders.get(&id).cloned();
                    debug!(order_id = %id, found = order.is_some(), "Get");
                    let _ = respond_to.send(Ok(order));
                }
                StoreRequest::List {
                    scope,
                    filter,
                    respond_to,
                } => {
                    let orders: Vec<Order> = self
                        .orders
                        .values()
                        .filter(|order| scope.includes(order) && filter.matches(order))
                        .cloned()
                        .collect();
                    debug!(?scope, matched = orders.len(), "List");
                    let _ = respond_to.send(Ok(orders));
                }
                StoreRequest::SetStatus { update, respond_to } => {
                    debug!(?update, "SetStatus");
                    let order_id = update.order_id;
                    let result = self.set_status(update);
                    match &result {
                        Ok(order) => info!(order_id = %order_id, estado = %order.estado, "Status updated"),
                        Err(e) => warn!(order_id = %order_id, error = %e, "Status update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(order_id = %id, "Delete");
                    if self.orders.remove(&id).is_some() {
                        info!(order_id = %id, size = self.orders.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(order_id = %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id)));
                    }
                }
            }
        }

        info!(entity_type = "Order", size = self.orders.len(), "Shutdown");
    }

    fn create(&mut self, params: OrderCreate) -> Result<OrderId, StoreError> {
        if !params.total.is_finite() || params.total < 0.0 {
            return Err(StoreError::InvalidOrder(format!(
                "total must be a non-negative amount, got {}",
                params.total
            )));
        }
        let estado = match params.estado {
            Some(estado) if estado.trim().is_empty() => {
                return Err(StoreError::InvalidOrder("estado must not be empty".to_string()))
            }
            Some(estado) => estado,
            None => self.initial_status.clone(),
        };

        let id = OrderId(self.next_id);
        self.next_id += 1;

        let fecha_pedido = params
            .fecha_pedido
            .unwrap_or_else(|| Local::now().naive_local());
        let mut order = Order::new(id, fecha_pedido, params.total, estado);
        order.cliente_id = params.cliente_id;
        self.orders.insert(id, order);
        Ok(id)
    }

    fn set_status(&mut self, update: StatusUpdate) -> Result<Order, StoreError> {
        let order = self
            .orders
            .get_mut(&update.order_id)
            .ok_or(StoreError::NotFound(update.order_id))?;

        if let Some(expected) = &update.expected {
            if !status_eq(expected, &order.estado) {
                return Err(StoreError::Conflict {
                    expected: expected.clone(),
                    actual: order.estado.clone(),
                });
            }
        }

        order.estado = update.estado;
        Ok(order.clone())
    }
}
