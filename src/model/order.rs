//! Payloads for the order store.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub use tracking_core::{Order, OrderId};

/// Payload for registering an order placed by checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub cliente_id: Option<u64>,
    pub total: f64,
    /// Defaults to now when absent.
    pub fecha_pedido: Option<NaiveDateTime>,
    /// Defaults to the first stage when absent.
    pub estado: Option<String>,
}

impl OrderCreate {
    pub fn new(cliente_id: u64, total: f64) -> Self {
        Self {
            cliente_id: Some(cliente_id),
            total,
            fecha_pedido: None,
            estado: None,
        }
    }

    pub fn placed_at(mut self, fecha_pedido: NaiveDateTime) -> Self {
        self.fecha_pedido = Some(fecha_pedido);
        self
    }

    pub fn with_status(mut self, estado: impl Into<String>) -> Self {
        self.estado = Some(estado.into());
        self
    }
}
