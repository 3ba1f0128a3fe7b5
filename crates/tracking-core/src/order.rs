//! # Order
//!
//! The order as the order service returns it. The tracking core reads `estado`
//! and asks for it to be changed; it never owns the record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer order.
///
/// Field names on the wire follow the order service (`id_pedido`,
/// `fecha_pedido`, `estado`, `total`, `cliente_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "id_pedido")]
    pub id: OrderId,
    pub fecha_pedido: NaiveDateTime,
    pub estado: String,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cliente_id: Option<u64>,
}

impl Order {
    pub fn new(
        id: OrderId,
        fecha_pedido: NaiveDateTime,
        total: f64,
        estado: impl Into<String>,
    ) -> Self {
        Self {
            id,
            fecha_pedido,
            estado: estado.into(),
            total,
            cliente_id: None,
        }
    }

    pub fn with_customer(mut self, cliente_id: u64) -> Self {
        self.cliente_id = Some(cliente_id);
        self
    }
}
