//! Client-side filters for the order list.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracking_core::Order;

/// Optional criteria combined with AND. An empty filter matches every order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderFilter {
    /// Case-insensitive substring of `estado`.
    pub estado: Option<String>,
    pub cliente_id: Option<u64>,
    /// Orders placed on or after the start of this day.
    pub fecha_desde: Option<NaiveDate>,
    /// Orders placed on or before the end of this day.
    pub fecha_hasta: Option<NaiveDate>,
    pub total_min: Option<f64>,
    pub total_max: Option<f64>,
}

impl OrderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn estado(mut self, fragment: impl Into<String>) -> Self {
        self.estado = Some(fragment.into());
        self
    }

    pub fn cliente(mut self, cliente_id: u64) -> Self {
        self.cliente_id = Some(cliente_id);
        self
    }

    pub fn between(mut self, desde: Option<NaiveDate>, hasta: Option<NaiveDate>) -> Self {
        self.fecha_desde = desde;
        self.fecha_hasta = hasta;
        self
    }

    pub fn total_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.total_min = min;
        self.total_max = max;
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, order: &Order) -> bool {
        if let Some(fragment) = self.estado.as_deref().filter(|f| !f.is_empty()) {
            if !order
                .estado
                .to_lowercase()
                .contains(&fragment.to_lowercase())
            {
                return false;
            }
        }
        if let Some(cliente_id) = self.cliente_id {
            if order.cliente_id != Some(cliente_id) {
                return false;
            }
        }
        if let Some(desde) = self.fecha_desde {
            if order.fecha_pedido < desde.and_time(NaiveTime::MIN) {
                return false;
            }
        }
        if let Some(hasta) = self.fecha_hasta {
            if order.fecha_pedido.date() > hasta {
                return false;
            }
        }
        if let Some(min) = self.total_min {
            if order.total < min {
                return false;
            }
        }
        if let Some(max) = self.total_max {
            if order.total > max {
                return false;
            }
        }
        true
    }

    /// Keeps the matching orders, preserving their order.
    pub fn apply<'a>(&self, orders: impl IntoIterator<Item = &'a Order>) -> Vec<Order> {
        orders
            .into_iter()
            .filter(|order| self.matches(order))
            .cloned()
            .collect()
    }
}
