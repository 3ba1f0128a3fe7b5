//! Who is looking at the order panel, and what they may do there.
//!
//! The tracking core only ever sees a boolean. This is where that boolean
//! comes from: the seller may change statuses and sees every order, customers
//! see their own orders read-only.

use serde::{Deserialize, Serialize};
use tracking_core::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// "vendedor"
    Seller,
    Customer,
}

/// Which orders a viewer may list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderScope {
    All,
    Customer(u64),
}

impl OrderScope {
    pub fn includes(&self, order: &Order) -> bool {
        match self {
            OrderScope::All => true,
            OrderScope::Customer(id) => order.cliente_id == Some(*id),
        }
    }
}

/// The signed-in user as seen by the order panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub user_id: u64,
    pub role: Role,
}

impl Viewer {
    /// Derives the role from the configured seller account.
    pub fn new(user_id: u64, seller_id: u64) -> Self {
        let role = if user_id == seller_id {
            Role::Seller
        } else {
            Role::Customer
        };
        Self { user_id, role }
    }

    pub fn seller(user_id: u64) -> Self {
        Self {
            user_id,
            role: Role::Seller,
        }
    }

    pub fn customer(user_id: u64) -> Self {
        Self {
            user_id,
            role: Role::Customer,
        }
    }

    pub fn can_edit_status(&self) -> bool {
        self.role == Role::Seller
    }

    pub fn scope(&self) -> OrderScope {
        match self.role {
            Role::Seller => OrderScope::All,
            Role::Customer => OrderScope::Customer(self.user_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tracking_core::OrderId;

    #[test]
    fn test_role_from_seller_id() {
        assert_eq!(Viewer::new(1, 1).role, Role::Seller);
        assert_eq!(Viewer::new(7, 1).role, Role::Customer);
        assert!(Viewer::new(1, 1).can_edit_status());
        assert!(!Viewer::new(7, 1).can_edit_status());
    }

    #[test]
    fn test_customer_scope_only_includes_own_orders() {
        let placed = NaiveDate::from_ymd_opt(2024, 2, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mine = Order::new(OrderId(1), placed, 1.0, "Enviado").with_customer(7);
        let other = Order::new(OrderId(2), placed, 1.0, "Enviado").with_customer(8);
        let anonymous = Order::new(OrderId(3), placed, 1.0, "Enviado");

        let scope = Viewer::customer(7).scope();
        assert!(scope.includes(&mine));
        assert!(!scope.includes(&other));
        assert!(!scope.includes(&anonymous));
        assert!(Viewer::seller(1).scope().includes(&anonymous));
    }
}
