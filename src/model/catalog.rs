// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ids::OrderNumber;

/// One order as listed on the portal's manage page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    order_number: OrderNumber,
    company: String,
}

impl Order {
    pub fn new(order_number: OrderNumber, company: impl Into<String>) -> Self {
        Self { order_number, company: company.into() }
    }

    pub fn order_number(&self) -> &OrderNumber {
        &self.order_number
    }

    pub fn company(&self) -> &str {
        &self.company
    }
}

/// Read-only, ordered list of orders from the last successful login/refresh.
///
/// The catalog is only ever replaced wholesale. Duplicate order numbers in the ingress keep their
/// first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderCatalog {
    orders: Vec<Order>,
    index: HashMap<OrderNumber, usize>,
}

impl OrderCatalog {
    pub fn new(orders: impl IntoIterator<Item = Order>) -> Self {
        let mut catalog = Self::default();
        for order in orders {
            if catalog.index.contains_key(order.order_number()) {
                continue;
            }
            catalog.index.insert(order.order_number().clone(), catalog.orders.len());
            catalog.orders.push(order);
        }
        catalog
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, order_number: &str) -> Option<&Order> {
        self.index.get(order_number).map(|&idx| &self.orders[idx])
    }

    pub fn contains(&self, order_number: &str) -> bool {
        self.index.contains_key(order_number)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Order, OrderCatalog};
    use crate::model::OrderNumber;

    fn order(number: &str, company: &str) -> Order {
        Order::new(OrderNumber::new(number).expect("order number"), company)
    }

    #[test]
    fn catalog_keeps_first_duplicate_and_preserves_order() {
        let catalog = OrderCatalog::new([
            order("1002", "Beta"),
            order("1001", "Acme"),
            order("1002", "Beta Again"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.orders()[0].company(), "Beta");
        assert_eq!(catalog.orders()[1].order_number().as_str(), "1001");
        assert_eq!(catalog.get("1002").map(Order::company), Some("Beta"));
        assert!(!catalog.contains("9999"));
    }

    #[test]
    fn order_json_uses_portal_field_names() {
        let json = serde_json::to_string(&order("1001", "Acme")).expect("json");
        assert_eq!(json, r#"{"order_number":"1001","company":"Acme"}"#);
    }
}
