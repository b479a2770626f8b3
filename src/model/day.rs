// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::OrderNumber;

/// Assignments and note for one calendar day.
///
/// `orders` has no duplicates and keeps insertion order (most recently added last). A day with
/// no orders and an empty note is equivalent to an absent day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayState {
    orders: Vec<OrderNumber>,
    note: String,
}

impl DayState {
    pub const fn empty() -> Self {
        Self { orders: Vec::new(), note: String::new() }
    }

    pub fn orders(&self) -> &[OrderNumber] {
        &self.orders
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn contains(&self, order_number: &str) -> bool {
        self.position(order_number).is_some()
    }

    pub fn position(&self, order_number: &str) -> Option<usize> {
        self.orders.iter().position(|o| o.as_str() == order_number)
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty() && self.note.is_empty()
    }

    pub(crate) fn orders_mut(&mut self) -> &mut Vec<OrderNumber> {
        &mut self.orders
    }

    pub(crate) fn set_note(&mut self, note: String) -> String {
        std::mem::replace(&mut self.note, note)
    }

    /// Builds a day from persisted parts, dropping duplicate order references.
    pub fn from_parts(orders: impl IntoIterator<Item = OrderNumber>, note: String) -> Self {
        let mut day = Self { orders: Vec::new(), note };
        for order in orders {
            if !day.orders.contains(&order) {
                day.orders.push(order);
            }
        }
        day
    }
}
