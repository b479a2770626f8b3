// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Order, OrderCatalog};

/// Orders whose number or company contains `query`, ignoring case.
///
/// The query is trimmed first; an empty query returns the whole catalog. Results keep catalog
/// order, so the same `(catalog, query)` always yields the same list.
pub fn filter_orders<'a>(catalog: &'a OrderCatalog, query: &str) -> Vec<&'a Order> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.orders().iter().collect();
    }
    catalog
        .orders()
        .iter()
        .filter(|order| order_matches_folded(order, &needle))
        .collect()
}

/// Case-folded search keys for one catalog, kept alongside it so live filtering does not
/// re-fold every order on each keystroke. Rebuild with [`FilterIndex::build`] whenever the
/// catalog is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterIndex {
    keys: Vec<(String, String)>,
}

impl FilterIndex {
    pub fn build(catalog: &OrderCatalog) -> Self {
        let keys = catalog
            .orders()
            .iter()
            .map(|order| {
                (order.order_number().as_str().to_lowercase(), order.company().to_lowercase())
            })
            .collect();
        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Same result as [`filter_orders`] for the catalog this index was built from.
    pub fn matching<'c>(&self, catalog: &'c OrderCatalog, query: &str) -> Vec<&'c Order> {
        if self.keys.len() != catalog.len() {
            tracing::warn!(
                indexed = self.keys.len(),
                orders = catalog.len(),
                "filter index out of date; folding on the fly"
            );
            return filter_orders(catalog, query);
        }
        let needle = query.trim().to_lowercase();
        catalog
            .orders()
            .iter()
            .zip(&self.keys)
            .filter(|(_, (number, company))| {
                needle.is_empty() || number.contains(&needle) || company.contains(&needle)
            })
            .map(|(order, _)| order)
            .collect()
    }
}

pub fn order_matches(order: &Order, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty() || order_matches_folded(order, &needle)
}

fn order_matches_folded(order: &Order, needle: &str) -> bool {
    order.order_number().as_str().to_lowercase().contains(needle)
        || order.company().to_lowercase().contains(needle)
}
