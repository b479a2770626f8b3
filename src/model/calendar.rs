// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

use super::date::CalendarDate;
use super::day::DayState;
use super::ids::OrderNumber;

static EMPTY_DAY: DayState = DayState::empty();

/// Mapping from calendar date to [`DayState`]; the single source of truth for schedule data.
///
/// Only structural invariants live here (no duplicate order per day, empty days pruned).
/// Mutators are crate-private and are driven by [`Command`](crate::ops::Command) apply/undo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarModel {
    days: BTreeMap<CalendarDate, DayState>,
}

impl CalendarModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_days(days: impl IntoIterator<Item = (CalendarDate, DayState)>) -> Self {
        let days = days.into_iter().filter(|(_, day)| !day.is_empty()).collect();
        Self { days }
    }

    /// Returns the day's state, or an empty state when nothing is stored. Never inserts.
    pub fn day(&self, date: CalendarDate) -> &DayState {
        self.days.get(&date).unwrap_or(&EMPTY_DAY)
    }

    pub fn days(&self) -> &BTreeMap<CalendarDate, DayState> {
        &self.days
    }

    pub fn days_between(
        &self,
        range: RangeInclusive<CalendarDate>,
    ) -> impl Iterator<Item = (&CalendarDate, &DayState)> {
        self.days.range(range)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Every order number referenced by at least one day.
    pub fn referenced_orders(&self) -> BTreeSet<&OrderNumber> {
        self.days.values().flat_map(|day| day.orders().iter()).collect()
    }

    /// Appends `order` to the day. Returns the index it landed at, or `None` if already present.
    pub(crate) fn apply_assign(&mut self, date: CalendarDate, order: &OrderNumber) -> Option<usize> {
        if self.day(date).contains(order.as_str()) {
            return None;
        }
        let orders = self.days.entry(date).or_default().orders_mut();
        orders.push(order.clone());
        Some(orders.len() - 1)
    }

    /// Inserts `order` at `index` (clamped to the list length). Returns `false` if present.
    pub(crate) fn insert_at(&mut self, date: CalendarDate, index: usize, order: &OrderNumber) -> bool {
        if self.day(date).contains(order.as_str()) {
            return false;
        }
        let orders = self.days.entry(date).or_default().orders_mut();
        let index = index.min(orders.len());
        orders.insert(index, order.clone());
        true
    }

    /// Removes `order` from the day. Returns the index it was removed from, or `None` if absent.
    pub(crate) fn apply_unassign(&mut self, date: CalendarDate, order: &str) -> Option<usize> {
        let day = self.days.get_mut(&date)?;
        let index = day.position(order)?;
        day.orders_mut().remove(index);
        self.prune(date);
        Some(index)
    }

    /// Empties the day's order list, leaving the note alone. Returns the removed list verbatim.
    pub(crate) fn apply_clear_day(&mut self, date: CalendarDate) -> Vec<OrderNumber> {
        let Some(day) = self.days.get_mut(&date) else {
            return Vec::new();
        };
        let cleared = std::mem::take(day.orders_mut());
        self.prune(date);
        cleared
    }

    /// Puts back a list captured by [`Self::apply_clear_day`]. Orders already present are kept
    /// once, in the restored position.
    pub(crate) fn restore_orders(&mut self, date: CalendarDate, orders: &[OrderNumber]) {
        if orders.is_empty() {
            return;
        }
        let existing = self.days.entry(date).or_default().orders_mut();
        let mut restored = orders.to_vec();
        restored.extend(existing.drain(..).filter(|o| !orders.contains(o)));
        *existing = restored;
    }

    /// Replaces the note verbatim and returns the previous text.
    pub(crate) fn apply_set_note(&mut self, date: CalendarDate, text: String) -> String {
        if text.is_empty() && !self.days.contains_key(&date) {
            return String::new();
        }
        let previous = self.days.entry(date).or_default().set_note(text);
        self.prune(date);
        previous
    }

    fn prune(&mut self, date: CalendarDate) {
        if self.days.get(&date).is_some_and(DayState::is_empty) {
            self.days.remove(&date);
        }
    }
}
