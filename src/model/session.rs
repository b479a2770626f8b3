// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use super::calendar::CalendarModel;
use super::catalog::{Order, OrderCatalog};
use super::date::CalendarDate;
use super::day::DayState;
use super::ids::OrderNumber;
use crate::ops::{Command, HistoryManager};
use crate::query::filter::FilterIndex;

/// Everything one operator session works against: the order catalog, the schedule, and its
/// undo history.
///
/// Also remembers the company name of every order seen in any catalog (or loaded from disk) so
/// assignments whose order has since left the catalog still render with a readable label.
#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: OrderCatalog,
    filter: FilterIndex,
    calendar: CalendarModel,
    history: HistoryManager,
    companies: BTreeMap<OrderNumber, String>,
}

impl Session {
    pub fn new(history_limit: Option<NonZeroUsize>) -> Self {
        Self { history: HistoryManager::with_limit(history_limit), ..Self::default() }
    }

    /// Starts a session from persisted schedule data.
    pub fn with_snapshot(
        calendar: CalendarModel,
        companies: BTreeMap<OrderNumber, String>,
        history_limit: Option<NonZeroUsize>,
    ) -> Self {
        Self { calendar, companies, ..Self::new(history_limit) }
    }

    pub fn catalog(&self) -> &OrderCatalog {
        &self.catalog
    }

    pub fn calendar(&self) -> &CalendarModel {
        &self.calendar
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn companies(&self) -> &BTreeMap<OrderNumber, String> {
        &self.companies
    }

    pub fn day(&self, date: CalendarDate) -> &DayState {
        self.calendar.day(date)
    }

    pub fn filtered_orders(&self, query: &str) -> Vec<&Order> {
        self.filter.matching(&self.catalog, query)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn submit(&mut self, command: Command) -> Option<&Command> {
        self.history.submit(command, &mut self.calendar)
    }

    pub fn undo(&mut self) -> Option<&Command> {
        self.history.undo(&mut self.calendar)
    }

    pub fn redo(&mut self) -> Option<&Command> {
        self.history.redo(&mut self.calendar)
    }

    /// Swaps in a freshly fetched catalog. Existing assignments and history are untouched even
    /// when their orders are no longer listed.
    pub fn replace_catalog(&mut self, orders: impl IntoIterator<Item = Order>) {
        self.catalog = OrderCatalog::new(orders);
        self.filter = FilterIndex::build(&self.catalog);
        for order in self.catalog.orders() {
            self.companies
                .insert(order.order_number().clone(), order.company().to_owned());
        }
        let orphans = self.orphaned_orders().len();
        tracing::info!(orders = self.catalog.len(), orphans, "order catalog replaced");
    }

    /// Scheduled order numbers that the current catalog does not list.
    pub fn orphaned_orders(&self) -> Vec<&OrderNumber> {
        self.calendar
            .referenced_orders()
            .into_iter()
            .filter(|number| !self.catalog.contains(number.as_str()))
            .collect()
    }

    /// Company name from the catalog, falling back to the last one seen for this order.
    pub fn company_of(&self, order_number: &str) -> Option<&str> {
        self.catalog
            .get(order_number)
            .map(Order::company)
            .or_else(|| self.companies.get(order_number).map(String::as_str))
    }

    /// Logout/new login: drops catalog and history and adopts the reloaded schedule.
    pub fn reset(&mut self, calendar: CalendarModel, companies: BTreeMap<OrderNumber, String>) {
        self.catalog = OrderCatalog::default();
        self.filter = FilterIndex::default();
        self.history.clear();
        self.calendar = calendar;
        self.companies = companies;
    }
}
