// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


//! Operator-facing status wording.

use crate::model::{CalendarDate, OrderNumber, Session};
use crate::ops::{Command, CommandKind};
use crate::query::labels::order_phrase;

pub const NOTHING_TO_UNDO: &str = "Nothing to undo.";
pub const NOTHING_TO_REDO: &str = "Nothing to redo.";
pub const NO_ORDERS_ON_DAY: &str = "No orders scheduled for this day.";
pub const REFRESHING: &str = "Refreshing orders...";
pub const REFRESHED: &str = "Orders refreshed.";
pub const REFRESHED_EMPTY: &str = "Orders refreshed, but no orders were found.";

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn subject(session: &Session, orders: &[&OrderNumber]) -> String {
    match orders {
        [single] => order_phrase(session, single),
        _ => format!("{} orders", orders.len()),
    }
}

/// "Assigned order 1001 (Acme) to May 03, 2024." / "Assigned 3 orders to ...".
pub fn assigned(session: &Session, orders: &[&OrderNumber], target: CalendarDate) -> String {
    format!("Assigned {} to {}.", subject(session, orders), target.long_label())
}

pub fn moved(
    session: &Session,
    orders: &[&OrderNumber],
    source: CalendarDate,
    target: CalendarDate,
) -> String {
    format!(
        "Moved {} from {} to {}.",
        subject(session, orders),
        source.long_label(),
        target.long_label()
    )
}

/// Drop that changed nothing: the orders are already on `target`.
pub fn remains_scheduled(session: &Session, orders: &[&OrderNumber], target: CalendarDate) -> String {
    let verb = if orders.len() == 1 { "remains" } else { "remain" };
    format!(
        "{} {verb} scheduled for {}.",
        capitalize(&subject(session, orders)),
        target.long_label()
    )
}

/// Removal that changed nothing: none of the orders is on `date`.
pub fn not_scheduled(session: &Session, orders: &[&OrderNumber], date: CalendarDate) -> String {
    let verb = if orders.len() == 1 { "is" } else { "are" };
    format!(
        "{} {verb} not scheduled for {}.",
        capitalize(&subject(session, orders)),
        date.long_label()
    )
}

pub fn removed(session: &Session, orders: &[&OrderNumber], date: CalendarDate) -> String {
    format!("Removed {} from {}.", subject(session, orders), date.long_label())
}

pub fn cleared(count: usize, date: CalendarDate) -> String {
    format!("Cleared {count} order{} from {}.", plural(count), date.long_label())
}

/// "Undo: restored assignments for May 03, 2024." and the redo/notes variants.
pub fn restored(direction: &str, command: &Command) -> String {
    let what = if command.kind() == CommandKind::SetNote { "notes" } else { "assignments" };
    let dates = match command.source_date() {
        Some(source) => format!("{}, {}", source.long_label(), command.date().long_label()),
        None => command.date().long_label(),
    };
    format!("{direction}: restored {what} for {dates}.")
}

pub fn save_failed(reason: &impl std::fmt::Display) -> String {
    format!("Could not save schedule: {reason}")
}

pub fn load_failed(reason: &impl std::fmt::Display) -> String {
    format!("Could not load saved schedule: {reason}")
}
