// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use printcal::model::{CalendarDate, Order, OrderCatalog, OrderNumber};
use printcal::ops::Command;

const COMPANIES: [&str; 8] = [
    "Acme Print Co",
    "Beta Signs",
    "Gamma Apparel",
    "Delta Promotions",
    "Epsilon Sports",
    "Zeta Bakery",
    "Eta Logistics",
    "Theta School District",
];

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn order_count(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Medium => 500,
            Self::Large => 5_000,
        }
    }
}

pub fn order_number(idx: usize) -> OrderNumber {
    OrderNumber::new(format!("{}", 100_000 + idx)).expect("order number")
}

pub fn catalog(case: Case) -> OrderCatalog {
    OrderCatalog::new((0..case.order_count()).map(|idx| {
        let company = format!("{} #{}", COMPANIES[idx % COMPANIES.len()], idx / COMPANIES.len());
        Order::new(order_number(idx), company)
    }))
}

pub fn day(offset: i64) -> CalendarDate {
    CalendarDate::from_ymd(2024, 5, 1).expect("date").offset_days(offset)
}

/// A mixed edit stream over a month: drops, removals, moves, clears and notes.
pub fn command_stream(count: usize) -> Vec<Command> {
    (0..count)
        .map(|idx| {
            let date = day((idx % 28) as i64);
            match idx % 6 {
                0 | 1 => Command::batch_assign(
                    date,
                    (0..4).map(|k| order_number(idx * 4 + k)).collect(),
                ),
                2 => Command::unassign(date, order_number((idx - 2) * 4)),
                3 => Command::move_orders(
                    day(((idx - 2) % 28) as i64),
                    day(((idx + 5) % 28) as i64),
                    vec![order_number((idx - 2) * 4 + 1)],
                ),
                4 => Command::set_note(date, format!("press run {idx}")),
                _ => Command::clear_day(date),
            }
        })
        .collect()
}
