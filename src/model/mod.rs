// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A [`Session`] holds the order catalog, the [`CalendarModel`] of day assignments and notes,
//! and the undo history that every schedule edit flows through.

pub mod calendar;
pub mod catalog;
pub mod date;
pub mod day;
pub mod ids;
pub mod session;

pub use calendar::CalendarModel;
pub use catalog::{Order, OrderCatalog};
pub use date::{CalendarDate, DateParseError, MonthCursor};
pub use day::DayState;
pub use ids::{OrderNumber, OrderNumberError};
pub use session::Session;
