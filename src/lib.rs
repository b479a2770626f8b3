// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


//! Printcal: a terminal-first print order calendar.
//!
//! Orders fetched from the portal are scheduled onto calendar days with per-day notes. Every
//! edit is a reversible command on a linear undo/redo history, and the schedule is persisted
//! between sessions.

pub mod config;
pub mod interaction;
pub mod model;
pub mod ops;
pub mod query;
pub mod refresh;
pub mod store;
pub mod tui;
