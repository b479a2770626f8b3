// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the session.
//!
//! Queries provide derived views (filtered order lists, display labels) for the front end.

pub mod filter;
pub mod labels;

pub use filter::{filter_orders, order_matches, FilterIndex};
pub use labels::{assignment_label, AssignmentLabel};
