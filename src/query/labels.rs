// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{OrderNumber, Session};

/// Display label for one assignment.
///
/// Orders missing from the current catalog are orphans: they keep their last known company name
/// when one was ever seen, and otherwise render with a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentLabel<'a> {
    pub order_number: &'a OrderNumber,
    pub company: Option<&'a str>,
    pub orphaned: bool,
}

impl fmt::Display for AssignmentLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.company.map(str::trim).filter(|c| !c.is_empty()) {
            Some(company) => write!(f, "{} - {company}", self.order_number)?,
            None => write!(f, "{}", self.order_number)?,
        }
        if self.orphaned {
            f.write_str(" (not in catalog)")?;
        }
        Ok(())
    }
}

pub fn assignment_label<'a>(session: &'a Session, order_number: &'a OrderNumber) -> AssignmentLabel<'a> {
    AssignmentLabel {
        order_number,
        company: session.company_of(order_number.as_str()),
        orphaned: !session.catalog().contains(order_number.as_str()),
    }
}

/// `order 1001 (Acme)` for status messages.
pub fn order_phrase(session: &Session, order_number: &OrderNumber) -> String {
    match session.company_of(order_number.as_str()).map(str::trim).filter(|c| !c.is_empty()) {
        Some(company) => format!("order {order_number} ({company})"),
        None => format!("order {order_number}"),
    }
}
