// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Portal order number, the identity of an [`Order`](super::Order).
///
/// Surrounding whitespace is trimmed on construction; the remaining value must be non-empty and
/// free of control characters so it can be used verbatim as a JSON key and a list label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderNumber {
    value: String,
}

impl OrderNumber {
    pub fn new(value: impl Into<String>) -> Result<Self, OrderNumberError> {
        let value = value.into();
        let trimmed = value.trim();
        validate_order_number(trimmed)?;
        let value = if trimmed.len() == value.len() { value } else { trimmed.to_owned() };
        Ok(Self { value })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for OrderNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for OrderNumber {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for OrderNumber {
    type Err = OrderNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for OrderNumber {
    type Error = OrderNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderNumber> for String {
    fn from(value: OrderNumber) -> Self {
        value.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderNumberError {
    #[error("order number must not be empty")]
    Empty,
    #[error("order number must not contain control characters")]
    ControlCharacter,
}

fn validate_order_number(value: &str) -> Result<(), OrderNumberError> {
    if value.is_empty() {
        return Err(OrderNumberError::Empty);
    }
    if value.chars().any(char::is_control) {
        return Err(OrderNumberError::ControlCharacter);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{OrderNumber, OrderNumberError};

    #[test]
    fn order_number_rejects_empty_and_blank() {
        assert_eq!(OrderNumber::new(""), Err(OrderNumberError::Empty));
        assert_eq!(OrderNumber::new("   "), Err(OrderNumberError::Empty));
    }

    #[test]
    fn order_number_rejects_control_characters() {
        assert_eq!(OrderNumber::new("10\n01"), Err(OrderNumberError::ControlCharacter));
    }

    #[test]
    fn order_number_trims_surrounding_whitespace() {
        let number = OrderNumber::new(" 1001 ").expect("order number");
        assert_eq!(number.as_str(), "1001");
    }

    #[test]
    fn order_number_deserializes_through_validation() {
        let parsed: OrderNumber = serde_json::from_str("\"1002\"").expect("parse");
        assert_eq!(parsed.as_str(), "1002");
        assert!(serde_json::from_str::<OrderNumber>("\"\"").is_err());
    }
}
