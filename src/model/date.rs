// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Calendar dates and month navigation.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A year/month/day value without a time component.
///
/// Ordering is chronological. The textual form is `YYYY-MM-DD`; parsing also accepts unpadded
/// components (`2024-5-3`) as written by older state files. Years are limited to `1..=9999` so
/// the textual form always parses back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate(NaiveDate);

const YEARS: RangeInclusive<i32> = 1..=9999;

impl CalendarDate {
    /// 0001-01-01, the first supported date.
    pub fn earliest() -> Self {
        Self(NaiveDate::from_ymd_opt(*YEARS.start(), 1, 1).unwrap_or(NaiveDate::MIN))
    }

    /// 9999-12-31, the last supported date.
    pub fn latest() -> Self {
        Self(NaiveDate::from_ymd_opt(*YEARS.end(), 12, 31).unwrap_or(NaiveDate::MAX))
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !YEARS.contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    pub fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Shifts by `days`, saturating at [`Self::earliest`] and [`Self::latest`].
    pub fn offset_days(self, days: i64) -> Self {
        let limit = if days < 0 { Self::earliest() } else { Self::latest() };
        Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
            .filter(|shifted| (Self::earliest()..=Self::latest()).contains(shifted))
            .unwrap_or(limit)
    }

    /// Long label used in status messages, e.g. `May 03, 2024`.
    pub fn long_label(self) -> String {
        self.0.format("%B %d, %Y").to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("expected YYYY-MM-DD, got '{0}'")]
    Malformed(String),
    #[error("'{0}' is not a valid calendar date")]
    OutOfRange(String),
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DateParseError::Malformed(s.to_owned());
        let mut parts = s.trim().split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        let year = year.parse::<i32>().map_err(|_| malformed())?;
        let month = month.parse::<u32>().map_err(|_| malformed())?;
        let day = day.parse::<u32>().map_err(|_| malformed())?;
        Self::from_ymd(year, month, day).ok_or_else(|| DateParseError::OutOfRange(s.to_owned()))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The month currently shown by the calendar view. Pure view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (YEARS.contains(&year) && (1..=12).contains(&month)).then_some(Self { year, month })
    }

    pub fn containing(date: CalendarDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn current() -> Self {
        Self::containing(CalendarDate::today())
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// The month before, staying put at January of year 1.
    pub fn previous(self) -> Self {
        if self.month == 1 && self.year == *YEARS.start() {
            self
        } else if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// The month after, staying put at December 9999.
    pub fn next(self) -> Self {
        if self.month == 12 && self.year == *YEARS.end() {
            self
        } else if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn first_day(self) -> CalendarDate {
        // Year and month are validated on construction, so day 1 always exists.
        CalendarDate::from_ymd(self.year, self.month, 1).unwrap_or_else(CalendarDate::earliest)
    }

    pub fn contains(self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// `May 2024`.
    pub fn label(self) -> String {
        self.first_day().as_naive().format("%B %Y").to_string()
    }

    /// Monday-first weeks covering the whole month, padded with adjacent-month days. Never more
    /// than six weeks; past the end of the supported range padding days repeat the last date.
    pub fn weeks(self) -> Vec<[CalendarDate; 7]> {
        const MAX_WEEKS: usize = 6;
        let first = self.first_day();
        let lead = i64::from(first.weekday().num_days_from_monday());
        let mut cursor = first.offset_days(-lead);
        let mut weeks = Vec::with_capacity(MAX_WEEKS);
        while weeks.len() < MAX_WEEKS {
            let mut week = [cursor; 7];
            for (offset, slot) in week.iter_mut().enumerate() {
                *slot = cursor.offset_days(offset as i64);
            }
            weeks.push(week);
            let next = cursor.offset_days(7);
            let advanced = next.as_naive().signed_duration_since(cursor.as_naive()).num_days() == 7;
            if !advanced || !self.contains(next) {
                break;
            }
            cursor = next;
        }
        weeks
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthCursor {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DateParseError::Malformed(s.to_owned());
        let (year, month) = s.trim().split_once('-').ok_or_else(malformed)?;
        let year = year.parse::<i32>().map_err(|_| malformed())?;
        let month = month.parse::<u32>().map_err(|_| malformed())?;
        Self::new(year, month).ok_or_else(|| DateParseError::OutOfRange(s.to_owned()))
    }
}
