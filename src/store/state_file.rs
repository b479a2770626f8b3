// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::model::{CalendarDate, CalendarModel, DayState, OrderNumber, Session};

pub const STATE_FILE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json error at {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("state file {path:?} has unsupported version {version}")]
    UnsupportedVersion { path: PathBuf, version: u64 },
    #[error("state file {path:?} is not a recognized schedule layout")]
    UnrecognizedLayout { path: PathBuf },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// Attempts to flush written file contents and the rename to stable storage where
    /// possible. Exact guarantees are platform/filesystem-dependent.
    Durable,
}

/// Schedule data as persisted: the calendar plus remembered company names for its orders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub calendar: CalendarModel,
    pub companies: BTreeMap<OrderNumber, String>,
}

impl Snapshot {
    pub fn into_session(self, history_limit: Option<std::num::NonZeroUsize>) -> Session {
        Session::with_snapshot(self.calendar, self.companies, history_limit)
    }
}

#[derive(Debug, Serialize)]
struct StateJsonOut<'a> {
    version: u32,
    days: BTreeMap<CalendarDate, DayJsonOut<'a>>,
    companies: BTreeMap<&'a OrderNumber, &'a str>,
}

#[derive(Debug, Serialize)]
struct DayJsonOut<'a> {
    orders: &'a [OrderNumber],
    note: &'a str,
}

#[derive(Debug, Deserialize)]
struct StateJsonIn {
    #[serde(default)]
    days: BTreeMap<String, DayJsonIn>,
    #[serde(default)]
    companies: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct DayJsonIn {
    #[serde(default)]
    orders: Vec<String>,
    #[serde(default)]
    note: String,
}

/// The JSON state file holding one operator's schedule.
///
/// Layout (version 1):
///
/// ```json
/// { "version": 1,
///   "days": { "2024-05-03": { "orders": ["1001"], "note": "" } },
///   "companies": { "1001": "Acme" } }
/// ```
///
/// Empty days are never written. The older desktop layout
/// (`{"notes": {date: text}, "assignments": {date: [[number, company], ...]}}`) is accepted on
/// load.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
    durability: WriteDurability,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), durability: WriteDurability::default() }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the state file. A missing file is an empty schedule.
    pub fn load(&self) -> Result<Snapshot, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no state file yet; starting empty");
                return Ok(Snapshot::default());
            }
            Err(source) => return Err(StoreError::Io { path: self.path.clone(), source }),
        };
        let snapshot = self.parse(&raw)?;
        tracing::info!(
            path = %self.path.display(),
            days = snapshot.calendar.days().len(),
            "state file loaded"
        );
        Ok(snapshot)
    }

    /// Like [`Self::load`], but falls back to an empty schedule and hands the error back so
    /// the caller can surface it without ending the session.
    pub fn load_or_empty(&self) -> (Snapshot, Option<StoreError>) {
        match self.load() {
            Ok(snapshot) => (snapshot, None),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "state load failed; starting empty");
                (Snapshot::default(), Some(err))
            }
        }
    }

    /// Writes the session's schedule atomically.
    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        let calendar = session.calendar();
        let days = calendar
            .days()
            .iter()
            .map(|(date, day)| (*date, DayJsonOut { orders: day.orders(), note: day.note() }))
            .collect();
        let companies = calendar
            .referenced_orders()
            .into_iter()
            .filter_map(|number| {
                session.company_of(number.as_str()).map(|company| (number, company))
            })
            .collect();
        let state = StateJsonOut { version: STATE_FILE_VERSION, days, companies };

        let mut json = serde_json::to_string_pretty(&state)
            .map_err(|source| StoreError::Json { path: self.path.clone(), source })?;
        json.push('\n');
        write_atomic(&self.path, json.as_bytes(), self.durability)?;
        tracing::info!(path = %self.path.display(), days = calendar.days().len(), "state file saved");
        Ok(())
    }

    fn parse(&self, raw: &str) -> Result<Snapshot, StoreError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|source| StoreError::Json { path: self.path.clone(), source })?;
        let Value::Object(object) = &value else {
            return Err(StoreError::UnrecognizedLayout { path: self.path.clone() });
        };

        if let Some(version) = object.get("version") {
            let version = version.as_u64().unwrap_or(u64::MAX);
            if version > u64::from(STATE_FILE_VERSION) {
                return Err(StoreError::UnsupportedVersion { path: self.path.clone(), version });
            }
            let state: StateJsonIn = serde_json::from_value(value)
                .map_err(|source| StoreError::Json { path: self.path.clone(), source })?;
            return Ok(snapshot_from_current(state));
        }

        if object.is_empty() || object.contains_key("notes") || object.contains_key("assignments") {
            return Ok(snapshot_from_legacy(object));
        }

        Err(StoreError::UnrecognizedLayout { path: self.path.clone() })
    }
}

fn snapshot_from_current(state: StateJsonIn) -> Snapshot {
    let mut days = Vec::with_capacity(state.days.len());
    for (key, day) in state.days {
        let Some(date) = parse_date_key(&key) else {
            continue;
        };
        let orders = day.orders.into_iter().filter_map(|raw| parse_order_number(&raw));
        days.push((date, DayState::from_parts(orders, day.note)));
    }

    let companies = state
        .companies
        .into_iter()
        .filter_map(|(raw, company)| parse_order_number(&raw).map(|number| (number, company)))
        .collect();

    Snapshot { calendar: CalendarModel::from_days(days), companies }
}

// Extracted legacy-layout parsing and atomic write helpers for `StateFile`.
include!("state_file/helpers.rs");
