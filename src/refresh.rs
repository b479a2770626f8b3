// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Catalog refresh plumbing.
//!
//! Fetching runs off the UI thread on a tokio runtime. Each request carries a [`RefreshTicket`];
//! when the outcome arrives back on the UI thread only the most recently issued ticket is applied,
//! so a superseded refresh is discarded rather than cancelled mid-flight.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;

use crate::model::Order;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("cannot read order catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse order catalog {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Something that can produce the full, ordered order catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Order>, SourceError>;
}

/// Reads `[{"order_number": "...", "company": "..."}]` from a file.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn fetch(&self) -> Result<Vec<Order>, SourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io { path: self.path.clone(), source })?;
        serde_json::from_str(&raw).map_err(|source| SourceError::Json { path: self.path.clone(), source })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket(u64);

/// Issues tickets and decides which outcome is still wanted (last request wins).
#[derive(Debug, Clone, Default)]
pub struct RefreshTracker {
    latest: u64,
    in_flight: bool,
}

impl RefreshTracker {
    pub fn issue(&mut self) -> RefreshTicket {
        self.latest += 1;
        self.in_flight = true;
        RefreshTicket(self.latest)
    }

    /// `true` if `ticket` is the newest one issued. Accepting it ends the in-flight state.
    pub fn accept(&mut self, ticket: RefreshTicket) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        self.in_flight = false;
        true
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

#[derive(Debug)]
pub struct RefreshOutcome {
    pub ticket: RefreshTicket,
    pub result: Result<Vec<Order>, SourceError>,
}

/// Runs one fetch on `runtime` and sends exactly one [`RefreshOutcome`] to `tx`.
pub fn spawn_refresh(
    runtime: &tokio::runtime::Handle,
    source: Arc<dyn CatalogSource>,
    ticket: RefreshTicket,
    tx: UnboundedSender<RefreshOutcome>,
) -> tokio::task::JoinHandle<()> {
    runtime.spawn(async move {
        let result = source.fetch().await;
        match &result {
            Ok(orders) => tracing::info!(?ticket, orders = orders.len(), "catalog fetched"),
            Err(err) => tracing::warn!(?ticket, error = %err, "catalog fetch failed"),
        }
        // The receiver is gone only when the front end has shut down.
        let _ = tx.send(RefreshOutcome { ticket, result });
    })
}
