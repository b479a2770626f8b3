// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence of the schedule on disk.
//!
//! The store module reads/writes the JSON state file (day assignments, notes, and remembered
//! company names) used by the TUI and the CLI.

pub mod state_file;

pub use state_file::{Snapshot, StateFile, StoreError, WriteDurability, STATE_FILE_VERSION};
