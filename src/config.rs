// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Runtime settings.
//!
//! Resolution order: built-in defaults, then `<config_dir>/printcal/config.toml`, then
//! `PRINTCAL_*` environment variables. CLI flags are applied on top by the binary.

use std::fs;
use std::io;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::store::WriteDurability;

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIR_NAME: &str = "printcal";

pub const DEFAULT_NOTE_IDLE: Duration = Duration::from_millis(1500);
pub const DEFAULT_SAVE_DEBOUNCE: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub state_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub durability: WriteDurability,
    pub history_limit: Option<NonZeroUsize>,
    pub note_idle: Duration,
    pub save_debounce: Duration,
    pub log_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            state_path: data_dir.join("state.json"),
            catalog_path: None,
            durability: WriteDurability::BestEffort,
            history_limit: None,
            note_idle: DEFAULT_NOTE_IDLE,
            save_debounce: DEFAULT_SAVE_DEBOUNCE,
            log_path: data_dir.join("printcal.log"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    state_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    durable_writes: Option<bool>,
    history_limit: Option<usize>,
    note_idle_ms: Option<u64>,
    save_debounce_ms: Option<u64>,
    log_path: Option<PathBuf>,
}

impl Settings {
    /// Defaults, overlaid with the user config file (if present) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        if let Some(path) = default_config_path() {
            settings.apply_file(&path)?;
        }
        settings.apply_env(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Overlays `path` when it exists. A missing file is not an error.
    pub fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(source) => return Err(ConfigError::Read { path: path.to_path_buf(), source }),
        };
        let file: SettingsFile = toml::from_str(&raw)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        self.apply_settings_file(file);
        Ok(())
    }

    fn apply_settings_file(&mut self, file: SettingsFile) {
        if let Some(path) = file.state_path {
            self.state_path = path;
        }
        if let Some(path) = file.catalog_path {
            self.catalog_path = Some(path);
        }
        if let Some(durable) = file.durable_writes {
            self.durability = durability_from_flag(durable);
        }
        if let Some(limit) = file.history_limit {
            // 0 means unbounded.
            self.history_limit = NonZeroUsize::new(limit);
        }
        if let Some(ms) = file.note_idle_ms {
            self.note_idle = Duration::from_millis(ms);
        }
        if let Some(ms) = file.save_debounce_ms {
            self.save_debounce = Duration::from_millis(ms);
        }
        if let Some(path) = file.log_path {
            self.log_path = path;
        }
    }

    /// Overlays `PRINTCAL_*` variables read through `var`.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(path) = var("PRINTCAL_STATE_PATH") {
            self.state_path = PathBuf::from(path);
        }
        if let Some(path) = var("PRINTCAL_CATALOG") {
            self.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = var("PRINTCAL_DURABLE_WRITES") {
            let durable = parse_bool(&raw).ok_or_else(|| ConfigError::InvalidValue {
                key: "PRINTCAL_DURABLE_WRITES".to_owned(),
                value: raw.clone(),
            })?;
            self.durability = durability_from_flag(durable);
        }
        if let Some(raw) = var("PRINTCAL_HISTORY_LIMIT") {
            let limit = raw.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                key: "PRINTCAL_HISTORY_LIMIT".to_owned(),
                value: raw.clone(),
            })?;
            self.history_limit = NonZeroUsize::new(limit);
        }
        if let Some(path) = var("PRINTCAL_LOG_PATH") {
            self.log_path = PathBuf::from(path);
        }
        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".printcal"))
        .unwrap_or_else(|| PathBuf::from(".printcal"))
}

fn durability_from_flag(durable: bool) -> WriteDurability {
    if durable {
        WriteDurability::Durable
    } else {
        WriteDurability::BestEffort
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::num::NonZeroUsize;
    use std::path::PathBuf;
    use std::time::Duration;

    use super::{ConfigError, Settings};
    use crate::store::WriteDurability;

    #[test]
    fn file_values_override_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "state_path = \"/tmp/sched.json\"\ndurable_writes = true\nhistory_limit = 100\nnote_idle_ms = 250\n",
        )
        .unwrap();

        let mut settings = Settings::default();
        settings.apply_file(&path).unwrap();
        assert_eq!(settings.state_path, PathBuf::from("/tmp/sched.json"));
        assert_eq!(settings.durability, WriteDurability::Durable);
        assert_eq!(settings.history_limit, NonZeroUsize::new(100));
        assert_eq!(settings.note_idle, Duration::from_millis(250));
    }

    #[test]
    fn missing_file_is_ignored_and_unknown_keys_are_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.apply_file(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());

        let path = tmp.path().join("bad.toml");
        std::fs::write(&path, "colour = \"blue\"\n").unwrap();
        assert!(matches!(settings.apply_file(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn env_overrides_and_validates() {
        let vars: HashMap<&str, &str> = [
            ("PRINTCAL_STATE_PATH", "/data/state.json"),
            ("PRINTCAL_HISTORY_LIMIT", "0"),
            ("PRINTCAL_DURABLE_WRITES", "yes"),
        ]
        .into_iter()
        .collect();
        let mut settings = Settings::default();
        settings.history_limit = NonZeroUsize::new(5);
        settings.apply_env(|key| vars.get(key).map(|v| (*v).to_owned())).unwrap();
        assert_eq!(settings.state_path, PathBuf::from("/data/state.json"));
        assert_eq!(settings.history_limit, None);
        assert_eq!(settings.durability, WriteDurability::Durable);

        let err = settings
            .apply_env(|key| (key == "PRINTCAL_DURABLE_WRITES").then(|| "maybe".to_owned()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
