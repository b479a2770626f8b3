// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Legacy-layout parsing and atomic write helpers used by `StateFile`.
fn parse_date_key(raw: &str) -> Option<CalendarDate> {
    match raw.parse::<CalendarDate>() {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::warn!(key = raw, error = %err, "skipping state entry with invalid date");
            None
        }
    }
}

fn parse_order_number(raw: &str) -> Option<OrderNumber> {
    match OrderNumber::new(raw) {
        Ok(number) => Some(number),
        Err(err) => {
            tracing::warn!(value = raw, error = %err, "skipping invalid order number");
            None
        }
    }
}

/// Reads `{"notes": {date: text}, "assignments": {date: [[number, company], ...]}}`.
///
/// Assignment entries may also be bare strings (number only). Malformed entries are skipped.
fn snapshot_from_legacy(object: &serde_json::Map<String, Value>) -> Snapshot {
    let mut days: BTreeMap<CalendarDate, (Vec<OrderNumber>, String)> = BTreeMap::new();
    let mut companies = BTreeMap::new();

    if let Some(Value::Object(notes)) = object.get("notes") {
        for (key, value) in notes {
            let (Some(date), Value::String(text)) = (parse_date_key(key), value) else {
                continue;
            };
            // The desktop app never stored whitespace-only notes.
            if text.trim().is_empty() {
                continue;
            }
            days.entry(date).or_default().1 = text.clone();
        }
    }

    if let Some(Value::Object(assignments)) = object.get("assignments") {
        for (key, value) in assignments {
            let (Some(date), Value::Array(entries)) = (parse_date_key(key), value) else {
                continue;
            };
            for entry in entries {
                let (raw_number, company) = match entry {
                    Value::String(number) => (number.as_str(), None),
                    Value::Array(parts) => (
                        parts.first().and_then(Value::as_str).unwrap_or_default(),
                        parts.get(1).and_then(Value::as_str),
                    ),
                    _ => continue,
                };
                let Some(number) = parse_order_number(raw_number) else {
                    continue;
                };
                if let Some(company) = company.map(str::trim).filter(|c| !c.is_empty()) {
                    companies.insert(number.clone(), company.to_owned());
                }
                days.entry(date).or_default().0.push(number);
            }
        }
    }

    let days = days
        .into_iter()
        .map(|(date, (orders, note))| (date, DayState::from_parts(orders, note)));
    Snapshot { calendar: CalendarModel::from_days(days), companies }
}

fn write_atomic(path: &Path, contents: &[u8], durability: WriteDurability) -> Result<(), StoreError> {
    let Some(parent) = path.parent() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no parent"),
        });
    };
    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };
    let parent = if parent.as_os_str().is_empty() { Path::new(".") } else { parent };

    fs::create_dir_all(parent).map_err(|source| StoreError::Io {
        path: parent.to_path_buf(),
        source,
    })?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".printcal.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    write_temp_file(&tmp_path, |file| {
        file.write_all(contents)?;
        if durability == WriteDurability::Durable {
            file.sync_all()?;
        }
        Ok(())
    })?;

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
            dir.sync_all().map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}

/// Creates `tmp_path` and hands it to `fill`. The file is removed again when `fill` fails.
fn write_temp_file(
    tmp_path: &Path,
    fill: impl FnOnce(&mut fs::File) -> io::Result<()>,
) -> Result<(), StoreError> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.to_path_buf(),
            source,
        })?;

    if let Err(source) = fill(&mut file) {
        drop(file);
        let _ = fs::remove_file(tmp_path);
        return Err(StoreError::Io {
            path: tmp_path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}
