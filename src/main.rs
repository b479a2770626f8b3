// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


//! Printcal CLI entrypoint.
//!
//! By default this runs the interactive TUI against the schedule state file. `show` prints one
//! month of the schedule and `check` validates the state file without modifying it.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use printcal::config::Settings;
use printcal::model::{MonthCursor, Session};
use printcal::query::assignment_label;
use printcal::refresh::{CatalogSource, JsonFileCatalog};
use printcal::store::{StateFile, WriteDurability};
use printcal::tui::{self, TuiOptions};

#[derive(Debug, Parser)]
#[command(name = "printcal", version)]
#[command(about = "Schedule print orders onto calendar days", long_about = None)]
struct Cli {
    /// Schedule state file (default: ~/.printcal/state.json)
    #[arg(long, value_name = "PATH")]
    state: Option<PathBuf>,
    /// JSON order catalog used for refreshes
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,
    /// Fsync state writes before reporting them saved
    #[arg(long)]
    durable_writes: bool,
    /// Maximum undo depth (0 = unbounded)
    #[arg(long, value_name = "N")]
    history_limit: Option<usize>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Commands {
    /// Interactive calendar (default)
    Tui,
    /// Print the schedule for one month
    Show {
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<MonthCursor>,
    },
    /// Load the state file and report what it contains
    Check,
}

fn settings_for(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = Settings::load().context("loading configuration")?;
    if let Some(path) = &cli.state {
        settings.state_path = path.clone();
    }
    if let Some(path) = &cli.catalog {
        settings.catalog_path = Some(path.clone());
    }
    if cli.durable_writes {
        settings.durability = WriteDurability::Durable;
    }
    if let Some(limit) = cli.history_limit {
        settings.history_limit = std::num::NonZeroUsize::new(limit);
    }
    Ok(settings)
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env("PRINTCAL_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default))
}

/// The TUI owns the terminal, so logs go to a file there and to stderr otherwise.
fn init_logging(log_path: Option<&Path>) {
    let builder = tracing_subscriber::fmt().with_target(false);
    let Some(path) = log_path else {
        builder.with_env_filter(env_filter("warn")).with_writer(std::io::stderr).init();
        return;
    };
    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| OpenOptions::new().create(true).append(true).open(path));
    match file {
        Ok(file) => builder
            .with_env_filter(env_filter("info"))
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(_) => builder.with_env_filter(env_filter("off")).with_writer(std::io::sink).init(),
    }
}

fn load_catalog(session: &mut Session, path: &Path) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let orders = runtime
        .block_on(JsonFileCatalog::new(path).fetch())
        .with_context(|| format!("loading order catalog {}", path.display()))?;
    session.replace_catalog(orders);
    Ok(())
}

fn show(settings: &Settings, month: MonthCursor) -> anyhow::Result<ExitCode> {
    let store = StateFile::new(&settings.state_path);
    let mut session = store.load()?.into_session(settings.history_limit);
    if let Some(path) = &settings.catalog_path {
        load_catalog(&mut session, path)?;
    }

    println!("{}", month.label());
    let first = month.first_day();
    let last = month.next().first_day().offset_days(-1);
    let mut any = false;
    for (date, day) in session.calendar().days_between(first..=last) {
        any = true;
        let labels: Vec<String> = day
            .orders()
            .iter()
            .map(|number| assignment_label(&session, number).to_string())
            .collect();
        println!("{date}  {}", labels.join(", "));
        for line in day.note().lines() {
            println!("            note: {line}");
        }
    }
    if !any {
        println!("No orders scheduled.");
    }
    Ok(ExitCode::SUCCESS)
}

fn check(settings: &Settings) -> anyhow::Result<ExitCode> {
    let store = StateFile::new(&settings.state_path);
    let snapshot = match store.load() {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("printcal: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };
    let days = snapshot.calendar.days();
    let assignments: usize = days.values().map(|day| day.orders().len()).sum();
    let notes = days.values().filter(|day| !day.note().is_empty()).count();
    println!(
        "{}: {} days, {assignments} assignments, {notes} notes",
        store.path().display(),
        days.len()
    );

    if let Some(path) = &settings.catalog_path {
        let mut session = snapshot.into_session(settings.history_limit);
        load_catalog(&mut session, path)?;
        let orphans = session.orphaned_orders();
        if !orphans.is_empty() {
            let list: Vec<&str> = orphans.iter().map(|number| number.as_str()).collect();
            println!("not in catalog: {}", list.join(", "));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_tui(settings: Settings) -> anyhow::Result<ExitCode> {
    let store = StateFile::new(&settings.state_path).with_durability(settings.durability);
    let (snapshot, load_error) = store.load_or_empty();
    let session = snapshot.into_session(settings.history_limit);
    let source = settings
        .catalog_path
        .map(|path| Arc::new(JsonFileCatalog::new(path)) as Arc<dyn CatalogSource>);

    tui::run(
        session,
        load_error,
        TuiOptions {
            store,
            source,
            note_idle: settings.note_idle,
            save_debounce: settings.save_debounce,
        },
    )?;
    Ok(ExitCode::SUCCESS)
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = settings_for(&cli)?;
    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            init_logging(Some(&settings.log_path));
            tracing::info!(state = %settings.state_path.display(), "starting printcal");
            run_tui(settings)
        }
        Commands::Show { month } => {
            init_logging(None);
            show(&settings, month.unwrap_or_else(MonthCursor::current))
        }
        Commands::Check => {
            init_logging(None);
            check(&settings)
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("printcal: {err:#}");
            ExitCode::FAILURE
        }
    }
}
