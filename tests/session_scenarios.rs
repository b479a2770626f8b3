// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use printcal::interaction::{DragSource, Interaction, InteractionController};
use printcal::model::{CalendarDate, Order, OrderNumber, Session};
use printcal::query::assignment_label;
use printcal::refresh::{CatalogSource, JsonFileCatalog};
use printcal::store::StateFile;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("session_scenarios")
}

fn read_catalog(name: &str) -> Vec<Order> {
    let source = JsonFileCatalog::new(fixtures_dir().join(name));
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime");
    runtime
        .block_on(source.fetch())
        .unwrap_or_else(|err| panic!("failed to read catalog {name}: {err}"))
}

fn may(day: u32) -> CalendarDate {
    CalendarDate::from_ymd(2024, 5, day).expect("date")
}

fn num(value: &str) -> OrderNumber {
    OrderNumber::new(value).expect("order number")
}

fn orders_on(session: &Session, day: CalendarDate) -> Vec<&str> {
    session.day(day).orders().iter().map(OrderNumber::as_str).collect()
}

#[test]
fn filter_is_case_insensitive_over_number_and_company() {
    let mut session = Session::new(None);
    session.replace_catalog(read_catalog("catalog.json"));

    let numbers = |query: &str| -> Vec<String> {
        session
            .filtered_orders(query)
            .iter()
            .map(|order| order.order_number().to_string())
            .collect()
    };
    assert_eq!(numbers("acme"), ["1001", "1003"]);
    assert_eq!(numbers("ACME SIGNS"), ["1003"]);
    assert_eq!(numbers("100"), ["1001", "1002", "1003"]);
    assert!(numbers("zeta").is_empty());
}

#[test]
fn assignment_survives_save_and_reload() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = StateFile::new(tmp.path().join("state.json"));
    let mut session = Session::new(None);
    session.replace_catalog(read_catalog("catalog.json"));
    let mut controller = InteractionController::new(may(3));
    let now = Instant::now();

    controller.handle(
        &mut session,
        Interaction::Drop { selection: vec![num("1001")], target: may(3), source: DragSource::Catalog },
        now,
    );
    controller.handle(
        &mut session,
        Interaction::NoteEdit { date: may(3), text: "rush".to_owned(), complete: true },
        now,
    );
    assert!(controller.flush(&session, &store, now));

    let reloaded = store.load().expect("load").into_session(None);
    assert_eq!(orders_on(&reloaded, may(3)), ["1001"]);
    assert_eq!(reloaded.day(may(3)).note(), "rush");
    assert!(!reloaded.can_undo());
    assert_eq!(assignment_label(&reloaded, &num("1001")).to_string(), "1001 - Acme (not in catalog)");
}

#[test]
fn refresh_that_drops_a_scheduled_order_keeps_it_and_history() {
    let mut session = Session::new(None);
    session.replace_catalog(read_catalog("catalog.json"));
    let mut controller = InteractionController::new(may(3));
    controller.handle(
        &mut session,
        Interaction::Drop {
            selection: vec![num("1001"), num("1002")],
            target: may(3),
            source: DragSource::Catalog,
        },
        Instant::now(),
    );

    session.replace_catalog(read_catalog("catalog_without_1001.json"));

    assert!(session.day(may(3)).contains("1001"));
    assert!(session.can_undo());
    assert_eq!(session.orphaned_orders(), vec![&num("1001")]);
    assert_eq!(
        assignment_label(&session, &num("1001")).to_string(),
        "1001 - Acme (not in catalog)"
    );

    controller.handle(&mut session, Interaction::MenuUndo, Instant::now());
    assert!(session.day(may(3)).orders().is_empty());
}

#[test]
fn desktop_state_file_is_imported_and_rewritten_in_current_layout() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("state.json");
    fs::copy(fixtures_dir().join("desktop_state.json"), &path).expect("copy fixture");
    let store = StateFile::new(&path);

    let session = store.load().expect("load legacy").into_session(None);
    assert_eq!(orders_on(&session, may(3)), ["1001", "1002"]);
    assert_eq!(session.day(may(3)).note(), "Press 2 only");
    assert_eq!(orders_on(&session, may(6)), ["1003"]);
    assert_eq!(session.company_of("1003"), Some("Acme Signs"));

    store.save(&session).expect("save");
    let raw = fs::read_to_string(&path).expect("read");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(json["version"], 1);
    assert_eq!(json["days"]["2024-05-06"]["orders"][0], "1003");
    assert_eq!(json["companies"]["1001"], "Acme");

    let again = store.load().expect("reload").into_session(None);
    assert_eq!(again.calendar(), session.calendar());
}
