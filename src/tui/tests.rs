// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tempfile::TempDir;

use super::{draw, footer_line, App, Pane};
use crate::model::{CalendarDate, Order, OrderNumber, Session};
use crate::store::StateFile;

fn date(day: u32) -> CalendarDate {
    CalendarDate::from_ymd(2024, 5, day).expect("date")
}

fn num(value: &str) -> OrderNumber {
    OrderNumber::new(value).expect("order number")
}

fn app() -> (App, TempDir) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut session = Session::new(None);
    session.replace_catalog([
        Order::new(num("1001"), "Acme"),
        Order::new(num("1002"), "Beta"),
        Order::new(num("1003"), "Gamma"),
    ]);
    let store = StateFile::new(tmp.path().join("state.json"));
    (App::new(session, store, date(3)), tmp)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
}

fn ctrl(app: &mut App, ch: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL), Instant::now());
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn orders_on(app: &App, day: CalendarDate) -> Vec<&str> {
    app.session.day(day).orders().iter().map(OrderNumber::as_str).collect()
}

fn line_to_string(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

#[test]
fn marking_and_carrying_drops_one_batch() {
    let (mut app, _tmp) = app();
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.focus, Pane::Calendar);

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    assert_eq!(orders_on(&app, date(4)), ["1001", "1003"]);
    assert!(app.highlighted.is_empty());
    assert!(app.carry.is_none());
    assert_eq!(app.session.history().undo_depth(), 1);

    ctrl(&mut app, 'z');
    assert!(app.session.day(date(4)).orders().is_empty());
    ctrl(&mut app, 'y');
    assert_eq!(orders_on(&app, date(4)), ["1001", "1003"]);
}

#[test]
fn filter_narrows_the_order_list() {
    let (mut app, _tmp) = app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "BETA");
    press(&mut app, KeyCode::Enter);
    assert!(!app.filter_editing);

    let visible: Vec<&str> =
        app.visible_orders().iter().map(|order| order.order_number().as_str()).collect();
    assert_eq!(visible, ["1002"]);

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert_eq!(orders_on(&app, date(3)), ["1002"]);
}

#[test]
fn details_pane_removes_marked_rows_and_moves_between_days() {
    let (mut app, _tmp) = app();
    for _ in 0..3 {
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(orders_on(&app, date(3)), ["1001", "1002", "1003"]);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.focus, Pane::Details);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Delete);
    assert_eq!(orders_on(&app, date(3)), ["1001", "1003"]);

    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.focus, Pane::Calendar);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(orders_on(&app, date(3)), ["1001"]);
    assert_eq!(orders_on(&app, date(10)), ["1003"]);
    assert!(app.controller.status().message.starts_with("Moved order 1003 (Gamma)"));
}

#[test]
fn delete_on_calendar_clears_the_day() {
    let (mut app, _tmp) = app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert_eq!(orders_on(&app, date(3)), ["1001"]);

    press(&mut app, KeyCode::Delete);
    assert!(app.session.day(date(3)).orders().is_empty());
    assert_eq!(app.controller.status().message, "Cleared 1 order from May 03, 2024.");
}

#[test]
fn note_typing_is_one_undo_step() {
    let (mut app, _tmp) = app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.focus, Pane::Note);
    type_text(&mut app, "rush job");
    assert_eq!(app.session.day(date(3)).note(), "");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.focus, Pane::Calendar);
    assert_eq!(app.session.day(date(3)).note(), "rush job");
    assert_eq!(app.session.history().undo_depth(), 1);
}

#[test]
fn month_keys_move_the_visible_month() {
    let (mut app, _tmp) = app();
    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.controller.cursor().label(), "June 2024");
    press(&mut app, KeyCode::Char('['));
    press(&mut app, KeyCode::Char('['));
    assert_eq!(app.controller.cursor().label(), "April 2024");
    assert!(!app.session.can_undo());
}

#[test]
fn refresh_without_catalog_source_shows_hint() {
    let (mut app, _tmp) = app();
    press(&mut app, KeyCode::Char('r'));
    let footer = line_to_string(&footer_line(&app));
    assert!(footer.contains("--catalog"));
}

#[test]
fn quit_flushes_pending_changes() {
    let (mut app, tmp) = app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);

    assert!(app.shutdown(Instant::now()));
    let snapshot = StateFile::new(tmp.path().join("state.json")).load().expect("load");
    assert!(snapshot.calendar.day(date(3)).contains("1001"));
}

#[test]
fn draw_renders_month_details_and_status() {
    let (mut app, _tmp) = app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    let mut terminal = Terminal::new(TestBackend::new(140, 30)).expect("terminal");
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");

    let buffer = terminal.backend().buffer();
    let rendered: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
    assert!(rendered.contains("May 2024"));
    assert!(rendered.contains("May 03, 2024"));
    assert!(rendered.contains("1001 - Acme"));
    assert!(rendered.contains("Assigned order 1001 (Acme) to May 03, 2024."));
}
