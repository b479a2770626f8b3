// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


//! Terminal UI.
//!
//! A ratatui + crossterm shell around the [`InteractionController`]: order list with filter and
//! multi-highlight, month grid, and day details with note editing. Drag-and-drop becomes a
//! keyboard "carry": pick orders up (`m`), move to a day, and drop them there (`Enter`).

use std::collections::BTreeSet;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use crate::interaction::{
    DragSource, FocusContext, Interaction, InteractionController, MonthStep, StatusLight,
};
use crate::model::{CalendarDate, Order, OrderNumber, Session};
use crate::query::assignment_label;
use crate::refresh::{spawn_refresh, CatalogSource, RefreshOutcome};
use crate::store::{StateFile, StoreError};

mod theme;

use theme::TuiTheme;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const WEEKDAY_HEADER: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Everything the TUI needs besides the session itself.
pub struct TuiOptions {
    pub store: StateFile,
    pub source: Option<Arc<dyn CatalogSource>>,
    pub note_idle: Duration,
    pub save_debounce: Duration,
}

/// Runs the interactive terminal UI until the operator quits, then saves pending changes.
pub fn run(session: Session, load_error: Option<StoreError>, options: TuiOptions) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("printcal-refresh")
        .enable_all()
        .build()?;

    let mut app = App::new(session, options.store, CalendarDate::today())
        .with_timing(options.note_idle, options.save_debounce);
    match TuiTheme::from_env() {
        Ok(theme) => app.theme = theme,
        Err(err) => tracing::warn!(error = %err, "ignoring palette override"),
    }
    if let Some(err) = load_error {
        app.controller.report_load_error(&err);
    }
    if let Some(source) = options.source {
        app.attach_refresh(RefreshWorker::new(runtime.handle().clone(), source));
        app.request_refresh();
    }

    let mut terminal = TerminalSession::new()?;
    while !app.should_quit {
        app.on_tick(Instant::now());
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key, Instant::now());
                }
            }
        }
    }
    drop(terminal);

    if !app.shutdown(Instant::now()) {
        anyhow::bail!("{}", app.controller.status().message);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Orders,
    Calendar,
    Details,
    Note,
}

impl Pane {
    fn next(self) -> Self {
        match self {
            Self::Orders => Self::Calendar,
            Self::Calendar => Self::Details,
            Self::Details | Self::Note => Self::Orders,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Orders => Self::Details,
            Self::Calendar | Self::Note => Self::Orders,
            Self::Details => Self::Calendar,
        }
    }
}

/// Orders picked up for a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Carry {
    orders: Vec<OrderNumber>,
    source: DragSource,
}

struct RefreshWorker {
    runtime: tokio::runtime::Handle,
    source: Arc<dyn CatalogSource>,
    tx: UnboundedSender<RefreshOutcome>,
    rx: UnboundedReceiver<RefreshOutcome>,
}

impl RefreshWorker {
    fn new(runtime: tokio::runtime::Handle, source: Arc<dyn CatalogSource>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { runtime, source, tx, rx }
    }
}

struct App {
    session: Session,
    controller: InteractionController,
    store: StateFile,
    theme: TuiTheme,
    refresh: Option<RefreshWorker>,
    focus: Pane,
    filter: String,
    filter_editing: bool,
    orders_state: ListState,
    highlighted: BTreeSet<OrderNumber>,
    details_state: ListState,
    details_selected: BTreeSet<OrderNumber>,
    note_text: String,
    carry: Option<Carry>,
    hint: Option<String>,
    should_quit: bool,
}

impl App {
    fn new(session: Session, store: StateFile, today: CalendarDate) -> Self {
        Self {
            session,
            controller: InteractionController::new(today),
            store,
            theme: TuiTheme::default(),
            refresh: None,
            focus: Pane::Orders,
            filter: String::new(),
            filter_editing: false,
            orders_state: ListState::default().with_selected(Some(0)),
            highlighted: BTreeSet::new(),
            details_state: ListState::default(),
            details_selected: BTreeSet::new(),
            note_text: String::new(),
            carry: None,
            hint: None,
            should_quit: false,
        }
    }

    fn with_timing(mut self, note_idle: Duration, save_debounce: Duration) -> Self {
        self.controller = self.controller.with_timing(note_idle, save_debounce);
        self
    }

    fn attach_refresh(&mut self, worker: RefreshWorker) {
        self.refresh = Some(worker);
    }

    fn request_refresh(&mut self) {
        let Some(worker) = &self.refresh else {
            self.hint = Some("No order catalog configured (--catalog)".to_owned());
            return;
        };
        let ticket = self.controller.begin_refresh();
        spawn_refresh(&worker.runtime, Arc::clone(&worker.source), ticket, worker.tx.clone());
    }

    /// Idle work between key events: note timeout, refresh results, debounced save.
    fn on_tick(&mut self, now: Instant) {
        self.controller.tick(&mut self.session, now);
        self.drain_refresh();
        if self.controller.flush_due(now) {
            self.controller.flush(&self.session, &self.store, now);
        }
    }

    fn drain_refresh(&mut self) {
        let Some(worker) = &mut self.refresh else {
            return;
        };
        loop {
            match worker.rx.try_recv() {
                Ok(outcome) => {
                    let at = chrono::Local::now().naive_local();
                    self.controller.complete_refresh(&mut self.session, outcome, at);
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        self.clamp_orders_cursor();
    }

    fn shutdown(&mut self, now: Instant) -> bool {
        self.controller.shutdown(&mut self.session, &self.store, now)
    }

    fn focused_day(&self) -> CalendarDate {
        self.controller.focused_day()
    }

    fn visible_orders(&self) -> Vec<&Order> {
        self.session.filtered_orders(&self.filter)
    }

    fn cursor_order(&self) -> Option<OrderNumber> {
        let index = self.orders_state.selected()?;
        self.visible_orders().get(index).map(|order| order.order_number().clone())
    }

    fn cursor_row(&self) -> Option<OrderNumber> {
        let index = self.details_state.selected()?;
        self.session.day(self.focused_day()).orders().get(index).cloned()
    }

    fn clamp_orders_cursor(&mut self) {
        let len = self.visible_orders().len();
        let selected = match (len, self.orders_state.selected()) {
            (0, _) => None,
            (len, Some(index)) => Some(index.min(len - 1)),
            (_, None) => Some(0),
        };
        self.orders_state.select(selected);
    }

    fn clamp_details_cursor(&mut self) {
        let day = self.session.day(self.focused_day());
        self.details_selected.retain(|number| day.contains(number.as_str()));
        let len = day.orders().len();
        let selected = match (len, self.details_state.selected()) {
            (0, _) => None,
            (len, Some(index)) => Some(index.min(len - 1)),
            (_, None) => Some(0),
        };
        self.details_state.select(selected);
    }

    fn interact(&mut self, event: Interaction, now: Instant) {
        self.controller.handle(&mut self.session, event, now);
        self.clamp_details_cursor();
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        self.hint = None;
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('z') => return self.history_step(Interaction::MenuUndo, now),
                KeyCode::Char('y') => return self.history_step(Interaction::MenuRedo, now),
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                _ => {}
            }
        }

        match self.focus {
            Pane::Note => self.handle_note_key(key.code, now),
            Pane::Orders if self.filter_editing => self.handle_filter_key(key.code),
            _ => self.handle_browse_key(key.code, now),
        }
    }

    fn history_step(&mut self, event: Interaction, now: Instant) {
        self.interact(event, now);
        if self.focus == Pane::Note {
            self.note_text = self.session.day(self.focused_day()).note().to_owned();
        }
    }

    fn set_focus(&mut self, pane: Pane, now: Instant) {
        if self.focus == Pane::Note && pane != Pane::Note {
            self.interact(Interaction::NoteFocusLost, now);
        }
        self.focus = pane;
    }

    fn focus_day(&mut self, date: CalendarDate, now: Instant) {
        if date != self.focused_day() {
            self.details_selected.clear();
            self.details_state.select(None);
        }
        self.interact(Interaction::Focus(date), now);
    }

    fn handle_browse_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.set_focus(self.focus.next(), now),
            KeyCode::BackTab => self.set_focus(self.focus.previous(), now),
            KeyCode::Char('[') => self.navigate(MonthStep::Previous, now),
            KeyCode::Char(']') => self.navigate(MonthStep::Next, now),
            KeyCode::Char('t') => self.navigate(MonthStep::Today, now),
            KeyCode::Char('r') => self.request_refresh(),
            KeyCode::Char('n') => self.begin_note(),
            KeyCode::Esc => {
                self.carry = None;
                self.highlighted.clear();
                self.details_selected.clear();
            }
            _ => match self.focus {
                Pane::Orders => self.handle_orders_key(code),
                Pane::Calendar => self.handle_calendar_key(code, now),
                Pane::Details => self.handle_details_key(code, now),
                Pane::Note => {}
            },
        }
    }

    fn navigate(&mut self, step: MonthStep, now: Instant) {
        self.details_selected.clear();
        self.details_state.select(None);
        self.interact(Interaction::Navigate(step), now);
    }

    fn handle_orders_key(&mut self, code: KeyCode) {
        let len = self.visible_orders().len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                let index = self.orders_state.selected().unwrap_or(0);
                self.orders_state.select((len > 0).then(|| index.saturating_sub(1)));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let index = self.orders_state.selected().map_or(0, |i| i + 1);
                self.orders_state.select((len > 0).then(|| index.min(len - 1)));
            }
            KeyCode::Char(' ') => {
                if let Some(number) = self.cursor_order() {
                    if !self.highlighted.remove(&number) {
                        self.highlighted.insert(number);
                    }
                }
            }
            KeyCode::Char('/') => self.filter_editing = true,
            KeyCode::Char('m') | KeyCode::Enter => self.pick_up_from_catalog(),
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Enter => self.filter_editing = false,
            KeyCode::Backspace => {
                self.filter.pop();
            }
            KeyCode::Char(ch) => self.filter.push(ch),
            _ => return,
        }
        self.clamp_orders_cursor();
    }

    /// Highlighted orders in catalog order, or the order under the cursor.
    fn pick_up_from_catalog(&mut self) {
        let mut orders: Vec<OrderNumber> = self
            .session
            .catalog()
            .orders()
            .iter()
            .map(Order::order_number)
            .filter(|number| self.highlighted.contains(*number))
            .cloned()
            .collect();
        if orders.is_empty() {
            orders.extend(self.cursor_order());
        }
        self.carry_orders(orders, DragSource::Catalog);
    }

    fn carry_orders(&mut self, orders: Vec<OrderNumber>, source: DragSource) {
        if orders.is_empty() {
            self.hint = Some("Nothing selected".to_owned());
            return;
        }
        let count = orders.len();
        self.carry = Some(Carry { orders, source });
        self.focus = Pane::Calendar;
        self.hint = Some(format!(
            "Carrying {count} order{}: pick a day and press Enter",
            if count == 1 { "" } else { "s" }
        ));
    }

    fn handle_calendar_key(&mut self, code: KeyCode, now: Instant) {
        let day = self.focused_day();
        match code {
            KeyCode::Left | KeyCode::Char('h') => self.focus_day(day.offset_days(-1), now),
            KeyCode::Right | KeyCode::Char('l') => self.focus_day(day.offset_days(1), now),
            KeyCode::Up | KeyCode::Char('k') => self.focus_day(day.offset_days(-7), now),
            KeyCode::Down | KeyCode::Char('j') => self.focus_day(day.offset_days(7), now),
            KeyCode::Enter => match self.carry.take() {
                Some(carry) => {
                    self.interact(
                        Interaction::Drop { selection: carry.orders, target: day, source: carry.source },
                        now,
                    );
                    self.highlighted.clear();
                }
                None => self.focus = Pane::Details,
            },
            KeyCode::Delete | KeyCode::Backspace => {
                self.interact(Interaction::KeyDelete(FocusContext::DayHeader(day)), now);
            }
            _ => {}
        }
    }

    fn handle_details_key(&mut self, code: KeyCode, now: Instant) {
        let date = self.focused_day();
        let len = self.session.day(date).orders().len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                let index = self.details_state.selected().unwrap_or(0);
                self.details_state.select((len > 0).then(|| index.saturating_sub(1)));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let index = self.details_state.selected().map_or(0, |i| i + 1);
                self.details_state.select((len > 0).then(|| index.min(len - 1)));
            }
            KeyCode::Char(' ') => {
                if let Some(number) = self.cursor_row() {
                    if !self.details_selected.remove(&number) {
                        self.details_selected.insert(number);
                    }
                }
            }
            KeyCode::Delete | KeyCode::Backspace => {
                let orders = self.selected_rows();
                let context = if orders.is_empty() {
                    FocusContext::None
                } else {
                    FocusContext::DayRows { date, orders }
                };
                self.interact(Interaction::KeyDelete(context), now);
            }
            KeyCode::Char('x') => {
                let orders = self.selected_rows();
                self.interact(Interaction::DialogRemoveSelected { date, orders }, now);
            }
            KeyCode::Char('c') => self.interact(Interaction::DialogClearDay(date), now),
            KeyCode::Char('m') => {
                let orders = self.selected_rows();
                self.details_selected.clear();
                self.carry_orders(orders, DragSource::Day(date));
            }
            _ => {}
        }
    }

    /// Marked rows in display order, or the row under the cursor.
    fn selected_rows(&self) -> Vec<OrderNumber> {
        let day = self.session.day(self.focused_day());
        let marked: Vec<OrderNumber> = day
            .orders()
            .iter()
            .filter(|number| self.details_selected.contains(*number))
            .cloned()
            .collect();
        if marked.is_empty() {
            self.cursor_row().into_iter().collect()
        } else {
            marked
        }
    }

    fn begin_note(&mut self) {
        let date = self.focused_day();
        self.note_text = self.controller.visible_note(&self.session, date).to_owned();
        self.focus = Pane::Note;
    }

    fn handle_note_key(&mut self, code: KeyCode, now: Instant) {
        let date = self.focused_day();
        let complete = match code {
            KeyCode::Esc => true,
            KeyCode::Enter => {
                self.note_text.push('\n');
                false
            }
            KeyCode::Backspace => {
                self.note_text.pop();
                false
            }
            KeyCode::Char(ch) => {
                self.note_text.push(ch);
                false
            }
            _ => return,
        };
        let text = self.note_text.clone();
        self.interact(Interaction::NoteEdit { date, text, complete }, now);
        if complete {
            self.focus = Pane::Calendar;
        }
    }
}

// Panel, status line and footer rendering.
include!("chrome.rs");

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).inspect_err(|_| teardown_terminal())?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).inspect_err(|_| teardown_terminal())?;
        terminal.clear().inspect_err(|_| teardown_terminal())?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests;
