// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


//! Gesture-to-command translation.
//!
//! The [`InteractionController`] is the only writer of the schedule: every front-end gesture is
//! turned into at most one [`Command`] submission against the [`Session`], and the controller
//! keeps the view state (visible month, focused day, in-progress note, status line) that is
//! deliberately kept out of undo history.

use std::time::{Duration, Instant};

use chrono::NaiveDateTime;

use crate::config::{DEFAULT_NOTE_IDLE, DEFAULT_SAVE_DEBOUNCE};
use crate::model::{CalendarDate, MonthCursor, OrderNumber, Session};
use crate::ops::Command;
use crate::refresh::{RefreshOutcome, RefreshTicket, RefreshTracker};
use crate::store::StateFile;

pub mod messages;

/// Where the dragged selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    Catalog,
    Day(CalendarDate),
}

/// What had keyboard focus when Delete was pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusContext {
    DayHeader(CalendarDate),
    DayRows { date: CalendarDate, orders: Vec<OrderNumber> },
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Previous,
    Today,
    Next,
}

/// Front-end gestures the controller understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Drop { selection: Vec<OrderNumber>, target: CalendarDate, source: DragSource },
    KeyDelete(FocusContext),
    NoteEdit { date: CalendarDate, text: String, complete: bool },
    NoteFocusLost,
    DialogRemoveSelected { date: CalendarDate, orders: Vec<OrderNumber> },
    DialogClearDay(CalendarDate),
    MenuUndo,
    MenuRedo,
    Navigate(MonthStep),
    Focus(CalendarDate),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusLight {
    #[default]
    Idle,
    Pending,
    Ok,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub light: StatusLight,
    pub message: String,
    pub last_refresh: Option<NaiveDateTime>,
    pub stale: bool,
}

impl Status {
    /// "Last updated: 2024-05-03 09:15:00", suffixed with "(stale)" after a failed refresh.
    pub fn last_refresh_label(&self) -> Option<String> {
        let at = self.last_refresh?;
        let mut label = format!("Last updated: {}", at.format("%Y-%m-%d %H:%M:%S"));
        if self.stale {
            label.push_str(" (stale)");
        }
        Some(label)
    }
}

#[derive(Debug, Clone)]
struct NoteDraft {
    date: CalendarDate,
    text: String,
    edited_at: Instant,
}

#[derive(Debug, Clone)]
pub struct InteractionController {
    cursor: MonthCursor,
    focused: CalendarDate,
    draft: Option<NoteDraft>,
    status: Status,
    dirty_since: Option<Instant>,
    refresh: RefreshTracker,
    note_idle: Duration,
    save_debounce: Duration,
}

impl InteractionController {
    pub fn new(today: CalendarDate) -> Self {
        Self {
            cursor: MonthCursor::containing(today),
            focused: today,
            draft: None,
            status: Status::default(),
            dirty_since: None,
            refresh: RefreshTracker::default(),
            note_idle: DEFAULT_NOTE_IDLE,
            save_debounce: DEFAULT_SAVE_DEBOUNCE,
        }
    }

    pub fn with_timing(mut self, note_idle: Duration, save_debounce: Duration) -> Self {
        self.note_idle = note_idle;
        self.save_debounce = save_debounce;
        self
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn focused_day(&self) -> CalendarDate {
        self.focused
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty_since.is_some()
    }

    pub fn refresh_in_flight(&self) -> bool {
        self.refresh.in_flight()
    }

    /// Note text to display for `date`: the in-progress draft if one is open, else the saved note.
    pub fn visible_note<'a>(&'a self, session: &'a Session, date: CalendarDate) -> &'a str {
        match &self.draft {
            Some(draft) if draft.date == date => &draft.text,
            _ => session.day(date).note(),
        }
    }

    /// Processes one gesture. Returns `true` when the schedule changed.
    pub fn handle(&mut self, session: &mut Session, event: Interaction, now: Instant) -> bool {
        match event {
            Interaction::NoteEdit { date, text, complete } => {
                self.edit_note(session, date, text, complete, now)
            }
            Interaction::NoteFocusLost => self.commit_note(session, now),
            Interaction::Focus(date) => {
                let committed = self.commit_note_unless(session, date, now);
                self.focus(date);
                committed
            }
            Interaction::Navigate(step) => {
                let committed = self.commit_note(session, now);
                self.navigate(step);
                committed
            }
            other => {
                let committed = self.commit_note(session, now);
                let changed = match other {
                    Interaction::Drop { selection, target, source } => {
                        self.drop_orders(session, selection, target, source)
                    }
                    Interaction::KeyDelete(FocusContext::DayHeader(date))
                    | Interaction::DialogClearDay(date) => self.clear_day(session, date),
                    Interaction::KeyDelete(FocusContext::DayRows { date, orders })
                    | Interaction::DialogRemoveSelected { date, orders } => {
                        self.remove_orders(session, date, orders)
                    }
                    Interaction::KeyDelete(FocusContext::None) => false,
                    Interaction::MenuUndo => self.undo(session),
                    Interaction::MenuRedo => self.redo(session),
                    Interaction::NoteEdit { .. }
                    | Interaction::NoteFocusLost
                    | Interaction::Focus(_)
                    | Interaction::Navigate(_) => false,
                };
                self.mark_dirty_if(changed, now);
                committed || changed
            }
        }
    }

    /// Commits a note draft that has been idle for the configured timeout.
    pub fn tick(&mut self, session: &mut Session, now: Instant) -> bool {
        let idle = self
            .draft
            .as_ref()
            .is_some_and(|draft| now.saturating_duration_since(draft.edited_at) >= self.note_idle);
        idle && self.commit_note(session, now)
    }

    /// `true` once the schedule has been quiet for the save debounce.
    pub fn flush_due(&self, now: Instant) -> bool {
        self.dirty_since
            .is_some_and(|since| now.saturating_duration_since(since) >= self.save_debounce)
    }

    /// Writes the schedule if there are unsaved changes. A failure is reported on the status line
    /// and the changes stay pending; the next attempt waits a full save debounce from `now`.
    pub fn flush(&mut self, session: &Session, store: &StateFile, now: Instant) -> bool {
        if self.dirty_since.is_none() {
            return true;
        }
        match store.save(session) {
            Ok(()) => {
                self.dirty_since = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "schedule save failed");
                self.dirty_since = Some(now);
                self.set_status(StatusLight::Failed, messages::save_failed(&err));
                false
            }
        }
    }

    /// Commits any note draft and flushes. Used on exit.
    pub fn shutdown(&mut self, session: &mut Session, store: &StateFile, now: Instant) -> bool {
        self.commit_note(session, now);
        self.flush(session, store, now)
    }

    /// Logout/new login: drops the draft, history and catalog and adopts the schedule on disk.
    pub fn reload(&mut self, session: &mut Session, store: &StateFile) {
        self.draft = None;
        self.dirty_since = None;
        let (snapshot, error) = store.load_or_empty();
        session.reset(snapshot.calendar, snapshot.companies);
        match error {
            Some(err) => self.report_load_error(&err),
            None => self.set_status(StatusLight::Idle, String::new()),
        }
    }

    pub fn report_load_error(&mut self, err: &impl std::fmt::Display) {
        self.set_status(StatusLight::Failed, messages::load_failed(err));
    }

    /// Starts a catalog refresh. Any earlier request still in flight is superseded.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.set_status(StatusLight::Pending, messages::REFRESHING.to_owned());
        self.refresh.issue()
    }

    /// Applies a refresh result if it answers the latest request. Returns `false` for stale ones.
    pub fn complete_refresh(
        &mut self,
        session: &mut Session,
        outcome: RefreshOutcome,
        now: NaiveDateTime,
    ) -> bool {
        if !self.refresh.accept(outcome.ticket) {
            tracing::debug!(ticket = ?outcome.ticket, "superseded refresh discarded");
            return false;
        }
        match outcome.result {
            Ok(orders) => {
                session.replace_catalog(orders);
                self.status.last_refresh = Some(now);
                self.status.stale = false;
                let message = if session.catalog().is_empty() {
                    messages::REFRESHED_EMPTY
                } else {
                    messages::REFRESHED
                };
                self.set_status(StatusLight::Ok, message.to_owned());
            }
            Err(err) => {
                self.status.stale = self.status.last_refresh.is_some();
                self.set_status(StatusLight::Failed, err.to_string());
            }
        }
        true
    }

    fn set_status(&mut self, light: StatusLight, message: String) {
        self.status.light = light;
        self.status.message = message;
    }

    fn mark_dirty_if(&mut self, changed: bool, now: Instant) {
        if changed {
            self.dirty_since = Some(now);
        }
    }

    fn focus(&mut self, date: CalendarDate) {
        self.focused = date;
        if !self.cursor.contains(date) {
            self.cursor = MonthCursor::containing(date);
        }
    }

    fn navigate(&mut self, step: MonthStep) {
        match step {
            MonthStep::Previous => self.cursor = self.cursor.previous(),
            MonthStep::Next => self.cursor = self.cursor.next(),
            MonthStep::Today => {
                self.focus(CalendarDate::today());
                return;
            }
        }
        self.focused = self.cursor.first_day();
    }

    fn edit_note(
        &mut self,
        session: &mut Session,
        date: CalendarDate,
        text: String,
        complete: bool,
        now: Instant,
    ) -> bool {
        let mut changed = self.commit_note_unless(session, date, now);
        self.draft = Some(NoteDraft { date, text, edited_at: now });
        if complete {
            changed |= self.commit_note(session, now);
        }
        changed
    }

    fn commit_note_unless(&mut self, session: &mut Session, date: CalendarDate, now: Instant) -> bool {
        match &self.draft {
            Some(draft) if draft.date != date => self.commit_note(session, now),
            _ => false,
        }
    }

    fn commit_note(&mut self, session: &mut Session, now: Instant) -> bool {
        let Some(draft) = self.draft.take() else {
            return false;
        };
        let text = if draft.text.trim().is_empty() { String::new() } else { draft.text };
        let changed = session.submit(Command::set_note(draft.date, text)).is_some();
        self.mark_dirty_if(changed, now);
        changed
    }

    fn drop_orders(
        &mut self,
        session: &mut Session,
        selection: Vec<OrderNumber>,
        target: CalendarDate,
        source: DragSource,
    ) -> bool {
        if selection.is_empty() {
            return false;
        }
        let command = match source {
            DragSource::Day(from) if from == target => {
                let refs: Vec<&OrderNumber> = selection.iter().collect();
                let message = messages::remains_scheduled(session, &refs, target);
                self.set_status(StatusLight::Ok, message);
                return false;
            }
            DragSource::Day(from) => Command::move_orders(from, target, selection.clone()),
            DragSource::Catalog => Command::batch_assign(target, selection.clone()),
        };

        let Some(recorded) = session.submit(command) else {
            let refs: Vec<&OrderNumber> = selection.iter().collect();
            let message = messages::remains_scheduled(session, &refs, target);
            self.set_status(StatusLight::Ok, message);
            return false;
        };
        let recorded = recorded.clone();
        let changed = recorded.changed_orders();
        let message = match recorded.source_date() {
            Some(from) => messages::moved(session, &changed, from, target),
            None => messages::assigned(session, &changed, target),
        };
        self.set_status(StatusLight::Ok, message);
        true
    }

    fn clear_day(&mut self, session: &mut Session, date: CalendarDate) -> bool {
        match session.submit(Command::clear_day(date)) {
            Some(recorded) => {
                let message = messages::cleared(recorded.changed_orders().len(), date);
                self.set_status(StatusLight::Ok, message);
                true
            }
            None => {
                self.set_status(StatusLight::Failed, messages::NO_ORDERS_ON_DAY.to_owned());
                false
            }
        }
    }

    fn remove_orders(&mut self, session: &mut Session, date: CalendarDate, orders: Vec<OrderNumber>) -> bool {
        if session.day(date).orders().is_empty() {
            self.set_status(StatusLight::Failed, messages::NO_ORDERS_ON_DAY.to_owned());
            return false;
        }
        let Some(recorded) = session.submit(Command::batch_unassign(date, orders.clone())) else {
            let refs: Vec<&OrderNumber> = orders.iter().collect();
            let message = messages::not_scheduled(session, &refs, date);
            self.set_status(StatusLight::Idle, message);
            return false;
        };
        let recorded = recorded.clone();
        let message = messages::removed(session, &recorded.changed_orders(), date);
        self.set_status(StatusLight::Ok, message);
        true
    }

    fn undo(&mut self, session: &mut Session) -> bool {
        let message = session.undo().map(|command| messages::restored("Undo", command));
        self.report_history_step(message, messages::NOTHING_TO_UNDO)
    }

    fn redo(&mut self, session: &mut Session) -> bool {
        let message = session.redo().map(|command| messages::restored("Redo", command));
        self.report_history_step(message, messages::NOTHING_TO_REDO)
    }

    fn report_history_step(&mut self, message: Option<String>, empty: &str) -> bool {
        match message {
            Some(message) => {
                self.set_status(StatusLight::Ok, message);
                true
            }
            None => {
                self.set_status(StatusLight::Failed, empty.to_owned());
                false
            }
        }
    }
}
