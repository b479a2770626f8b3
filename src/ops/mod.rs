// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reversible edits over the calendar model.
//!
//! Every schedule mutation is a [`Command`]. `apply` performs the forward edit and captures what
//! it needs to reverse itself; `undo` replays the captured state instead of recomputing it. A
//! command whose apply changed nothing is a no-op and is never recorded in history.

use std::fmt;

use crate::model::{CalendarDate, CalendarModel, OrderNumber};

pub mod history;

pub use history::HistoryManager;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Assign(Assign),
    Unassign(Unassign),
    ClearDay(ClearDay),
    SetNote(SetNote),
    BatchAssign(BatchAssign),
    BatchUnassign(BatchUnassign),
    Move(Move),
}

/// Adds one order to the end of a day's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assign {
    date: CalendarDate,
    order: OrderNumber,
    inserted_at: Option<usize>,
}

/// Removes one order from a day, remembering where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unassign {
    date: CalendarDate,
    order: OrderNumber,
    removed_from: Option<usize>,
}

/// Empties a day's order list. The note is not touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearDay {
    date: CalendarDate,
    cleared: Vec<OrderNumber>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetNote {
    date: CalendarDate,
    text: String,
    previous: Option<String>,
}

/// All orders of one drop gesture onto a day; undone as a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchAssign {
    date: CalendarDate,
    orders: Vec<OrderNumber>,
    applied: Vec<Assign>,
}

/// "Remove selected" on a day; undone as a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchUnassign {
    date: CalendarDate,
    orders: Vec<OrderNumber>,
    applied: Vec<Unassign>,
}

/// Orders dragged from one day onto another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    from: CalendarDate,
    to: CalendarDate,
    orders: Vec<OrderNumber>,
    removed: Vec<Unassign>,
    added: Vec<Assign>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Assign,
    Unassign,
    ClearDay,
    SetNote,
    BatchAssign,
    BatchUnassign,
    Move,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Assign => "assign",
            Self::Unassign => "unassign",
            Self::ClearDay => "clear-day",
            Self::SetNote => "set-note",
            Self::BatchAssign => "batch-assign",
            Self::BatchUnassign => "batch-unassign",
            Self::Move => "move",
        })
    }
}

/// Result of applying a command.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Changed,
    NoOp,
}

impl ApplyOutcome {
    pub fn changed(self) -> bool {
        self == Self::Changed
    }

    fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::NoOp
        }
    }
}

impl Command {
    pub fn assign(date: CalendarDate, order: OrderNumber) -> Self {
        Self::Assign(Assign::new(date, order))
    }

    pub fn unassign(date: CalendarDate, order: OrderNumber) -> Self {
        Self::Unassign(Unassign::new(date, order))
    }

    pub fn clear_day(date: CalendarDate) -> Self {
        Self::ClearDay(ClearDay { date, cleared: Vec::new() })
    }

    pub fn set_note(date: CalendarDate, text: impl Into<String>) -> Self {
        Self::SetNote(SetNote { date, text: text.into(), previous: None })
    }

    pub fn batch_assign(date: CalendarDate, orders: Vec<OrderNumber>) -> Self {
        Self::BatchAssign(BatchAssign { date, orders, applied: Vec::new() })
    }

    pub fn batch_unassign(date: CalendarDate, orders: Vec<OrderNumber>) -> Self {
        Self::BatchUnassign(BatchUnassign { date, orders, applied: Vec::new() })
    }

    pub fn move_orders(from: CalendarDate, to: CalendarDate, orders: Vec<OrderNumber>) -> Self {
        Self::Move(Move { from, to, orders, removed: Vec::new(), added: Vec::new() })
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Assign(_) => CommandKind::Assign,
            Self::Unassign(_) => CommandKind::Unassign,
            Self::ClearDay(_) => CommandKind::ClearDay,
            Self::SetNote(_) => CommandKind::SetNote,
            Self::BatchAssign(_) => CommandKind::BatchAssign,
            Self::BatchUnassign(_) => CommandKind::BatchUnassign,
            Self::Move(_) => CommandKind::Move,
        }
    }

    /// The day the command targets (the destination day for moves).
    pub fn date(&self) -> CalendarDate {
        match self {
            Self::Assign(cmd) => cmd.date,
            Self::Unassign(cmd) => cmd.date,
            Self::ClearDay(cmd) => cmd.date,
            Self::SetNote(cmd) => cmd.date,
            Self::BatchAssign(cmd) => cmd.date,
            Self::BatchUnassign(cmd) => cmd.date,
            Self::Move(cmd) => cmd.to,
        }
    }

    /// Source day of a move.
    pub fn source_date(&self) -> Option<CalendarDate> {
        match self {
            Self::Move(cmd) => Some(cmd.from),
            _ => None,
        }
    }

    /// Performs the forward edit and captures the state needed to undo it.
    ///
    /// Applying again after an undo (redo) recaptures; under a linear history the model is then
    /// in the same state as at the first apply.
    pub fn apply(&mut self, model: &mut CalendarModel) -> ApplyOutcome {
        match self {
            Self::Assign(cmd) => cmd.apply(model),
            Self::Unassign(cmd) => cmd.apply(model),
            Self::ClearDay(cmd) => cmd.apply(model),
            Self::SetNote(cmd) => cmd.apply(model),
            Self::BatchAssign(cmd) => cmd.apply(model),
            Self::BatchUnassign(cmd) => cmd.apply(model),
            Self::Move(cmd) => cmd.apply(model),
        }
    }

    /// Reverses the last apply using the captured state.
    pub fn undo(&self, model: &mut CalendarModel) {
        match self {
            Self::Assign(cmd) => cmd.undo(model),
            Self::Unassign(cmd) => cmd.undo(model),
            Self::ClearDay(cmd) => cmd.undo(model),
            Self::SetNote(cmd) => cmd.undo(model),
            Self::BatchAssign(cmd) => cmd.undo(model),
            Self::BatchUnassign(cmd) => cmd.undo(model),
            Self::Move(cmd) => cmd.undo(model),
        }
    }

    /// `true` when the last apply produced no observable change.
    pub fn is_noop(&self) -> bool {
        self.changed_orders().is_empty() && !self.note_changed()
    }

    /// Orders whose assignment actually changed during the last apply, in edit order.
    pub fn changed_orders(&self) -> Vec<&OrderNumber> {
        match self {
            Self::Assign(cmd) => cmd.inserted_at.map(|_| &cmd.order).into_iter().collect(),
            Self::Unassign(cmd) => cmd.removed_from.map(|_| &cmd.order).into_iter().collect(),
            Self::ClearDay(cmd) => cmd.cleared.iter().collect(),
            Self::SetNote(_) => Vec::new(),
            Self::BatchAssign(cmd) => cmd.applied.iter().map(|a| &a.order).collect(),
            Self::BatchUnassign(cmd) => cmd.applied.iter().map(|u| &u.order).collect(),
            Self::Move(cmd) => cmd.removed.iter().map(|u| &u.order).collect(),
        }
    }

    fn note_changed(&self) -> bool {
        matches!(self, Self::SetNote(cmd) if cmd.previous.is_some())
    }
}

// Per-variant apply/undo bodies.
include!("ops_impl.rs");

#[cfg(test)]
mod tests;
