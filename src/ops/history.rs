// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::num::NonZeroUsize;

use crate::model::CalendarModel;

use super::Command;

/// Linear undo/redo timeline over applied [`Command`]s.
///
/// The redo stack only ever holds commands popped by [`undo`](Self::undo) since the last new
/// edit; submitting a recorded edit clears it. Depth is unbounded unless a limit is configured,
/// in which case the oldest entries are dropped first.
#[derive(Debug, Clone, Default)]
pub struct HistoryManager {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
    limit: Option<NonZeroUsize>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<NonZeroUsize>) -> Self {
        Self { limit, ..Self::default() }
    }

    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    /// Applies `command`. Returns the recorded command, or `None` when it was a no-op (in which
    /// case neither stack is touched).
    pub fn submit(&mut self, mut command: Command, model: &mut CalendarModel) -> Option<&Command> {
        if !command.apply(model).changed() {
            tracing::debug!(kind = %command.kind(), date = %command.date(), "no-op command dropped");
            return None;
        }
        tracing::debug!(
            kind = %command.kind(),
            date = %command.date(),
            undo_depth = self.undo_stack.len() + 1,
            "command applied"
        );
        self.redo_stack.clear();
        push_bounded(&mut self.undo_stack, command, self.limit);
        self.undo_stack.last()
    }

    /// Reverses the most recent command. `None` when there is nothing to undo.
    pub fn undo(&mut self, model: &mut CalendarModel) -> Option<&Command> {
        let command = self.undo_stack.pop()?;
        command.undo(model);
        tracing::debug!(kind = %command.kind(), date = %command.date(), "command undone");
        push_bounded(&mut self.redo_stack, command, self.limit);
        self.redo_stack.last()
    }

    /// Re-applies the most recently undone command. `None` when there is nothing to redo.
    pub fn redo(&mut self, model: &mut CalendarModel) -> Option<&Command> {
        let mut command = self.redo_stack.pop()?;
        let _ = command.apply(model);
        tracing::debug!(kind = %command.kind(), date = %command.date(), "command redone");
        push_bounded(&mut self.undo_stack, command, self.limit);
        self.undo_stack.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drops both stacks (session reset).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

fn push_bounded(stack: &mut Vec<Command>, command: Command, limit: Option<NonZeroUsize>) {
    stack.push(command);
    if let Some(limit) = limit {
        let excess = stack.len().saturating_sub(limit.get());
        if excess > 0 {
            stack.drain(..excess);
        }
    }
}
