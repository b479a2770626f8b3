// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Variant apply/undo bodies used by `Command::apply` and `Command::undo`.
/// Keeps `ops::mod` focused on the public command types and dispatch.
impl Assign {
    fn new(date: CalendarDate, order: OrderNumber) -> Self {
        Self { date, order, inserted_at: None }
    }

    pub fn order(&self) -> &OrderNumber {
        &self.order
    }

    fn apply(&mut self, model: &mut CalendarModel) -> ApplyOutcome {
        self.inserted_at = model.apply_assign(self.date, &self.order);
        ApplyOutcome::from_changed(self.inserted_at.is_some())
    }

    fn undo(&self, model: &mut CalendarModel) {
        if self.inserted_at.is_some() {
            let _ = model.apply_unassign(self.date, self.order.as_str());
        }
    }
}

impl Unassign {
    fn new(date: CalendarDate, order: OrderNumber) -> Self {
        Self { date, order, removed_from: None }
    }

    pub fn order(&self) -> &OrderNumber {
        &self.order
    }

    fn apply(&mut self, model: &mut CalendarModel) -> ApplyOutcome {
        self.removed_from = model.apply_unassign(self.date, self.order.as_str());
        ApplyOutcome::from_changed(self.removed_from.is_some())
    }

    fn undo(&self, model: &mut CalendarModel) {
        if let Some(index) = self.removed_from {
            let _ = model.insert_at(self.date, index, &self.order);
        }
    }
}

impl ClearDay {
    pub fn cleared(&self) -> &[OrderNumber] {
        &self.cleared
    }

    fn apply(&mut self, model: &mut CalendarModel) -> ApplyOutcome {
        self.cleared = model.apply_clear_day(self.date);
        ApplyOutcome::from_changed(!self.cleared.is_empty())
    }

    fn undo(&self, model: &mut CalendarModel) {
        model.restore_orders(self.date, &self.cleared);
    }
}

impl SetNote {
    pub fn text(&self) -> &str {
        &self.text
    }

    fn apply(&mut self, model: &mut CalendarModel) -> ApplyOutcome {
        if model.day(self.date).note() == self.text {
            self.previous = None;
            return ApplyOutcome::NoOp;
        }
        self.previous = Some(model.apply_set_note(self.date, self.text.clone()));
        ApplyOutcome::Changed
    }

    fn undo(&self, model: &mut CalendarModel) {
        if let Some(previous) = &self.previous {
            let _ = model.apply_set_note(self.date, previous.clone());
        }
    }
}

impl BatchAssign {
    pub fn orders(&self) -> &[OrderNumber] {
        &self.orders
    }

    fn apply(&mut self, model: &mut CalendarModel) -> ApplyOutcome {
        self.applied.clear();
        for order in &self.orders {
            let mut step = Assign::new(self.date, order.clone());
            if step.apply(model).changed() {
                self.applied.push(step);
            }
        }
        ApplyOutcome::from_changed(!self.applied.is_empty())
    }

    fn undo(&self, model: &mut CalendarModel) {
        for step in self.applied.iter().rev() {
            step.undo(model);
        }
    }
}

impl BatchUnassign {
    pub fn orders(&self) -> &[OrderNumber] {
        &self.orders
    }

    fn apply(&mut self, model: &mut CalendarModel) -> ApplyOutcome {
        self.applied.clear();
        for order in &self.orders {
            let mut step = Unassign::new(self.date, order.clone());
            if step.apply(model).changed() {
                self.applied.push(step);
            }
        }
        ApplyOutcome::from_changed(!self.applied.is_empty())
    }

    fn undo(&self, model: &mut CalendarModel) {
        // Reverse order so every captured index is valid again when it is replayed.
        for step in self.applied.iter().rev() {
            step.undo(model);
        }
    }
}

impl Move {
    pub fn orders(&self) -> &[OrderNumber] {
        &self.orders
    }

    fn apply(&mut self, model: &mut CalendarModel) -> ApplyOutcome {
        self.removed.clear();
        self.added.clear();
        if self.from == self.to {
            return ApplyOutcome::NoOp;
        }
        for order in &self.orders {
            let mut removal = Unassign::new(self.from, order.clone());
            if !removal.apply(model).changed() {
                continue;
            }
            self.removed.push(removal);
            let mut addition = Assign::new(self.to, order.clone());
            if addition.apply(model).changed() {
                self.added.push(addition);
            }
        }
        ApplyOutcome::from_changed(!self.removed.is_empty())
    }

    fn undo(&self, model: &mut CalendarModel) {
        for step in self.added.iter().rev() {
            step.undo(model);
        }
        for step in self.removed.iter().rev() {
            step.undo(model);
        }
    }
}
