// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


use std::num::NonZeroUsize;

use rstest::rstest;

use crate::model::{CalendarDate, CalendarModel, OrderNumber};

use super::{Command, CommandKind, HistoryManager};

fn date(day: u32) -> CalendarDate {
    CalendarDate::from_ymd(2024, 5, day).expect("date")
}

fn num(value: &str) -> OrderNumber {
    OrderNumber::new(value).expect("order number")
}

fn nums(values: &[&str]) -> Vec<OrderNumber> {
    values.iter().copied().map(num).collect()
}

fn orders_on(model: &CalendarModel, day: CalendarDate) -> Vec<&str> {
    model.day(day).orders().iter().map(OrderNumber::as_str).collect()
}

fn mixed_commands() -> Vec<Command> {
    vec![
        Command::assign(date(3), num("1001")),
        Command::batch_assign(date(3), nums(&["1002", "1003", "1004"])),
        Command::set_note(date(3), "rush job"),
        Command::unassign(date(3), num("1003")),
        Command::move_orders(date(3), date(6), nums(&["1002"])),
        Command::batch_unassign(date(3), nums(&["1001", "1004"])),
        Command::assign(date(7), num("2001")),
        Command::clear_day(date(6)),
        Command::set_note(date(3), ""),
    ]
}

#[test]
fn undo_all_then_redo_all_restores_every_state() {
    let mut model = CalendarModel::new();
    let mut history = HistoryManager::new();
    let mut snapshots = vec![model.clone()];
    for command in mixed_commands() {
        assert!(history.submit(command, &mut model).is_some());
        snapshots.push(model.clone());
    }
    let depth = history.undo_depth();
    assert_eq!(depth, snapshots.len() - 1);

    for expected in snapshots.iter().rev().skip(1) {
        assert!(history.undo(&mut model).is_some());
        assert_eq!(&model, expected);
    }
    assert!(model.is_empty());
    assert!(!history.can_undo());

    for expected in snapshots.iter().skip(1) {
        assert!(history.redo(&mut model).is_some());
        assert_eq!(&model, expected);
    }
    assert_eq!(history.undo_depth(), depth);
    assert!(!history.can_redo());
}

#[test]
fn new_edit_after_undo_discards_redo_branch() {
    let mut model = CalendarModel::new();
    let mut history = HistoryManager::new();
    let _ = history.submit(Command::assign(date(3), num("1001")), &mut model);
    let _ = history.submit(Command::assign(date(3), num("1002")), &mut model);
    let _ = history.undo(&mut model);
    assert!(history.can_redo());

    let _ = history.submit(Command::assign(date(4), num("1003")), &mut model);
    assert!(!history.can_redo());
    assert!(history.redo(&mut model).is_none());
    assert_eq!(orders_on(&model, date(3)), ["1001"]);
    assert_eq!(orders_on(&model, date(4)), ["1003"]);
}

#[test]
fn duplicate_assign_is_not_recorded() {
    let mut model = CalendarModel::new();
    let mut history = HistoryManager::new();
    let _ = history.submit(Command::assign(date(3), num("1001")), &mut model);

    assert!(history.submit(Command::assign(date(3), num("1001")), &mut model).is_none());
    assert_eq!(history.undo_depth(), 1);
    assert_eq!(orders_on(&model, date(3)), ["1001"]);
}

#[test]
fn no_op_submit_keeps_redo_stack() {
    let mut model = CalendarModel::new();
    let mut history = HistoryManager::new();
    let _ = history.submit(Command::assign(date(3), num("1001")), &mut model);
    let _ = history.undo(&mut model);

    assert!(history.submit(Command::unassign(date(3), num("1001")), &mut model).is_none());
    assert!(history.can_redo());
}

#[rstest]
#[case::assign(Command::assign(date(9), num("1")))]
#[case::unassign(Command::unassign(date(9), num("1")))]
#[case::clear_day(Command::clear_day(date(9)))]
#[case::empty_note(Command::set_note(date(9), ""))]
#[case::batch_assign(Command::batch_assign(date(9), Vec::new()))]
#[case::batch_unassign(Command::batch_unassign(date(9), nums(&["1", "2"])))]
#[case::move_same_day(Command::move_orders(date(9), date(9), nums(&["1"])))]
#[case::move_absent(Command::move_orders(date(8), date(9), nums(&["404"])))]
fn no_op_commands_leave_history_untouched(#[case] command: Command) {
    let mut model = CalendarModel::new();
    let mut history = HistoryManager::new();
    if command.kind() == CommandKind::Assign {
        let _ = history.submit(Command::assign(date(9), num("1")), &mut model);
    }
    let depth = history.undo_depth();
    let before = model.clone();

    assert!(history.submit(command, &mut model).is_none());
    assert_eq!(history.undo_depth(), depth);
    assert_eq!(model, before);
}

#[test]
fn batch_assign_undo_and_redo_are_single_steps() {
    let mut model = CalendarModel::new();
    let mut history = HistoryManager::new();
    let _ = history.submit(Command::assign(date(3), num("1002")), &mut model);

    let recorded = history
        .submit(Command::batch_assign(date(3), nums(&["1001", "1002", "1003"])), &mut model)
        .expect("recorded");
    assert_eq!(recorded.changed_orders(), [&num("1001"), &num("1003")]);
    assert_eq!(orders_on(&model, date(3)), ["1002", "1001", "1003"]);

    let _ = history.undo(&mut model);
    assert_eq!(orders_on(&model, date(3)), ["1002"]);
    let _ = history.redo(&mut model);
    assert_eq!(orders_on(&model, date(3)), ["1002", "1001", "1003"]);
    assert_eq!(history.undo_depth(), 2);
}

#[test]
fn clear_day_undo_restores_exact_order_and_keeps_note() {
    let mut model = CalendarModel::new();
    let mut history = HistoryManager::new();
    let _ = history.submit(Command::batch_assign(date(3), nums(&["c", "a", "b"])), &mut model);
    let _ = history.submit(Command::set_note(date(3), "press 2"), &mut model);

    let _ = history.submit(Command::clear_day(date(3)), &mut model);
    assert!(model.day(date(3)).orders().is_empty());
    assert_eq!(model.day(date(3)).note(), "press 2");

    let _ = history.undo(&mut model);
    assert_eq!(orders_on(&model, date(3)), ["c", "a", "b"]);
}

#[test]
fn batch_unassign_undo_restores_original_positions() {
    let mut model = CalendarModel::new();
    let mut history = HistoryManager::new();
    let _ = history.submit(
        Command::batch_assign(date(3), nums(&["a", "b", "c", "d", "e"])),
        &mut model,
    );

    let recorded = history
        .submit(Command::batch_unassign(date(3), nums(&["d", "b", "zz"])), &mut model)
        .expect("recorded");
    assert_eq!(recorded.changed_orders(), [&num("d"), &num("b")]);
    assert_eq!(orders_on(&model, date(3)), ["a", "c", "e"]);

    let _ = history.undo(&mut model);
    assert_eq!(orders_on(&model, date(3)), ["a", "b", "c", "d", "e"]);
}

#[test]
fn single_unassign_undo_reinserts_at_same_index() {
    let mut model = CalendarModel::new();
    let mut history = HistoryManager::new();
    let _ = history.submit(Command::batch_assign(date(3), nums(&["a", "b", "c"])), &mut model);
    let _ = history.submit(Command::unassign(date(3), num("b")), &mut model);
    assert_eq!(orders_on(&model, date(3)), ["a", "c"]);

    let _ = history.undo(&mut model);
    assert_eq!(orders_on(&model, date(3)), ["a", "b", "c"]);
}

#[test]
fn move_transfers_orders_and_undo_puts_them_back() {
    let mut model = CalendarModel::new();
    let mut history = HistoryManager::new();
    let _ = history.submit(Command::batch_assign(date(3), nums(&["a", "b", "c"])), &mut model);
    let _ = history.submit(Command::assign(date(6), num("b")), &mut model);

    let recorded = history
        .submit(Command::move_orders(date(3), date(6), nums(&["b", "c", "x"])), &mut model)
        .expect("recorded");
    assert_eq!(recorded.kind(), CommandKind::Move);
    assert_eq!(recorded.source_date(), Some(date(3)));
    assert_eq!(recorded.date(), date(6));
    assert_eq!(orders_on(&model, date(3)), ["a"]);
    assert_eq!(orders_on(&model, date(6)), ["b", "c"]);

    let _ = history.undo(&mut model);
    assert_eq!(orders_on(&model, date(3)), ["a", "b", "c"]);
    assert_eq!(orders_on(&model, date(6)), ["b"]);
}

#[test]
fn set_note_undo_restores_previous_text() {
    let mut model = CalendarModel::new();
    let mut history = HistoryManager::new();
    let _ = history.submit(Command::set_note(date(3), "first"), &mut model);
    let _ = history.submit(Command::set_note(date(3), "second"), &mut model);
    assert!(history.submit(Command::set_note(date(3), "second"), &mut model).is_none());

    let _ = history.undo(&mut model);
    assert_eq!(model.day(date(3)).note(), "first");
    let _ = history.undo(&mut model);
    assert_eq!(model.day(date(3)).note(), "");
    assert!(model.is_empty());
}

#[test]
fn underflow_and_overflow_are_no_ops() {
    let mut model = CalendarModel::new();
    let mut history = HistoryManager::new();
    assert!(history.undo(&mut model).is_none());
    assert!(history.redo(&mut model).is_none());
    assert!(model.is_empty());
}

#[test]
fn history_limit_drops_oldest_entries() {
    let mut model = CalendarModel::new();
    let mut history = HistoryManager::with_limit(NonZeroUsize::new(2));
    for value in ["a", "b", "c"] {
        let _ = history.submit(Command::assign(date(3), num(value)), &mut model);
    }
    assert_eq!(history.undo_depth(), 2);

    while history.undo(&mut model).is_some() {}
    assert_eq!(orders_on(&model, date(3)), ["a"]);
    assert_eq!(history.redo_depth(), 2);
}

#[test]
fn clear_drops_both_stacks() {
    let mut model = CalendarModel::new();
    let mut history = HistoryManager::new();
    let _ = history.submit(Command::assign(date(3), num("a")), &mut model);
    let _ = history.submit(Command::assign(date(3), num("b")), &mut model);
    let _ = history.undo(&mut model);

    history.clear();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(orders_on(&model, date(3)), ["a"]);
}
