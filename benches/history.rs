// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use printcal::model::CalendarModel;
use printcal::ops::HistoryManager;

mod fixtures;

fn checksum(model: &CalendarModel) -> u64 {
    model.days().values().fold(0u64, |acc, day| {
        acc.wrapping_mul(131)
            .wrapping_add(day.orders().len() as u64)
            .wrapping_add(day.note().len() as u64)
    })
}

// Benchmark identity (keep stable):
// - Group name in this file: `ops.history`
// - Case IDs: `submit_<n>`, `undo_redo_<n>`.
fn benches_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("ops.history");

    for count in [10usize, 200, 2_000] {
        let commands = fixtures::command_stream(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_function(format!("submit_{count}"), |b| {
            b.iter_batched(
                || commands.clone(),
                |commands| {
                    let mut model = CalendarModel::new();
                    let mut history = HistoryManager::new();
                    for command in commands {
                        let _ = history.submit(command, &mut model);
                    }
                    black_box(checksum(&model))
                },
                BatchSize::SmallInput,
            )
        });

        let mut seeded_model = CalendarModel::new();
        let mut seeded_history = HistoryManager::new();
        for command in commands.iter().cloned() {
            let _ = seeded_history.submit(command, &mut seeded_model);
        }
        group.bench_function(format!("undo_redo_{count}"), |b| {
            b.iter_batched(
                || (seeded_model.clone(), seeded_history.clone()),
                |(mut model, mut history)| {
                    while history.undo(&mut model).is_some() {}
                    while history.redo(&mut model).is_some() {}
                    black_box(checksum(&model))
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, benches_history);
criterion_main!(benches);
