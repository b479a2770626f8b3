// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use printcal::query::{filter_orders, FilterIndex};

mod fixtures;

// Benchmark identity (keep stable):
// - Group name in this file: `query.filter`
// - Case IDs are `<catalog size>/<query kind>` and `<catalog size>/indexed/<query kind>`.
fn benches_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("query.filter");

    for case in [fixtures::Case::Small, fixtures::Case::Medium, fixtures::Case::Large] {
        let catalog = fixtures::catalog(case);
        let index = FilterIndex::build(&catalog);
        group.throughput(Throughput::Elements(catalog.len() as u64));

        for (kind, query) in [
            ("empty", ""),
            ("number", "1004"),
            ("company", "gamma"),
            ("miss", "no such customer"),
        ] {
            group.bench_function(format!("{}/{kind}", case.id()), |b| {
                b.iter(|| black_box(filter_orders(&catalog, black_box(query)).len()))
            });
            group.bench_function(format!("{}/indexed/{kind}", case.id()), |b| {
                b.iter(|| black_box(index.matching(&catalog, black_box(query)).len()))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benches_filter);
criterion_main!(benches);
