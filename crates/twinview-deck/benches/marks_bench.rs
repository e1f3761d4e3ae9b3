//! Benchmarks for mark recording and drift checks.
//!
//! Run with: cargo bench -p twinview-deck

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use twinview_deck::MarkStore;

fn bench_mark_insert(c: &mut Criterion) {
    c.bench_function("mark_insert_500_reverse", |bencher| {
        bencher.iter(|| {
            let mut store = MarkStore::new();
            for i in (0..500).rev() {
                store.mark_current_time(black_box(i as f64 * 0.1));
            }
            store
        });
    });

    c.bench_function("mark_insert_duplicate", |bencher| {
        let mut store = MarkStore::new();
        for i in 0..500 {
            store.mark_current_time(i as f64 * 0.1);
        }
        bencher.iter(|| store.mark_current_time(black_box(25.0)));
    });
}

fn bench_observe_position(c: &mut Criterion) {
    let mut store = MarkStore::new();
    let mut ids = Vec::new();
    for i in 0..500 {
        ids.extend(store.mark_current_time(i as f64 * 0.1));
    }
    let target = ids[250];

    c.bench_function("observe_selected_500", |bencher| {
        bencher.iter(|| {
            store.select(target);
            store.observe_position(black_box(25.0))
        });
    });
}

criterion_group!(benches, bench_mark_insert, bench_observe_position);
criterion_main!(benches);
