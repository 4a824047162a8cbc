// File: crates/kpi-core/benches/layout_bench.rs
// Summary: Shape + layout cost for one render trigger.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kpi_core::{layout_card, shape, CardTheme, RawRow};
use serde_json::json;

fn sample_rows(n: usize) -> Vec<RawRow> {
    (0..n)
        .map(|i| {
            json!({
                "office": format!("Office {i}"), "month": "June",
                "overall": { "value": 92.3 }, "overall_prior": 88.1,
                "gm": 4.5, "gm_prior": 4.1, "prod": "97", "stab": 99.1, "amnts": 3.2
            })
            .as_object()
            .cloned()
            .unwrap_or_default()
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_and_layout");
    for &n in &[1usize, 1_000usize] {
        let rows = sample_rows(n);
        group.bench_function(format!("rows_{n}"), |b| {
            b.iter(|| {
                if let Some(model) = shape(black_box(&rows)) {
                    black_box(layout_card(480.0, 300.0, &model, &CardTheme::STANDARD));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
