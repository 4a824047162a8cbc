// File: crates/kpi-core/tests/shape.rs
// Purpose: Row shaper behaviour: first-row only, unwrapping, missing-safe coercion.

use kpi_core::{shape, shape_with, MetricField, RawRow};
use serde_json::{json, Value};

fn row(v: Value) -> RawRow {
    v.as_object().cloned().expect("object literal")
}

fn austin() -> RawRow {
    row(json!({
        "office": "Austin", "month": "June",
        "overall": 92.3, "overall_prior": 88.1,
        "gm": 4.5, "prod": 97, "stab": 99.1, "amnts": 3.2
    }))
}

#[test]
fn empty_rows_yield_none() {
    assert!(shape(&[]).is_none());
}

#[test]
fn austin_scenario() {
    let m = shape(&[austin()]).expect("model");
    assert_eq!(m.office, "Austin");
    assert_eq!(m.month, "June");
    assert!((m.overall - 92.3).abs() < 1e-9);
    assert!((m.prior_overall - 88.1).abs() < 1e-9);
    assert_eq!(m.metrics[0].label, "GM");
    assert!((m.metrics[0].value - 4.5).abs() < 1e-9);
    assert!(m.metrics[0].prior.is_nan());
    assert_eq!(m.metrics[1].value, 97.0);
    assert!(m.checklist.is_none());
}

#[test]
fn trailing_rows_are_ignored() {
    let alone = shape(&[austin()]).expect("model");
    let extra = vec![
        austin(),
        row(json!({ "office": "Dallas", "overall": 1.0 })),
        row(json!({})),
    ];
    let with_tail = shape(&extra).expect("model");
    assert!(alone.same_as(&with_tail));
}

#[test]
fn metrics_are_fixed_regardless_of_input() {
    let m = shape(&[row(json!({ "office": "Dallas", "month": "July" }))]).expect("model");
    let labels: Vec<_> = m.metrics.iter().map(|x| x.label.as_str()).collect();
    assert_eq!(labels, ["GM", "Production", "Stability", "Amnts."]);
    assert!(m.metrics.iter().all(|x| x.value.is_nan() && x.prior.is_nan()));
    assert!(m.overall.is_nan());
    assert!(m.prior_overall.is_nan());
}

#[test]
fn wrapped_values_and_numeric_strings() {
    let m = shape(&[row(json!({
        "office": { "value": "Houston" },
        "month": { "value": "May" },
        "overall": { "value": "81.25" },
        "gm": "n/a",
        "stab_prior": { "value": 70 }
    }))])
    .expect("model");
    assert_eq!(m.office, "Houston");
    assert_eq!(m.month, "May");
    assert_eq!(m.overall, 81.25);
    assert!(m.metrics[0].value.is_nan());
    assert_eq!(m.metrics[2].prior, 70.0);
}

#[test]
fn absent_dimensions_become_undefined_literal() {
    let m = shape(&[row(json!({ "overall": 5 }))]).expect("model");
    assert_eq!(m.office, "undefined");
    assert_eq!(m.month, "undefined");
}

#[test]
fn numeric_dimension_is_stringified() {
    let m = shape(&[row(json!({ "office": 42, "month": 6.5 }))]).expect("model");
    assert_eq!(m.office, "42");
    assert_eq!(m.month, "6.5");
}

#[test]
fn custom_metric_table() {
    const TABLE: &[MetricField] = &[MetricField { label: "Revenue", field: "rev", prior_field: "rev_prior" }];
    let m = shape_with(&[row(json!({ "rev": 10, "rev_prior": 8 }))], TABLE).expect("model");
    assert_eq!(m.metrics.len(), 1);
    assert_eq!(m.metrics[0].label, "Revenue");
    assert_eq!((m.metrics[0].value, m.metrics[0].prior), (10.0, 8.0));
}
