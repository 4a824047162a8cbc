// File: crates/kpi-core/src/shape.rs
// Summary: Row shaper; turns the first host row into a DisplayModel.

use crate::model::{DisplayModel, Metric};
use crate::row::{cell, to_display_string, to_number, RawRow};

/// Field pair feeding one metric tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricField {
    pub label: &'static str,
    pub field: &'static str,
    pub prior_field: &'static str,
}

pub const OFFICE_FIELD: &str = "office";
pub const MONTH_FIELD: &str = "month";
pub const OVERALL_FIELD: &str = "overall";
pub const OVERALL_PRIOR_FIELD: &str = "overall_prior";

/// Tiles shown on the card, in display order.
pub const KPI_METRICS: &[MetricField] = &[
    MetricField { label: "GM", field: "gm", prior_field: "gm_prior" },
    MetricField { label: "Production", field: "prod", prior_field: "prod_prior" },
    MetricField { label: "Stability", field: "stab", prior_field: "stab_prior" },
    MetricField { label: "Amnts.", field: "amnts", prior_field: "amnts_prior" },
];

/// Shape with the standard four tiles. `None` means there was no row at all.
pub fn shape(rows: &[RawRow]) -> Option<DisplayModel> {
    shape_with(rows, KPI_METRICS)
}

/// Shape the first row using an explicit tile table; later rows are ignored.
pub fn shape_with(rows: &[RawRow], metrics: &[MetricField]) -> Option<DisplayModel> {
    let row = rows.first()?;
    let num = |field: &str| to_number(cell(row, field));

    Some(DisplayModel {
        office: to_display_string(cell(row, OFFICE_FIELD)),
        month: to_display_string(cell(row, MONTH_FIELD)),
        overall: num(OVERALL_FIELD),
        prior_overall: num(OVERALL_PRIOR_FIELD),
        metrics: metrics
            .iter()
            .map(|m| Metric::new(m.label, num(m.field), num(m.prior_field)))
            .collect(),
        checklist: None,
    })
}
