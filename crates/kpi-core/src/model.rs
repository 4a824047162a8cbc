// File: crates/kpi-core/src/model.rs
// Summary: Display model handed from the row shaper to the card renderer.

use serde::Serialize;

/// One metric tile: current value and its prior-period counterpart (NaN when missing).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: f64,
    pub prior: f64,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: f64, prior: f64) -> Self {
        Self { label: label.into(), value, prior }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub text: String,
    pub done: bool,
}

/// Everything the card shows for one render.
/// Note: NaN fields make `PartialEq` non-reflexive; compare via [`DisplayModel::same_as`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayModel {
    pub office: String,
    pub month: String,
    pub overall: f64,
    pub prior_overall: f64,
    pub metrics: Vec<Metric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checklist: Option<Vec<ChecklistItem>>,
}

impl DisplayModel {
    /// Structural equality treating NaN as equal to NaN.
    pub fn same_as(&self, other: &DisplayModel) -> bool {
        fn eq(a: f64, b: f64) -> bool { a == b || (a.is_nan() && b.is_nan()) }
        self.office == other.office
            && self.month == other.month
            && eq(self.overall, other.overall)
            && eq(self.prior_overall, other.prior_overall)
            && self.checklist == other.checklist
            && self.metrics.len() == other.metrics.len()
            && self.metrics.iter().zip(&other.metrics).all(|(a, b)| {
                a.label == b.label && eq(a.value, b.value) && eq(a.prior, b.prior)
            })
    }

    /// Checklist entries, empty when none is attached.
    pub fn checklist_items(&self) -> &[ChecklistItem] {
        self.checklist.as_deref().unwrap_or(&[])
    }
}
