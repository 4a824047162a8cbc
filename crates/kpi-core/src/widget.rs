// File: crates/kpi-core/src/widget.rs
// Summary: The two host entry points: the KPI card and a row-count placeholder.

use crate::host::{kpi_chart_config, ChartModel, ChartWidget, FieldDescriptor};
use crate::session::{draw_card, RenderTarget};
use crate::shape::shape;

/// Shown instead of a card when the host supplies no rows.
pub const NO_DATA_MESSAGE: &str = "No data";

/// KPI card visualization.
#[derive(Clone, Copy, Debug, Default)]
pub struct KpiCardWidget;

impl ChartWidget for KpiCardWidget {
    fn id(&self) -> &'static str { "kpi_card" }

    fn chart_config(&self) -> Vec<FieldDescriptor> { kpi_chart_config() }

    fn render(&mut self, target: &mut RenderTarget, model: &ChartModel) {
        target.clear();
        match shape(model.data()) {
            Some(shaped) => draw_card(target, shaped),
            None => {
                log::debug!("no rows supplied; showing fallback");
                target.show_text(NO_DATA_MESSAGE);
            }
        }
    }
}

/// Placeholder that only reports how many rows arrived.
#[derive(Clone, Copy, Debug, Default)]
pub struct RowCountWidget;

impl RowCountWidget {
    pub fn message(rows: usize) -> String {
        format!("Rows received: {rows}")
    }
}

impl ChartWidget for RowCountWidget {
    fn id(&self) -> &'static str { "row_count" }

    fn chart_config(&self) -> Vec<FieldDescriptor> { kpi_chart_config() }

    fn render(&mut self, target: &mut RenderTarget, model: &ChartModel) {
        target.clear();
        target.show_text(Self::message(model.data().len()));
    }
}
