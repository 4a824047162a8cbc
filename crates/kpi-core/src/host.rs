// File: crates/kpi-core/src/host.rs
// Summary: Host-facing contract: field configuration, chart model, widget trait and the context driving it.

use serde::{Deserialize, Serialize};

use crate::row::RawRow;
use crate::session::RenderTarget;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldKind {
    Dimension,
    Measure,
}

/// One column the host asks the operator to map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub required: bool,
    pub display_name: String,
}

impl FieldDescriptor {
    pub fn dimension(name: &str, display_name: &str) -> Self {
        Self { name: name.into(), kind: FieldKind::Dimension, required: true, display_name: display_name.into() }
    }
    pub fn measure(name: &str, display_name: &str) -> Self {
        Self { name: name.into(), kind: FieldKind::Measure, required: true, display_name: display_name.into() }
    }
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Field schema for the KPI card, in the order the host presents it.
pub fn kpi_chart_config() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::dimension("office", "Office"),
        FieldDescriptor::dimension("month", "Month"),
        FieldDescriptor::measure("overall", "Overall"),
        FieldDescriptor::measure("overall_prior", "Overall (Prior)").optional(),
        FieldDescriptor::measure("gm", "GM").optional(),
        FieldDescriptor::measure("gm_prior", "GM (Prior)").optional(),
        FieldDescriptor::measure("prod", "Production").optional(),
        FieldDescriptor::measure("prod_prior", "Production (Prior)").optional(),
        FieldDescriptor::measure("stab", "Stability").optional(),
        FieldDescriptor::measure("stab_prior", "Stability (Prior)").optional(),
        FieldDescriptor::measure("amnts", "Amnts.").optional(),
        FieldDescriptor::measure("amnts_prior", "Amnts. (Prior)").optional(),
    ]
}

/// Data snapshot delivered with each render call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    #[serde(default)]
    pub data: Vec<RawRow>,
}

impl ChartModel {
    pub fn new(data: Vec<RawRow>) -> Self { Self { data } }

    pub fn data(&self) -> &[RawRow] { &self.data }
}

/// Callbacks a visualization exposes to the host.
pub trait ChartWidget {
    fn id(&self) -> &'static str;

    /// Static field schema, returned once at initialization.
    fn chart_config(&self) -> Vec<FieldDescriptor>;

    /// Invoked whenever data or layout changes.
    fn render(&mut self, target: &mut RenderTarget, model: &ChartModel);

    /// Invoked when the widget is removed; drops the session and any fallback text. Must be idempotent.
    fn on_destroy(&mut self, target: &mut RenderTarget) {
        target.clear();
    }
}

/// Host side of the handshake: one widget bound to one target for its lifetime.
pub struct ChartContext<W: ChartWidget> {
    widget: W,
    target: RenderTarget,
    config: Vec<FieldDescriptor>,
}

impl<W: ChartWidget> ChartContext<W> {
    pub fn new(widget: W, width: u32, height: u32) -> Self {
        let config = widget.chart_config();
        log::debug!("chart context for '{}' with {} fields", widget.id(), config.len());
        Self { widget, target: RenderTarget::new(width, height), config }
    }

    pub fn chart_config(&self) -> &[FieldDescriptor] { &self.config }

    pub fn target(&self) -> &RenderTarget { &self.target }

    pub fn widget(&self) -> &W { &self.widget }

    /// Deliver a fresh data snapshot.
    pub fn render(&mut self, model: &ChartModel) {
        self.widget.render(&mut self.target, model);
    }

    /// Container resized; an active card redraws at the new geometry.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.target.resize(width, height);
    }

    /// Widget removal.
    pub fn destroy(&mut self) {
        self.widget.on_destroy(&mut self.target);
    }
}
