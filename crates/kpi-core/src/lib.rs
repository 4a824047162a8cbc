// File: crates/kpi-core/src/lib.rs
// Summary: Core library entry point; exports the row shaper, card layout, sessions and host contract.

pub mod format;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod model;
pub mod row;
pub mod scene;
pub mod session;
pub mod shape;
pub mod theme;
pub mod types;
pub mod widget;

pub use format::{format_metric, format_value, NumberFormat, PLACEHOLDER};
pub use host::{kpi_chart_config, ChartContext, ChartModel, ChartWidget, FieldDescriptor, FieldKind};
pub use layout::{layout_card, layout_message};
pub use model::{ChecklistItem, DisplayModel, Metric};
pub use row::RawRow;
pub use scene::{Primitive, PrimitiveKind, Scene, TextAlign};
pub use session::{draw_card, DrawingSession, RenderTarget, SurfaceEvent};
pub use shape::{shape, shape_with, MetricField, KPI_METRICS};
pub use theme::{CardTheme, Rgba};
pub use widget::{KpiCardWidget, RowCountWidget, NO_DATA_MESSAGE};
