// File: crates/kpi-core/src/types.rs
// Summary: Shared constants (default surface size, card geometry, font sizes).

/// Default surface width in pixels.
pub const WIDTH: u32 = 480;
/// Default surface height in pixels; the card is laid out for a 300px tall chart area.
pub const HEIGHT: u32 = 300;

/// Inset of the card from the container edges.
pub const CARD_PADDING: f32 = 10.0;
pub const CARD_RADIUS: f32 = 12.0;
/// Left offset of the title block inside the card.
pub const TEXT_INDENT: f32 = 16.0;

pub const TITLE_BASELINE: f32 = 30.0;
pub const PERIOD_BASELINE: f32 = 50.0;
pub const OVERALL_BASELINE: f32 = 82.0;
/// X offset (from the card edge) of the parenthesised prior overall.
pub const PRIOR_OVERALL_X: f32 = 110.0;

pub const GRID_TOP: f32 = 100.0;
pub const GRID_SIDE_INSET: f32 = 12.0;
pub const GRID_HEIGHT: f32 = 70.0;
pub const TILE_GUTTER: f32 = 6.0;
pub const TILE_VERTICAL_INSET: f32 = 10.0;
pub const TILE_RADIUS: f32 = 8.0;
pub const TILE_LABEL_BASELINE: f32 = 26.0;
pub const TILE_VALUE_BASELINE: f32 = 48.0;

pub const CHECKLIST_GAP: f32 = 16.0;
pub const CHECKLIST_ROW: f32 = 18.0;
pub const CHECKLIST_DOT_RADIUS: f32 = 5.0;
/// Distance from the card's right edge to the status dot centre.
pub const CHECKLIST_DOT_INSET: f32 = 22.0;

pub const TITLE_SIZE: f32 = 22.0;
pub const PERIOD_SIZE: f32 = 12.0;
pub const OVERALL_SIZE: f32 = 30.0;
pub const PRIOR_SIZE: f32 = 12.0;
pub const TILE_LABEL_SIZE: f32 = 11.0;
pub const TILE_VALUE_SIZE: f32 = 15.0;
pub const CHECKLIST_SIZE: f32 = 12.0;
