// File: crates/kpi-core/src/layout.rs
// Summary: KPI card layout; turns a DisplayModel and container size into a Scene.

use crate::format::format_value;
use crate::geometry::{Point, Rect};
use crate::model::{ChecklistItem, DisplayModel, Metric};
use crate::scene::{FontWeight, Primitive, Scene, TextAlign, TextStyle};
use crate::theme::CardTheme;
use crate::types::*;

/// Lay out the whole card into `scene`. Clears whatever the scene held before.
pub fn layout_card_into(scene: &mut Scene, width: f32, height: f32, data: &DisplayModel, theme: &CardTheme) {
    scene.clear();

    let card = Rect::from_ltwh(0.0, 0.0, width, height).inset(CARD_PADDING);
    scene.push(Primitive::RoundRect {
        rect: card,
        radius: CARD_RADIUS,
        fill: theme.card_fill,
        stroke: Some(theme.card_border),
        stroke_width: 1.0,
    });

    draw_header(scene, card, data, theme);

    let grid_top = card.top + GRID_TOP;
    let grid_left = card.left + GRID_SIDE_INSET;
    let grid_right = (card.right() - GRID_SIDE_INSET).max(grid_left);
    draw_metric_grid(scene, grid_left, grid_top, grid_right, &data.metrics, theme);

    draw_checklist(scene, card, grid_top + GRID_HEIGHT + CHECKLIST_GAP, data.checklist_items(), theme);

    log::trace!("card laid out: {} primitives at {}x{}", scene.len(), width, height);
}

/// Pure form of [`layout_card_into`].
pub fn layout_card(width: f32, height: f32, data: &DisplayModel, theme: &CardTheme) -> Scene {
    let mut scene = Scene::new();
    layout_card_into(&mut scene, width, height, data, theme);
    scene
}

/// Text-only frame, used for the "no data" fallback and the row-count placeholder.
pub fn layout_message(message: &str, theme: &CardTheme) -> Scene {
    let mut scene = Scene::new();
    scene.push(Primitive::Text {
        origin: Point::new(CARD_PADDING, CARD_PADDING + PERIOD_SIZE),
        content: message.to_string(),
        style: TextStyle::new(PERIOD_SIZE + 2.0, theme.text).italic(),
        align: TextAlign::Left,
    });
    scene
}

// ---- helpers ----------------------------------------------------------------

fn text(scene: &mut Scene, x: f32, y: f32, content: String, style: TextStyle, align: TextAlign) {
    scene.push(Primitive::Text { origin: Point::new(x, y), content, style, align });
}

fn draw_header(scene: &mut Scene, card: Rect, data: &DisplayModel, theme: &CardTheme) {
    let x = card.left + TEXT_INDENT;

    text(
        scene,
        x,
        card.top + TITLE_BASELINE,
        data.office.clone(),
        TextStyle::new(TITLE_SIZE, theme.text).weight(FontWeight::BOLD),
        TextAlign::Left,
    );
    text(
        scene,
        x,
        card.top + PERIOD_BASELINE,
        format!("{} Overall", data.month),
        TextStyle::new(PERIOD_SIZE, theme.text.with_opacity(theme.period_opacity)),
        TextAlign::Left,
    );

    let overall_y = card.top + OVERALL_BASELINE;
    text(
        scene,
        x,
        overall_y,
        format_value(data.overall),
        TextStyle::new(OVERALL_SIZE, theme.text).weight(FontWeight::BOLD),
        TextAlign::Left,
    );
    text(
        scene,
        card.left + PRIOR_OVERALL_X,
        overall_y,
        format!("({})", format_value(data.prior_overall)),
        TextStyle::new(PRIOR_SIZE, theme.text.with_opacity(theme.prior_opacity)),
        TextAlign::Left,
    );
}

fn draw_metric_grid(scene: &mut Scene, left: f32, top: f32, right: f32, metrics: &[Metric], theme: &CardTheme) {
    scene.push(Primitive::Line {
        from: Point::new(left, top),
        to: Point::new(right, top),
        color: theme.divider,
        width: 1.0,
    });

    let cols = metrics.len();
    let col_w = if cols > 0 { (right - left) / cols as f32 } else { 0.0 };

    for (i, m) in metrics.iter().enumerate() {
        let cx = left + i as f32 * col_w;
        let mid = cx + col_w / 2.0;

        scene.push(Primitive::RoundRect {
            rect: Rect::from_ltwh(
                cx + TILE_GUTTER,
                top + TILE_VERTICAL_INSET,
                col_w - TILE_GUTTER * 2.0,
                GRID_HEIGHT - TILE_VERTICAL_INSET * 2.0,
            ),
            radius: TILE_RADIUS,
            fill: theme.tile_fill,
            stroke: Some(theme.tile_border),
            stroke_width: 1.0,
        });
        text(
            scene,
            mid,
            top + TILE_LABEL_BASELINE,
            m.label.clone(),
            TextStyle::new(TILE_LABEL_SIZE, theme.text.with_opacity(theme.tile_label_opacity)),
            TextAlign::Center,
        );
        text(
            scene,
            mid,
            top + TILE_VALUE_BASELINE,
            format!("{} ({})", format_value(m.value), format_value(m.prior)),
            TextStyle::new(TILE_VALUE_SIZE, theme.text).weight(FontWeight::SEMI_BOLD),
            TextAlign::Center,
        );
    }
}

fn draw_checklist(scene: &mut Scene, card: Rect, start_y: f32, items: &[ChecklistItem], theme: &CardTheme) {
    let dot_x = card.right() - CHECKLIST_DOT_INSET;
    for (idx, item) in items.iter().enumerate() {
        let y = start_y + idx as f32 * CHECKLIST_ROW;
        text(
            scene,
            card.left + TEXT_INDENT,
            y,
            item.text.clone(),
            TextStyle::new(CHECKLIST_SIZE, theme.checklist_text),
            TextAlign::Left,
        );
        let fill = if item.done { theme.done } else { theme.pending };
        scene.push(Primitive::Circle {
            center: Point::new(dot_x, y - CHECKLIST_DOT_RADIUS),
            radius: CHECKLIST_DOT_RADIUS,
            fill,
            stroke: Some(fill),
        });
    }
}
