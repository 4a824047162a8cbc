// File: crates/kpi-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic cards (text disabled) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use kpi_core::{draw_card, ChecklistItem, DisplayModel, Metric, RenderTarget};
use kpi_render_skia::{RenderOptions, SkiaRenderer};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render(model: DisplayModel) -> Vec<u8> {
    let mut target = RenderTarget::new(480, 300);
    draw_card(&mut target, model);
    let opts = RenderOptions { draw_text: false, ..RenderOptions::default() };
    SkiaRenderer::new(opts).render_target_png_bytes(&target).expect("render bytes")
}

fn base() -> DisplayModel {
    DisplayModel {
        office: "Austin".into(),
        month: "June".into(),
        overall: 92.3,
        prior_overall: 88.1,
        metrics: vec![
            Metric::new("GM", 4.5, 4.0),
            Metric::new("Production", 97.0, 96.0),
            Metric::new("Stability", 99.1, 99.0),
            Metric::new("Amnts.", 3.2, 3.1),
        ],
        checklist: None,
    }
}

#[test]
fn golden_card() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/card.png");
    write_or_compare(&path, &render(base()));
}

#[test]
fn golden_card_with_checklist() {
    let mut m = base();
    m.checklist = Some(vec![
        ChecklistItem { text: "Safety walk".into(), done: true },
        ChecklistItem { text: "Inventory".into(), done: false },
    ]);
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/card_checklist.png");
    write_or_compare(&path, &render(m));
}
