use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kpi_core::{layout_card, CardTheme, DisplayModel, Metric};
use kpi_render_skia::{RenderOptions, SkiaRenderer};

fn card() -> DisplayModel {
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

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &(w, h) in &[(480i32, 300i32), (1280, 300)] {
        group.bench_function(format!("card_{w}x{h}"), |b| {
            let scene = layout_card(w as f32, h as f32, &card(), &CardTheme::STANDARD);
            let renderer = SkiaRenderer::new(RenderOptions { width: w, height: h, ..RenderOptions::default() });
            b.iter(|| -> Result<()> {
                let bytes = renderer.render_scene_png_bytes(&scene)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
