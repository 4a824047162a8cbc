// File: crates/kpi-render-skia/src/lib.rs
// Summary: Skia renderer crate; rasterizes card scenes and render targets on CPU surfaces.

pub mod error;
pub mod text;

use kpi_core::scene::{Primitive, Scene};
use kpi_core::theme::Rgba;
use kpi_core::types::{HEIGHT, WIDTH};
use kpi_core::{layout_message, CardTheme, RenderTarget};
use skia_safe as skia;

pub use error::{RenderError, Result};
pub use text::TextShaper;

/// `width`/`height` size the `render_scene_*` output only; target rendering uses the target's own size.
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: Rgba,
    /// Skip text primitives (keeps pixel output independent of installed fonts).
    pub draw_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH as i32,
            height: HEIGHT as i32,
            background: Rgba::TRANSPARENT,
            draw_text: true,
        }
    }
}

pub(crate) fn to_sk_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub struct SkiaRenderer {
    pub options: RenderOptions,
    shaper: TextShaper,
}

impl SkiaRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options, shaper: TextShaper::new() }
    }

    fn surface(&self, width: i32, height: i32) -> Result<skia::Surface> {
        let (w, h) = (width.max(1), height.max(1));
        skia::surfaces::raster_n32_premul((w, h)).ok_or(RenderError::Surface { width: w, height: h })
    }

    fn paint_scene(&self, canvas: &skia::Canvas, scene: &Scene) {
        canvas.clear(to_sk_color(self.options.background));
        for p in scene.primitives() {
            self.draw_primitive(canvas, p);
        }
    }

    fn draw_primitive(&self, canvas: &skia::Canvas, p: &Primitive) {
        match p {
            Primitive::RoundRect { rect, radius, fill, stroke, stroke_width } => {
                let r = skia::Rect::from_xywh(rect.left, rect.top, rect.width, rect.height);
                let rrect = skia::RRect::new_rect_xy(r, *radius, *radius);
                canvas.draw_rrect(&rrect, &fill_paint(*fill));
                if let Some(s) = stroke {
                    canvas.draw_rrect(&rrect, &stroke_paint(*s, *stroke_width));
                }
            }
            Primitive::Line { from, to, color, width } => {
                canvas.draw_line((from.x, from.y), (to.x, to.y), &stroke_paint(*color, *width));
            }
            Primitive::Circle { center, radius, fill, stroke } => {
                canvas.draw_circle((center.x, center.y), *radius, &fill_paint(*fill));
                if let Some(s) = stroke {
                    canvas.draw_circle((center.x, center.y), *radius, &stroke_paint(*s, 1.0));
                }
            }
            Primitive::Text { origin, content, style, align } => {
                if self.options.draw_text {
                    self.shaper.draw(canvas, content, origin.x, origin.y, style, *align);
                }
            }
        }
    }

    /// Rasterize `scene` at the configured size into a surface snapshot.
    fn raster(&self, scene: &Scene, width: i32, height: i32) -> Result<skia::Surface> {
        let mut surface = self.surface(width, height)?;
        self.paint_scene(surface.canvas(), scene);
        log::trace!("rasterized {} primitives at {}x{}", scene.len(), width, height);
        Ok(surface)
    }

    /// Returns (pixels, width, height, stride) with straight-alpha RGBA8 pixels.
    pub fn render_scene_rgba8(&self, scene: &Scene) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.options.width.max(1), self.options.height.max(1));
        let mut surface = self.raster(scene, w, h)?;
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    pub fn render_scene_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let mut surface = self.raster(scene, self.options.width, self.options.height)?;
        encode_png(&mut surface)
    }

    /// Rasterize whatever the target currently shows: its card, its fallback text, or nothing.
    pub fn render_target_png_bytes(&self, target: &RenderTarget) -> Result<Vec<u8>> {
        let scene = target_scene(target);
        let mut surface = self.raster(&scene, target.width() as i32, target.height() as i32)?;
        encode_png(&mut surface)
    }

    pub fn render_target_to_png(&self, target: &RenderTarget, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let data = self.render_target_png_bytes(target)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new(RenderOptions::default()) }
}

/// Scene shown by a target right now.
pub fn target_scene(target: &RenderTarget) -> Scene {
    match (target.session(), target.text()) {
        (Some(session), _) => session.scene().clone(),
        (None, Some(message)) => layout_message(message, &CardTheme::STANDARD),
        (None, None) => Scene::new(),
    }
}

// ---- helpers ----------------------------------------------------------------

fn fill_paint(color: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_sk_color(color));
    paint
}

fn stroke_paint(color: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(to_sk_color(color));
    paint
}

fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(RenderError::Encode)?;
    Ok(data.as_bytes().to_vec())
}
