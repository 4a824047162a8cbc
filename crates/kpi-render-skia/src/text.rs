// File: crates/kpi-render-skia/src/text.rs
// Summary: Text shaping and drawing through Skia textlayout, baseline-positioned like SVG text.

use kpi_core::scene::{FontWeight, TextAlign, TextStyle};
use skia_safe as skia;
use skia::font_style::{Slant, Weight, Width};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle};

use crate::to_sk_color;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn sk_weight(w: FontWeight) -> Weight {
        match w.0 {
            0..=499 => Weight::NORMAL,
            500..=649 => Weight::SEMI_BOLD,
            _ => Weight::BOLD,
        }
    }

    fn make_style(style: &TextStyle) -> skia::textlayout::TextStyle {
        let mut ts = skia::textlayout::TextStyle::new();
        ts.set_font_size(style.size.max(1.0));
        ts.set_color(to_sk_color(style.color));
        let slant = if style.italic { Slant::Italic } else { Slant::Upright };
        ts.set_font_style(skia::FontStyle::new(Self::sk_weight(style.weight), Width::NORMAL, slant));
        ts.set_font_families(&["Segoe UI", "Helvetica Neue", "Arial", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, style: &TextStyle) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(style));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw with `y` as the baseline; `Center` centres the line on `x`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, style: &TextStyle, align: TextAlign) {
        let mut p = self.layout(text, style);
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - p.longest_line() / 2.0,
        };
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (left, y - style.size * 0.8));
    }
}
