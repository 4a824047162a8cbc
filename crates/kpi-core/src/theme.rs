// File: crates/kpi-core/src/theme.rs
// Summary: Colours for the card's single visual theme.

/// Straight (non-premultiplied) RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a } }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self { Self::from_argb(255, r, g, b) }

    /// Same colour with `opacity` (0..=1) folded into alpha.
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    pub const TRANSPARENT: Rgba = Rgba::from_argb(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTheme {
    pub card_fill: Rgba,
    pub card_border: Rgba,
    pub text: Rgba,
    pub period_opacity: f32,
    pub prior_opacity: f32,
    pub tile_label_opacity: f32,
    pub divider: Rgba,
    pub tile_fill: Rgba,
    pub tile_border: Rgba,
    pub checklist_text: Rgba,
    pub done: Rgba,
    pub pending: Rgba,
}

impl CardTheme {
    pub const STANDARD: CardTheme = CardTheme {
        card_fill: Rgba::WHITE,
        card_border: Rgba::from_argb(20, 0, 0, 0),   // rgba(0,0,0,.08)
        text: Rgba::opaque(0x2d, 0x5a, 0x37),
        period_opacity: 0.85,
        prior_opacity: 0.7,
        tile_label_opacity: 0.75,
        divider: Rgba::from_argb(31, 0, 0, 0),       // rgba(0,0,0,.12)
        tile_fill: Rgba::opaque(0xf6, 0xf8, 0xf7),
        tile_border: Rgba::from_argb(15, 0, 0, 0),   // rgba(0,0,0,.06)
        checklist_text: Rgba::opaque(0x11, 0x4a, 0x1e),
        done: Rgba::opaque(0x0a, 0x8f, 0x3c),
        pending: Rgba::opaque(0xb9, 0xc7, 0xbd),
    };
}

impl Default for CardTheme {
    fn default() -> Self { Self::STANDARD }
}
