// File: crates/kpi-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Width and height are clamped to zero so a tiny container never yields negative boxes.
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width: width.max(0.0), height: height.max(0.0) }
    }
    pub fn right(&self) -> f32 { self.left + self.width }

    /// Shrink by `pad` on every side.
    pub fn inset(&self, pad: f32) -> Self {
        Self::from_ltwh(self.left + pad, self.top + pad, self.width - pad * 2.0, self.height - pad * 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }
}
