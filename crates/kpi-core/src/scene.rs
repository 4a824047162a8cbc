// File: crates/kpi-core/src/scene.rs
// Summary: Retained list of drawing primitives, renderer-agnostic.

use crate::geometry::{Point, Rect};
use crate::theme::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// CSS-style numeric weight (400 regular, 600 semibold, 700 bold).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const SEMI_BOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub color: Rgba,
    pub italic: bool,
}

impl TextStyle {
    pub fn new(size: f32, color: Rgba) -> Self {
        Self { size, weight: FontWeight::NORMAL, color, italic: false }
    }
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// One drawing primitive. Text `origin.y` is the baseline.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    RoundRect { rect: Rect, radius: f32, fill: Rgba, stroke: Option<Rgba>, stroke_width: f32 },
    Text { origin: Point, content: String, style: TextStyle, align: TextAlign },
    Line { from: Point, to: Point, color: Rgba, width: f32 },
    Circle { center: Point, radius: f32, fill: Rgba, stroke: Option<Rgba> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    RoundRect,
    Text,
    Line,
    Circle,
}

impl Primitive {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::RoundRect { .. } => PrimitiveKind::RoundRect,
            Primitive::Text { .. } => PrimitiveKind::Text,
            Primitive::Line { .. } => PrimitiveKind::Line,
            Primitive::Circle { .. } => PrimitiveKind::Circle,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Primitive::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}

/// Everything drawn on a surface for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, p: Primitive) { self.primitives.push(p); }

    pub fn clear(&mut self) { self.primitives.clear(); }

    pub fn len(&self) -> usize { self.primitives.len() }

    pub fn is_empty(&self) -> bool { self.primitives.is_empty() }

    pub fn primitives(&self) -> &[Primitive] { &self.primitives }

    pub fn count(&self, kind: PrimitiveKind) -> usize {
        self.primitives.iter().filter(|p| p.kind() == kind).count()
    }

    /// Text contents in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.primitives.iter().filter_map(Primitive::text).collect()
    }
}
