// File: crates/graph-core/src/canvas.rs
// Summary: Drawing surface interface and the in-memory, append-only canvas document.

use crate::geometry::{Point, Size};
use crate::theme::Color;

/// Primitive drawing operations the layout issues.
/// Each call appends one element; later elements overlay earlier ones.
pub trait Canvas {
    fn draw_line(&mut self, start: Point, end: Point, colour: Option<Color>);
    fn draw_rect(&mut self, position: Point, size: Size, colour: Color);
    fn draw_text(&mut self, text: &str, position: Point, font_size: f32, colour: Option<Color>);
    /// Text rotated 90° about `position`.
    fn draw_vertical_text(&mut self, text: &str, position: Point, font_size: f32, colour: Option<Color>);
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Line {
        start: Point,
        end: Point,
        stroke: Color,
    },
    Rect {
        position: Point,
        size: Size,
        fill: Color,
    },
    /// Anchored at its horizontal middle, `position.y` is the baseline.
    Text {
        text: String,
        position: Point,
        font_size: f32,
        fill: Color,
        vertical: bool,
    },
}

/// Ordered list of drawn elements for one canvas, ready for a serializer.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub width: u32,
    pub height: u32,
    ink: Color,
    elements: Vec<Element>,
}

impl Document {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_ink(width, height, Color::BLACK)
    }

    /// `ink` is used wherever a draw call leaves the colour out.
    pub fn with_ink(width: u32, height: u32, ink: Color) -> Self {
        Self { width, height, ink, elements: Vec::new() }
    }

    pub fn elements(&self) -> &[Element] { &self.elements }
    pub fn len(&self) -> usize { self.elements.len() }
    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    pub fn rects(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter().filter(|e| matches!(e, Element::Rect { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter().filter(|e| matches!(e, Element::Text { .. }))
    }
}

impl Canvas for Document {
    fn draw_line(&mut self, start: Point, end: Point, colour: Option<Color>) {
        let stroke = colour.unwrap_or(self.ink);
        self.elements.push(Element::Line { start, end, stroke });
    }

    fn draw_rect(&mut self, position: Point, size: Size, colour: Color) {
        self.elements.push(Element::Rect { position, size, fill: colour });
    }

    fn draw_text(&mut self, text: &str, position: Point, font_size: f32, colour: Option<Color>) {
        let fill = colour.unwrap_or(self.ink);
        self.elements.push(Element::Text { text: text.to_string(), position, font_size, fill, vertical: false });
    }

    fn draw_vertical_text(&mut self, text: &str, position: Point, font_size: f32, colour: Option<Color>) {
        let fill = colour.unwrap_or(self.ink);
        self.elements.push(Element::Text { text: text.to_string(), position, font_size, fill, vertical: true });
    }
}
