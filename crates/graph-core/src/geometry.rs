// File: crates/graph-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and the plot bounds calculation.

use crate::error::{GraphError, Result};
use crate::types::MARGIN;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Pixel rectangle the axes and bars are drawn in.
///
/// `origin` is the bottom-left corner in chart terms, so in canvas
/// coordinates (y grows downward) the plot spans
/// `origin.y - height ..= origin.y` vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphBounds {
    pub origin: Point,
    pub width: f32,
    pub height: f32,
}

impl GraphBounds {
    /// Inset a `width` x `height` canvas by [`MARGIN`] on every side.
    ///
    /// Fails with [`GraphError::InvalidDimension`] when nothing positive is left.
    pub fn from_canvas(width: u32, height: u32) -> Result<Self> {
        let inner_w = i64::from(width) - 2 * i64::from(MARGIN);
        let inner_h = i64::from(height) - 2 * i64::from(MARGIN);
        if inner_w <= 0 || inner_h <= 0 {
            return Err(GraphError::InvalidDimension { width, height, margin: MARGIN });
        }
        Ok(Self {
            origin: Point::new(MARGIN as f32, (height - MARGIN) as f32),
            width: inner_w as f32,
            height: inner_h as f32,
        })
    }

    pub fn left(&self) -> f32 { self.origin.x }
    pub fn right(&self) -> f32 { self.origin.x + self.width }
    pub fn top(&self) -> f32 { self.origin.y - self.height }
    pub fn bottom(&self) -> f32 { self.origin.y }

    /// Horizontal centre of the plot.
    pub fn center_x(&self) -> f32 { self.origin.x + self.width / 2.0 }
    /// Vertical centre of the plot.
    pub fn center_y(&self) -> f32 { self.origin.y - self.height / 2.0 }
}
