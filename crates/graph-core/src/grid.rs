// File: crates/graph-core/src/grid.rs
// Summary: Tick layout helpers mapping scale points to pixel offsets inside the plot bounds.

use crate::geometry::GraphBounds;
use crate::scale::AxesData;

/// Pixel offsets of every tick, measured from the plot origin.
/// `x_offsets` grow rightward, `y_offsets` grow upward.
#[derive(Clone, Debug, PartialEq)]
pub struct AxesGraphicalData {
    pub x_offsets: Vec<f32>,
    pub y_offsets: Vec<f32>,
}

impl AxesGraphicalData {
    pub fn from_axes(axes: &AxesData, bounds: &GraphBounds) -> Self {
        Self {
            x_offsets: category_offsets(axes.x_labels.len(), bounds.width),
            y_offsets: linspace(0.0, bounds.height, axes.y_points.len()),
        }
    }

    /// Length of one x section, i.e. the distance from the y-axis to the first category.
    pub fn x_section(&self) -> f32 {
        self.x_offsets.first().copied().unwrap_or(0.0)
    }
}

/// `steps` evenly spaced values from `start` to `end` inclusive.
/// A single step collapses to `[start]`.
pub fn linspace(start: f32, end: f32, steps: usize) -> Vec<f32> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f32 - 1.0);
            (0..steps).map(|i| start + step * i as f32).collect()
        }
    }
}

/// Centres for `count` categories: `length` is cut into `count + 1` equal
/// sections and the ticks sit on the interior boundaries, never on either end.
pub fn category_offsets(count: usize, length: f32) -> Vec<f32> {
    let section = length / (count as f32 + 1.0);
    (1..=count).map(|i| section * i as f32).collect()
}
