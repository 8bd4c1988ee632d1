// File: crates/graph-core/src/scale.rs
// Summary: Axis scale derivation: numeric y scale points and categorical x labels.

use crate::error::{GraphError, Result};
use crate::model::GraphDatum;

/// Abstract (pre-pixel) axis description for one graph.
#[derive(Clone, Debug, PartialEq)]
pub struct AxesData {
    /// Category labels in input order, one per datum.
    pub x_labels: Vec<String>,
    /// Strictly increasing y tick values starting at 0.
    pub y_points: Vec<f64>,
    /// Rounded-up maximum of the data; the value the top of the plot represents.
    pub y_max: f64,
}

impl AxesData {
    pub fn new(x_labels: Vec<String>, y_points: Vec<f64>, y_max: f64) -> Self {
        Self { x_labels, y_points, y_max }
    }

    /// Derive both axes from `data` with `intervals` equal y sections.
    pub fn from_data(data: &[GraphDatum], intervals: u32) -> Result<Self> {
        let y_max = y_axis_max(data)?;
        let y_points = y_scale_points(y_max, intervals);
        Ok(Self::new(x_axis_labels(data), y_points, y_max))
    }
}

/// Ceiling of the largest y value.
///
/// Every y must parse to a finite number.
pub fn y_axis_max(data: &[GraphDatum]) -> Result<f64> {
    if data.is_empty() {
        return Err(GraphError::InvalidData("no values to derive a y-axis maximum from".into()));
    }
    let mut max = f64::NEG_INFINITY;
    for datum in data {
        max = max.max(datum.y.as_f64()?);
    }
    Ok(max.ceil())
}

/// Tick values `0, interval, 2*interval, ...` kept while `<= max`, with `interval = max / intervals`.
///
/// Each point is computed as `(i / intervals) * max` rather than by repeated
/// addition: the fraction never exceeds 1, so huge maxima cannot overflow,
/// and the final tick lands exactly on `max`. A zero maximum (or zero
/// interval count) yields the single tick `[0]`.
pub fn y_scale_points(max: f64, intervals: u32) -> Vec<f64> {
    if max <= 0.0 || intervals == 0 {
        return vec![0.0];
    }
    let k = f64::from(intervals);
    (0u32..)
        .map(|i| (f64::from(i) / k) * max)
        .take_while(|&v| v <= max)
        .collect()
}

/// Textual form of every x, in input order. No sorting, no deduplication.
pub fn x_axis_labels(data: &[GraphDatum]) -> Vec<String> {
    data.iter().map(|d| d.x.to_string()).collect()
}
