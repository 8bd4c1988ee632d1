// File: crates/graph-core/src/types.rs
// Summary: Shared layout constants (canvas defaults, margins, tick and label offsets).

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 1000;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 1000;

/// Inset of the plot area from every canvas edge, in pixels. Not configurable.
pub const MARGIN: u32 = 100;

/// Number of equal intervals the y-axis range is split into.
/// Revisions of the layout used 4 or 5; 4 is the one in use.
pub const Y_SCALE_INTERVALS: u32 = 4;

/// Length of the tick marks ("pips") drawn off each axis.
pub const PIP_LENGTH: f32 = 5.0;
/// Gap between an x tick and its category label.
pub const SCALE_LABEL_MARGIN: f32 = 5.0;
/// Horizontal distance from a y tick to its numeric label anchor.
pub const Y_LABEL_OFFSET: f32 = 20.0;
/// Gap used above the title and below the plot for the x-axis label.
pub const TITLE_MARGIN: f32 = 10.0;

/// Stroke width of every line element.
pub const STROKE_WIDTH: f32 = 2.0;
