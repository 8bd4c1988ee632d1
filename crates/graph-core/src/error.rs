// File: crates/graph-core/src/error.rs
// Summary: Error taxonomy for graph layout.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("canvas {width}x{height} is too small for a {margin}px margin")]
    InvalidDimension { width: u32, height: u32, margin: u32 },

    #[error("graph has no data points")]
    EmptyGraph,

    #[error("unsupported chart type '{0}'")]
    UnsupportedChartType(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
