// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports the layout engine, data model and canvas document.

pub mod error;
pub mod types;
pub mod geometry;
pub mod config;
pub mod model;
pub mod scale;
pub mod grid;
pub mod theme;
pub mod canvas;
pub mod chart;
pub mod bar;
pub mod registry;
pub mod svg;

pub use error::{GraphError, Result};
pub use geometry::{GraphBounds, Point, Size};
pub use config::Configuration;
pub use model::{DatumValue, Graph, GraphCollection, GraphDatum};
pub use scale::AxesData;
pub use grid::AxesGraphicalData;
pub use theme::{Color, Theme};
pub use canvas::{Canvas, Document, Element};
pub use chart::GraphBuilder;
pub use bar::{BarGeometry, BarGeometryCalculator, BarGraphBuilder};
pub use registry::{build_all, create, ChartKind};
pub use svg::to_svg;
