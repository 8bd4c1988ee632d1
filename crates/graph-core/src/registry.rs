// File: crates/graph-core/src/registry.rs
// Summary: Chart-type tags and the factory selecting a layout strategy for them.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::bar::BarGraphBuilder;
use crate::canvas::Document;
use crate::chart::GraphBuilder;
use crate::config::Configuration;
use crate::error::{GraphError, Result};
use crate::model::Graph;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
}

impl ChartKind {
    /// Tag used in graph descriptions.
    pub fn tag(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
        }
    }

    pub fn builder(&self, configuration: Configuration) -> Box<dyn GraphBuilder> {
        match self {
            ChartKind::Bar => Box::new(BarGraphBuilder::new(configuration)),
        }
    }
}

impl FromStr for ChartKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bar" => Ok(ChartKind::Bar),
            other => Err(GraphError::UnsupportedChartType(other.to_string())),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Builder for the chart kind named by `tag`.
pub fn create(tag: &str, configuration: Configuration) -> Result<Box<dyn GraphBuilder>> {
    let kind = tag.parse::<ChartKind>()?;
    debug!("selected {kind} layout");
    Ok(kind.builder(configuration))
}

/// Lay out every graph on the configuration's default canvas, independently.
/// One result per graph, in order; a failure affects only its own graph.
pub fn build_all(graphs: &[Graph], configuration: &Configuration) -> Vec<Result<Document>> {
    graphs
        .iter()
        .map(|graph| {
            let result = create(&graph.kind, *configuration).and_then(|b| b.build_default(graph));
            if let Err(e) = &result {
                warn!("graph '{}' failed to lay out: {e}", graph.title);
            }
            result
        })
        .collect()
}
