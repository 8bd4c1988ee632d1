// File: crates/graph-core/src/chart.rs
// Summary: Layout strategy trait shared by every chart kind, plus the chart-level labels.

use log::debug;
use rand::RngCore;

use crate::canvas::{Canvas, Document};
use crate::config::Configuration;
use crate::error::{GraphError, Result};
use crate::geometry::{GraphBounds, Point};
use crate::model::{Graph, GraphDatum};
use crate::registry::ChartKind;
use crate::scale::AxesData;
use crate::theme::Theme;
use crate::types::TITLE_MARGIN;

/// A chart kind's layout: how it derives axes from data and how it draws itself.
///
/// Implementors supply [`compute_axes`](Self::compute_axes) and
/// [`build_image`](Self::build_image); the `build*` entry points sequence
/// validation, bounds and drawing and should not need overriding.
pub trait GraphBuilder: Send + Sync {
    fn kind(&self) -> ChartKind;
    fn configuration(&self) -> &Configuration;
    fn theme(&self) -> &Theme;

    fn compute_axes(&self, data: &[GraphDatum]) -> Result<AxesData>;

    /// Issue every draw call for `graph` onto `canvas`, in z-order.
    fn build_image(
        &self,
        canvas: &mut dyn Canvas,
        bounds: &GraphBounds,
        graph: &Graph,
        axes: &AxesData,
        rng: &mut dyn RngCore,
    ) -> Result<()>;

    /// Lay out `graph` on a `width` x `height` canvas, colouring with the thread RNG.
    fn build(&self, width: u32, height: u32, graph: &Graph) -> Result<Document> {
        self.build_with_rng(width, height, graph, &mut rand::thread_rng())
    }

    /// Lay out `graph` on the configuration's default canvas size.
    fn build_default(&self, graph: &Graph) -> Result<Document> {
        let cfg = self.configuration();
        self.build(cfg.default_width, cfg.default_height, graph)
    }

    /// Same as [`build`](Self::build) with an explicit colour source.
    fn build_with_rng(
        &self,
        width: u32,
        height: u32,
        graph: &Graph,
        rng: &mut dyn RngCore,
    ) -> Result<Document> {
        if graph.data.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let axes = self.compute_axes(&graph.data)?;
        let bounds = GraphBounds::from_canvas(width, height)?;
        debug!(
            "layout '{}' ({}): {} categories, {} y ticks, y_max={}, plot {}x{}",
            graph.title,
            self.kind().tag(),
            axes.x_labels.len(),
            axes.y_points.len(),
            axes.y_max,
            bounds.width,
            bounds.height
        );

        let mut doc = Document::with_ink(width, height, self.theme().ink);
        self.build_image(&mut doc, &bounds, graph, &axes, rng)?;
        Ok(doc)
    }
}

/// Title above the plot, x-axis label below it, y-axis label rotated on its left.
pub fn draw_labels(canvas: &mut dyn Canvas, bounds: &GraphBounds, graph: &Graph, cfg: &Configuration) {
    let h1 = cfg.h1_font_size as f32;
    let h2 = cfg.h2_font_size as f32;

    canvas.draw_text(&graph.title, Point::new(bounds.center_x(), h1 + TITLE_MARGIN), h1, None);
    canvas.draw_text(
        &graph.x_axis_label,
        Point::new(bounds.center_x(), bounds.bottom() + TITLE_MARGIN + h2 * 2.0),
        h2,
        None,
    );
    canvas.draw_vertical_text(&graph.y_axis_label, Point::new(h2, bounds.center_y()), h2, None);
}
