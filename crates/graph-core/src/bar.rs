// File: crates/graph-core/src/bar.rs
// Summary: Bar chart layout: per-bar geometry and the bar graph builder.

use log::trace;
use rand::RngCore;

use crate::canvas::Canvas;
use crate::chart::{draw_labels, GraphBuilder};
use crate::config::Configuration;
use crate::error::{GraphError, Result};
use crate::geometry::{GraphBounds, Point, Size};
use crate::grid::AxesGraphicalData;
use crate::model::{Graph, GraphDatum};
use crate::registry::ChartKind;
use crate::scale::AxesData;
use crate::theme::{Color, Theme};
use crate::types::{PIP_LENGTH, SCALE_LABEL_MARGIN, Y_LABEL_OFFSET, Y_SCALE_INTERVALS};

/// Canvas-space rectangle of one bar. (`x`, `y`) is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub colour: Color,
}

impl BarGeometry {
    pub fn position(&self) -> Point { Point::new(self.x, self.y) }
    pub fn size(&self) -> Size { Size::new(self.width, self.height) }
}

/// Per-chart bar parameters; width and colour are fixed once and shared by every bar.
#[derive(Clone, Copy, Debug)]
pub struct BarGeometryCalculator {
    bounds: GraphBounds,
    y_max: f64,
    width: f32,
    colour: Color,
}

impl BarGeometryCalculator {
    /// Bars are half as wide as one x section. Fails unless `y_max` is positive,
    /// since heights are expressed as a fraction of it.
    pub fn new(bounds: GraphBounds, graphical: &AxesGraphicalData, y_max: f64, colour: Color) -> Result<Self> {
        if y_max <= 0.0 {
            return Err(GraphError::InvalidData(
                format!("y-axis maximum {y_max} is not positive; bar heights are undefined"),
            ));
        }
        Ok(Self { bounds, y_max, width: graphical.x_section() / 2.0, colour })
    }

    pub fn width(&self) -> f32 { self.width }
    pub fn colour(&self) -> Color { self.colour }

    /// Pixel height of `value`, rounded to whole pixels.
    pub fn height(&self, value: f64) -> f32 {
        ((value / self.y_max) * f64::from(self.bounds.height)).round() as f32
    }

    /// Bar centred on the category tick at `x_offset`, growing up from the x-axis.
    pub fn geometry(&self, value: f64, x_offset: f32) -> BarGeometry {
        let height = self.height(value);
        BarGeometry {
            x: self.bounds.origin.x + x_offset - self.width / 2.0,
            y: self.bounds.origin.y - height,
            width: self.width,
            height,
            colour: self.colour,
        }
    }

    /// Geometry for every datum, in input order. Bars grow up from zero,
    /// so a negative value is rejected.
    pub fn layout(&self, data: &[GraphDatum], x_offsets: &[f32]) -> Result<Vec<BarGeometry>> {
        data.iter()
            .zip(x_offsets)
            .enumerate()
            .map(|(i, (datum, &offset))| -> Result<BarGeometry> {
                let value = datum.y.as_f64()?;
                if value < 0.0 {
                    return Err(GraphError::InvalidData(format!(
                        "value {value} at position {i} is negative; bars start at zero"
                    )));
                }
                Ok(self.geometry(value, offset))
            })
            .collect()
    }
}

/// Vertical bars, one per category, over a numeric y-axis.
#[derive(Clone, Debug)]
pub struct BarGraphBuilder {
    configuration: Configuration,
    theme: Theme,
}

impl BarGraphBuilder {
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration, theme: Theme::default() }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn draw_axes(&self, canvas: &mut dyn Canvas, bounds: &GraphBounds, axes: &AxesData, graphical: &AxesGraphicalData) {
        let origin = bounds.origin;
        canvas.draw_line(origin, Point::new(origin.x, bounds.top()), None);
        canvas.draw_line(origin, Point::new(bounds.right(), origin.y), None);

        let font_size = self.configuration.font_size as f32;

        for (value, &offset) in axes.y_points.iter().zip(&graphical.y_offsets) {
            let pip_start = Point::new(origin.x, origin.y - offset);
            let pip_end = Point::new(origin.x - PIP_LENGTH, pip_start.y);
            canvas.draw_line(pip_start, pip_end, None);
            canvas.draw_line(pip_start, Point::new(bounds.right(), pip_start.y), Some(self.theme.gridline));

            let label_at = Point::new(pip_end.x - Y_LABEL_OFFSET, pip_end.y + font_size / 4.0);
            canvas.draw_text(&value.to_string(), label_at, font_size, None);
        }
        trace!("drew {} y ticks", axes.y_points.len());

        for (label, &offset) in axes.x_labels.iter().zip(&graphical.x_offsets) {
            let pip_start = Point::new(origin.x + offset, origin.y);
            let pip_end = Point::new(pip_start.x, origin.y + PIP_LENGTH);
            canvas.draw_line(pip_start, pip_end, None);

            let label_at = Point::new(pip_end.x, pip_end.y + SCALE_LABEL_MARGIN + font_size);
            canvas.draw_text(label, label_at, font_size, None);
        }
        trace!("drew {} x ticks", axes.x_labels.len());
    }

    fn draw_bars(&self, canvas: &mut dyn Canvas, data: &[GraphDatum], bars: &[BarGeometry]) {
        let font_size = self.configuration.h3_font_size as f32;
        for (datum, bar) in data.iter().zip(bars) {
            canvas.draw_rect(bar.position(), bar.size(), bar.colour);
            let label_at = Point::new(bar.x + bar.width / 2.0, bar.y + font_size);
            canvas.draw_text(&datum.y.to_string(), label_at, font_size, Some(self.theme.bar_label));
        }
        trace!("drew {} bars", bars.len());
    }
}

impl GraphBuilder for BarGraphBuilder {
    fn kind(&self) -> ChartKind { ChartKind::Bar }
    fn configuration(&self) -> &Configuration { &self.configuration }
    fn theme(&self) -> &Theme { &self.theme }

    fn compute_axes(&self, data: &[GraphDatum]) -> Result<AxesData> {
        AxesData::from_data(data, Y_SCALE_INTERVALS)
    }

    fn build_image(
        &self,
        canvas: &mut dyn Canvas,
        bounds: &GraphBounds,
        graph: &Graph,
        axes: &AxesData,
        rng: &mut dyn RngCore,
    ) -> Result<()> {
        let graphical = AxesGraphicalData::from_axes(axes, bounds);

        // Bars are resolved before any draw call; a failing datum leaves the canvas untouched.
        let colour = self.theme.pick_bar_colour(rng);
        let bars = BarGeometryCalculator::new(*bounds, &graphical, axes.y_max, colour)?
            .layout(&graph.data, &graphical.x_offsets)?;

        self.draw_axes(canvas, bounds, axes, &graphical);
        self.draw_bars(canvas, &graph.data, &bars);
        draw_labels(canvas, bounds, graph, &self.configuration);
        Ok(())
    }
}
