// File: crates/graph-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; replays a canvas document onto a surface and encodes PNG.

use anyhow::{Context, Result};
use graph_core::types::STROKE_WIDTH;
use graph_core::{Color, Document, Element, Theme};
use log::debug;
use skia_safe as skia;

mod text;

pub use text::TextShaper;

pub struct RenderOptions {
    pub background: Color,
    /// Text off gives pixels that do not depend on installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Theme::default().background,
            draw_labels: true,
        }
    }
}

/// Render `doc` to PNG bytes on a CPU raster surface of the document's size.
pub fn render_to_png_bytes(doc: &Document, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((doc.width as i32, doc.height as i32))
        .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", doc.width, doc.height))?;
    let canvas = surface.canvas();
    canvas.clear(to_skia(opts.background));

    let shaper = opts.draw_labels.then(TextShaper::new);
    for element in doc.elements() {
        draw_element(canvas, element, shaper.as_ref());
    }
    debug!("rasterized {} elements at {}x{}", doc.len(), doc.width, doc.height);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render `doc` to a PNG file at `output_png_path`, creating parent directories.
pub fn render_to_png(doc: &Document, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(doc, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn draw_element(canvas: &skia::Canvas, element: &Element, shaper: Option<&TextShaper>) {
    match element {
        Element::Line { start, end, stroke } => {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(STROKE_WIDTH);
            paint.set_color(to_skia(*stroke));
            canvas.draw_line((start.x, start.y), (end.x, end.y), &paint);
        }
        Element::Rect { position, size, fill } => {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Fill);
            paint.set_color(to_skia(*fill));
            let rect = skia::Rect::from_xywh(position.x, position.y, size.width, size.height);
            canvas.draw_rect(rect, &paint);
        }
        Element::Text { text, position, font_size, fill, vertical } => {
            let Some(shaper) = shaper else { return };
            if *vertical {
                canvas.save();
                canvas.translate((position.x, position.y));
                canvas.rotate(90.0, None);
                shaper.draw_centered(canvas, text, 0.0, 0.0, *font_size, to_skia(*fill));
                canvas.restore();
            } else {
                shaper.draw_centered(canvas, text, position.x, position.y, *font_size, to_skia(*fill));
            }
        }
    }
}
