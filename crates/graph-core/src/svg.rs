// File: crates/graph-core/src/svg.rs
// Summary: Serialize a canvas document to SVG markup.

use std::fmt::Write;

use crate::canvas::{Document, Element};
use crate::types::STROKE_WIDTH;

/// SVG markup for `doc`: one element per drawn item, in document order.
pub fn to_svg(doc: &Document) -> String {
    let mut out = String::with_capacity(128 + doc.len() * 96);
    // `write!` into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{}" height="{}">"#,
        doc.width, doc.height
    );
    for element in doc.elements() {
        let _ = match element {
            Element::Line { start, end, stroke } => writeln!(
                out,
                r#"  <path d="M {} {} L {} {}" stroke="{}" stroke-width="{}" />"#,
                start.x,
                start.y,
                end.x,
                end.y,
                stroke.to_hex(),
                STROKE_WIDTH
            ),
            Element::Rect { position, size, fill } => writeln!(
                out,
                r#"  <rect class="bar" x="{}" y="{}" width="{}" height="{}" fill="{}" />"#,
                position.x,
                position.y,
                size.width,
                size.height,
                fill.to_hex()
            ),
            Element::Text { text, position, font_size, fill, vertical: false } => writeln!(
                out,
                r#"  <text x="{}" y="{}" text-anchor="middle" font-size="{}" fill="{}">{}</text>"#,
                position.x,
                position.y,
                font_size,
                fill.to_hex(),
                escape(text)
            ),
            Element::Text { text, position, font_size, fill, vertical: true } => writeln!(
                out,
                r#"  <text transform="translate({},{}) rotate(90)" text-anchor="middle" font-size="{}" fill="{}">{}</text>"#,
                position.x,
                position.y,
                font_size,
                fill.to_hex(),
                escape(text)
            ),
        };
    }
    out.push_str("</svg>\n");
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
