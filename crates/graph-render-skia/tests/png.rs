// File: crates/graph-render-skia/tests/png.rs
// Purpose: Rasterize a laid-out bar graph and check the decoded PNG pixels.

use graph_core::{create, Configuration, Document, Element, Graph, GraphDatum};
use graph_render_skia::{render_to_png, render_to_png_bytes, RenderOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_document() -> Document {
    let graph = Graph::new("bar", "Greetings", "Word", "Score").with_data(vec![
        GraphDatum::new("Hello", 1.0),
        GraphDatum::new("Goodbye", 2.5),
        GraphDatum::new("Another", 1.2),
        GraphDatum::new("One", 0.2),
    ]);
    create("bar", Configuration::default())
        .expect("bar builder")
        .build_with_rng(1000, 1000, &graph, &mut StdRng::seed_from_u64(3))
        .expect("layout")
}

#[test]
fn png_matches_document_size_and_colours() {
    let doc = sample_document();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let bytes = render_to_png_bytes(&doc, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (1000, 1000));

    // Outside the plot: background
    assert_eq!(img.get_pixel(10, 10).0, [255, 255, 255, 255]);

    // Inside the first bar (x 220..300, y 633..900)
    let fill = doc
        .elements()
        .iter()
        .find_map(|e| match e {
            Element::Rect { fill, .. } => Some(*fill),
            _ => None,
        })
        .expect("a bar");
    assert_eq!(img.get_pixel(260, 800).0, [fill.r, fill.g, fill.b, 255]);
}

#[test]
fn png_written_with_labels() {
    let doc = sample_document();
    let out = std::path::PathBuf::from("target/test_out/bar_graph.png");
    render_to_png(&doc, &RenderOptions::default(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}
