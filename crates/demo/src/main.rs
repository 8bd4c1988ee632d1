// File: crates/demo/src/main.rs
// Summary: Demo lays out a small batch of bar graphs and writes one SVG and one PNG per graph.

use anyhow::{Context, Result};
use graph_core::{build_all, to_svg, Configuration, Graph, GraphCollection, GraphDatum};
use graph_render_skia::{render_to_png, RenderOptions};
use log::info;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();

    let configuration = Configuration::default();
    let collection = sample_collection();
    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create '{}'", out_dir.display()))?;

    let results = build_all(&collection.graphs, &configuration);
    let mut failed = 0usize;
    for (i, (graph, result)) in collection.graphs.iter().zip(results).enumerate() {
        let doc = match result {
            Ok(doc) => doc,
            Err(e) => {
                eprintln!("Skipping '{}': {e}", graph.title);
                failed += 1;
                continue;
            }
        };

        let svg_path = out_name(&out_dir, i, &graph.title, "svg");
        std::fs::write(&svg_path, to_svg(&doc))
            .with_context(|| format!("failed to write '{}'", svg_path.display()))?;
        println!("Wrote {}", svg_path.display());

        let png_path = svg_path.with_extension("png");
        render_to_png(&doc, &RenderOptions::default(), &png_path)?;
        println!("Wrote {}", png_path.display());
    }
    info!("{} of {} graphs written", collection.graphs.len() - failed, collection.graphs.len());

    if failed > 0 {
        anyhow::bail!("{failed} graph(s) failed to lay out");
    }
    Ok(())
}

fn sample_collection() -> GraphCollection {
    GraphCollection {
        graphs: vec![
            Graph::new("bar", "Greetings", "Word", "Score").with_data(vec![
                GraphDatum::new("Hello", 1.0),
                GraphDatum::new("Goodbye", 2.5),
                GraphDatum::new("Another", 1.2),
                GraphDatum::new("One", 0.2),
            ]),
            Graph::new("bar", "Rainfall", "Month", "Millimetres").with_data(vec![
                GraphDatum::new("Jan", 78.0),
                GraphDatum::new("Feb", 52.5),
                GraphDatum::new("Mar", "61.2"),
                GraphDatum::new("Apr", 44.0),
                GraphDatum::new("May", 49.9),
                GraphDatum::new("Jun", 45.1),
            ]),
            Graph::new("bar", "Single", "Item", "Count").with_data(vec![GraphDatum::new("Only", 5.0)]),
        ],
    }
}

/// Produce output file name like target/out/graph_<index>_<slug>.<ext>
fn out_name(dir: &Path, index: usize, title: &str, ext: &str) -> PathBuf {
    let slug: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    dir.join(format!("graph_{index}_{slug}.{ext}"))
}
