// File: crates/graph-core/tests/bar.rs
// Purpose: Validate bar width, height and position derived from values and plot bounds.

use graph_core::{AxesData, AxesGraphicalData, BarGeometryCalculator, Color, GraphBounds, GraphDatum, GraphError};

fn calculator(data: &[GraphDatum]) -> (BarGeometryCalculator, AxesGraphicalData) {
    let bounds = GraphBounds::from_canvas(1000, 1000).unwrap();
    let axes = AxesData::from_data(data, 4).unwrap();
    let g = AxesGraphicalData::from_axes(&axes, &bounds);
    let calc = BarGeometryCalculator::new(bounds, &g, axes.y_max, Color::BLUE).unwrap();
    (calc, g)
}

fn sample() -> Vec<GraphDatum> {
    vec![
        GraphDatum::new("Hello", 1.0),
        GraphDatum::new("Goodbye", 2.5),
        GraphDatum::new("Another", 1.2),
        GraphDatum::new("One", 0.2),
    ]
}

#[test]
fn sample_bars() {
    let data = sample();
    let (calc, g) = calculator(&data);
    let bars = calc.layout(&data, &g.x_offsets).unwrap();
    assert_eq!(bars.len(), 4);

    // width = 160 / 2, centred on each tick
    assert!(bars.iter().all(|b| b.width == 80.0 && b.colour == Color::BLUE));
    assert_eq!(bars[0].x, 100.0 + 160.0 - 40.0);
    assert_eq!(bars[3].x, 100.0 + 640.0 - 40.0);

    // 1/3 * 800 = 266.67 -> 267, 2.5/3 * 800 = 666.67 -> 667
    assert_eq!(bars[0].height, 267.0);
    assert_eq!(bars[0].y, 900.0 - 267.0);
    assert_eq!(bars[1].height, 667.0);
    assert_eq!(bars[1].y, 233.0);
    assert_eq!(bars[3].height, 53.0);
}

#[test]
fn bars_sit_on_the_x_axis() {
    let data = sample();
    let (calc, g) = calculator(&data);
    for bar in calc.layout(&data, &g.x_offsets).unwrap() {
        assert_eq!(bar.y + bar.height, 900.0);
    }
}

#[test]
fn single_bar_is_half_a_section_wide() {
    let data = vec![GraphDatum::new("Only", 5.0)];
    let (calc, g) = calculator(&data);
    assert_eq!(g.x_offsets, vec![400.0]);
    assert_eq!(calc.width(), 200.0);
    let bar = calc.geometry(5.0, g.x_offsets[0]);
    assert_eq!(bar.x, 400.0);
    assert_eq!(bar.height, 800.0);
    assert_eq!(bar.y, 100.0);
}

#[test]
fn height_is_monotonic_in_value() {
    let data = vec![GraphDatum::new("a", 10.0)];
    let (calc, _) = calculator(&data);
    let values = [0.0, 0.5, 1.0, 2.5, 4.0, 7.25, 9.9, 10.0];
    for w in values.windows(2) {
        assert!(calc.height(w[0]) < calc.height(w[1]), "{} vs {}", w[0], w[1]);
    }
    assert_eq!(calc.height(10.0), 800.0);
    assert_eq!(calc.height(0.0), 0.0);
}

#[test]
fn zero_maximum_is_rejected() {
    let bounds = GraphBounds::from_canvas(1000, 1000).unwrap();
    let axes = AxesData::new(vec!["a".into()], vec![0.0], 0.0);
    let g = AxesGraphicalData::from_axes(&axes, &bounds);
    assert!(matches!(
        BarGeometryCalculator::new(bounds, &g, 0.0, Color::RED),
        Err(GraphError::InvalidData(_))
    ));
}

#[test]
fn negative_value_has_no_bar() {
    let data = vec![GraphDatum::new("a", 2.0), GraphDatum::new("b", -1.0)];
    let (calc, g) = calculator(&data);
    assert!(matches!(calc.layout(&data, &g.x_offsets), Err(GraphError::InvalidData(_))));
}
