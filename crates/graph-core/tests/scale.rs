// File: crates/graph-core/tests/scale.rs
// Purpose: Validate y-axis maximum, y scale points and x labels derived from raw data.

use graph_core::scale::{x_axis_labels, y_axis_max, y_scale_points};
use graph_core::{AxesData, GraphDatum, GraphError};

fn sample() -> Vec<GraphDatum> {
    vec![
        GraphDatum::new("Hello", 1.0),
        GraphDatum::new("Goodbye", 2.5),
        GraphDatum::new("Another", 1.2),
        GraphDatum::new("One", 0.2),
    ]
}

#[test]
fn y_max_is_ceiling_of_largest_value() {
    assert_eq!(y_axis_max(&sample()).unwrap(), 3.0);
    let data = vec![GraphDatum::new("a", 4.0), GraphDatum::new("b", 0.5)];
    assert_eq!(y_axis_max(&data).unwrap(), 4.0);
}

#[test]
fn y_max_covers_every_value() {
    let data: Vec<GraphDatum> = [0.1, 7.3, 2.2, 7.0001, 3.9]
        .iter()
        .enumerate()
        .map(|(i, &v)| GraphDatum::new(format!("c{i}"), v))
        .collect();
    let max = y_axis_max(&data).unwrap();
    assert_eq!(max, 8.0);
    for d in &data {
        assert!(d.y.as_f64().unwrap() <= max);
    }
}

#[test]
fn text_values_are_parsed() {
    let data = vec![GraphDatum::new("a", " 2.5 "), GraphDatum::new("b", "10")];
    assert_eq!(y_axis_max(&data).unwrap(), 10.0);
}

#[test]
fn non_numeric_value_is_rejected() {
    let data = vec![GraphDatum::new("a", 1.0), GraphDatum::new("b", "abc")];
    assert!(matches!(y_axis_max(&data), Err(GraphError::InvalidData(_))));
}

#[test]
fn non_finite_values_are_rejected() {
    let nan = vec![GraphDatum::new("a", "NaN")];
    assert!(matches!(y_axis_max(&nan), Err(GraphError::InvalidData(_))));
    let inf = vec![GraphDatum::new("a", f64::INFINITY)];
    assert!(matches!(y_axis_max(&inf), Err(GraphError::InvalidData(_))));
}

#[test]
fn negative_values_still_have_a_maximum() {
    let data = vec![GraphDatum::new("a", 2.0), GraphDatum::new("b", -1.0)];
    assert_eq!(y_axis_max(&data).unwrap(), 2.0);
    let data = vec![GraphDatum::new("a", -2.5), GraphDatum::new("b", -1.5)];
    assert_eq!(y_axis_max(&data).unwrap(), -1.0);
    assert_eq!(y_scale_points(-1.0, 4), vec![0.0]);
}

#[test]
fn empty_data_has_no_maximum() {
    assert!(matches!(y_axis_max(&[]), Err(GraphError::InvalidData(_))));
}

#[test]
fn scale_points_for_sample_dataset() {
    assert_eq!(y_scale_points(3.0, 4), vec![0.0, 0.75, 1.5, 2.25, 3.0]);
}

#[test]
fn scale_points_are_increasing_and_reach_the_maximum() {
    for max in 1..=50 {
        let max = f64::from(max);
        for intervals in [3u32, 4, 5, 7] {
            let points = y_scale_points(max, intervals);
            let interval = max / f64::from(intervals);
            assert!(points.len() >= 2, "max={max} k={intervals}");
            assert_eq!(points[0], 0.0);
            assert!(points.windows(2).all(|w| w[0] < w[1]));
            let last = *points.last().unwrap();
            assert!(last <= max);
            assert!(last >= max - interval);
        }
    }
}

#[test]
fn huge_maximum_keeps_full_coverage() {
    let max = 1e308;
    let points = y_scale_points(max, 4);
    assert_eq!(points.len(), 5);
    assert!(points.iter().all(|p| p.is_finite()));
    assert!(points.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(*points.last().unwrap(), max);

    let points = y_scale_points(f64::MAX.floor(), 5);
    assert!(*points.last().unwrap() >= f64::MAX - f64::MAX / 5.0);
}

#[test]
fn zero_maximum_is_a_single_tick() {
    assert_eq!(y_scale_points(0.0, 4), vec![0.0]);
    let data = vec![GraphDatum::new("a", 0.0), GraphDatum::new("b", 0.0)];
    let axes = AxesData::from_data(&data, 4).unwrap();
    assert_eq!(axes.y_points, vec![0.0]);
    assert_eq!(axes.y_max, 0.0);
}

#[test]
fn x_labels_keep_order_and_duplicates() {
    let data = vec![
        GraphDatum::new("b", 1.0),
        GraphDatum::new("a", 2.0),
        GraphDatum::new("b", 3.0),
        GraphDatum::new(2024, 4.0),
    ];
    assert_eq!(x_axis_labels(&data), vec!["b", "a", "b", "2024"]);
}

#[test]
fn axes_from_sample() {
    let axes = AxesData::from_data(&sample(), 4).unwrap();
    assert_eq!(axes.x_labels, vec!["Hello", "Goodbye", "Another", "One"]);
    assert_eq!(axes.y_points.len(), 5);
    assert_eq!(axes.y_max, 3.0);
}
