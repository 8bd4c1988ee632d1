// File: crates/graph-core/src/model.rs
// Summary: Input model: graphs, data points and their numeric-or-text values.

use std::fmt;

use crate::error::{GraphError, Result};

/// A datum field as it arrives from the description: either already numeric or free text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum DatumValue {
    Number(f64),
    Text(String),
}

impl DatumValue {
    /// Parse into a finite number. Text is trimmed before parsing; anything else is an error.
    pub fn as_f64(&self) -> Result<f64> {
        let v = match self {
            DatumValue::Number(v) => *v,
            DatumValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| GraphError::InvalidData(format!("'{s}' is not a number")))?,
        };
        if !v.is_finite() {
            return Err(GraphError::InvalidData(format!("'{self}' is not a finite number")));
        }
        Ok(v)
    }
}

impl fmt::Display for DatumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatumValue::Number(v) => write!(f, "{v}"),
            DatumValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for DatumValue {
    fn from(v: f64) -> Self { DatumValue::Number(v) }
}

impl From<i32> for DatumValue {
    fn from(v: i32) -> Self { DatumValue::Number(f64::from(v)) }
}

impl From<&str> for DatumValue {
    fn from(s: &str) -> Self { DatumValue::Text(s.to_string()) }
}

impl From<String> for DatumValue {
    fn from(s: String) -> Self { DatumValue::Text(s) }
}

/// One bar: a category (`x`) and its value (`y`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphDatum {
    pub x: DatumValue,
    pub y: DatumValue,
}

impl GraphDatum {
    pub fn new(x: impl Into<DatumValue>, y: impl Into<DatumValue>) -> Self {
        Self { x: x.into(), y: y.into() }
    }
}

/// A parsed graph description. `data` order is the category order on the x-axis.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Graph {
    /// Chart-kind tag, e.g. `"bar"`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: Vec<GraphDatum>,
}

impl Graph {
    pub fn new(
        kind: impl Into<String>,
        title: impl Into<String>,
        x_axis_label: impl Into<String>,
        y_axis_label: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            title: title.into(),
            x_axis_label: x_axis_label.into(),
            y_axis_label: y_axis_label.into(),
            data: Vec::new(),
        }
    }

    pub fn with_data(mut self, data: Vec<GraphDatum>) -> Self {
        self.data = data;
        self
    }

    pub fn push(&mut self, datum: GraphDatum) {
        self.data.push(datum);
    }
}

/// A batch of graphs laid out independently of each other.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphCollection {
    pub graphs: Vec<Graph>,
}
