// File: crates/graph-core/src/config.rs
// Summary: Run-wide configuration (font sizes and default canvas size).

use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Font sizes and default canvas size shared read-only by every graph in a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Configuration {
    /// Base size for tick labels.
    pub font_size: u32,
    /// Title.
    pub h1_font_size: u32,
    /// Axis labels.
    pub h2_font_size: u32,
    /// Bar value labels.
    pub h3_font_size: u32,
    pub default_width: u32,
    pub default_height: u32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            font_size: 16,
            h1_font_size: 32,
            h2_font_size: 24,
            h3_font_size: 20,
            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
        }
    }
}
