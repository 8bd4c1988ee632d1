// File: crates/graph-core/src/theme.rs
// Summary: Colours used by the layout: ink, gridlines, bar labels and the bar palette.

use rand::seq::SliceRandom;
use rand::RngCore;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const LIGHT_GRAY: Color = Color::from_rgb(211, 211, 211);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const GREEN: Color = Color::from_rgb(0, 128, 0);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const BROWN: Color = Color::from_rgb(165, 42, 42);
    pub const DARK_GRAY: Color = Color::from_rgb(169, 169, 169);
    pub const PINK: Color = Color::from_rgb(255, 192, 203);
    pub const PURPLE: Color = Color::from_rgb(128, 0, 128);

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Standard bar colours.
pub const PALETTE: [Color; 7] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::BROWN,
    Color::DARK_GRAY,
    Color::PINK,
    Color::PURPLE,
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Default colour for lines and text.
    pub ink: Color,
    pub gridline: Color,
    /// Value label drawn on top of each bar.
    pub bar_label: Color,
    /// Raster backgrounds only; SVG output stays transparent.
    pub background: Color,
    pub palette: &'static [Color],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            ink: Color::BLACK,
            gridline: Color::LIGHT_GRAY,
            bar_label: Color::WHITE,
            background: Color::WHITE,
            palette: &PALETTE,
        }
    }

    /// One colour for all bars of a chart, drawn uniformly from the palette.
    /// Falls back to `ink` for an empty palette.
    pub fn pick_bar_colour(&self, rng: &mut dyn RngCore) -> Color {
        self.palette.choose(rng).copied().unwrap_or(self.ink)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
