//! Colors, fonts and geometry constants for the diagram.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Straight-alpha color, printed as CSS `rgba(...)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Font in CSS shorthand terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Size in CSS pixels
    pub size: f64,
    pub family: String,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            size: 12.0,
            family: "system-ui, -apple-system, Segoe UI, Roboto, Arial".into(),
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size, self.family)
    }
}

/// Everything the renderer needs besides the tree and the surface.
///
/// Lengths are CSS pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Outer margin between surface border and node centers
    pub padding: f64,
    pub min_box_width: f64,
    pub max_box_width: f64,
    /// Preferred box width as a fraction of the surface width
    pub box_width_ratio: f64,
    pub box_height: f64,
    pub corner_radius: f64,
    /// Horizontal room taken from the box width before wrapping labels
    pub label_padding: f64,
    pub line_height: f64,
    pub font: Font,
    pub edge_color: Rgba,
    pub box_fill: Rgba,
    pub box_border: Rgba,
    pub text_color: Rgba,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            padding: 20.0,
            min_box_width: 110.0,
            max_box_width: 220.0,
            box_width_ratio: 0.16,
            box_height: 34.0,
            corner_radius: 8.0,
            label_padding: 12.0,
            line_height: 14.0,
            font: Font::default(),
            edge_color: Rgba::new(30, 30, 30, 0.6),
            box_fill: Rgba::new(255, 255, 255, 0.92),
            box_border: Rgba::new(40, 40, 40, 0.25),
            text_color: Rgba::new(18, 18, 18, 0.95),
        }
    }
}

impl RenderStyle {
    /// Box width for a surface `surface_width` CSS pixels wide.
    pub fn box_width(&self, surface_width: f64) -> f64 {
        (surface_width * self.box_width_ratio)
            .max(self.min_box_width)
            .min(self.max_box_width)
    }

    /// Width available to a wrapped label.
    pub fn label_width(&self, surface_width: f64) -> f64 {
        self.box_width(surface_width) - self.label_padding
    }
}
