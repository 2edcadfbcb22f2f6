//! Drawing surface boundary.
//!
//! The renderer only talks to this trait, so the same diagram can be painted
//! onto an SVG document, a recording mock in tests, or any canvas-like backend.

use crate::render::style::{Font, Rgba};

/// Point in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in CSS pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }
}

/// 2D drawing surface with canvas-like semantics.
///
/// Coordinates passed to drawing calls are in the current transform's space;
/// after `set_scale(device_pixel_ratio)` that is CSS pixels.
pub trait Surface {
    /// Client size in CSS pixels `(width, height)`.
    fn client_size(&self) -> (f64, f64);

    /// Device pixels per CSS pixel.
    fn device_pixel_ratio(&self) -> f64;

    /// Resize the backing pixel buffer.
    fn resize_backing(&mut self, width: u32, height: u32);

    /// Replace the current transform with a uniform scale.
    fn set_scale(&mut self, scale: f64);

    /// Erase a rectangle starting at the origin.
    fn clear(&mut self, width: f64, height: f64);

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba);

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, fill: Rgba, border: Rgba);

    /// Advance width of `text` set in `font`, in CSS pixels.
    fn measure_text(&self, text: &str, font: &Font) -> f64;

    /// Draw `text` horizontally centered and vertically middle-aligned on `at`.
    fn fill_text(&mut self, text: &str, at: Point, font: &Font, color: Rgba);
}
