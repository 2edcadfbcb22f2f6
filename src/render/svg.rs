//! SVG document surface.

use unicode_width::UnicodeWidthStr;

use crate::render::style::{Font, Rgba};
use crate::render::surface::{Point, Rect, Surface};

/// Average advance of one display column relative to the font size.
const COLUMN_ADVANCE: f64 = 0.55;

/// [`Surface`] that accumulates SVG elements.
///
/// The backing size becomes the document's `width`/`height` while the CSS
/// size stays the `viewBox`, which gives the same crisp scaling a canvas gets
/// from a resized backing buffer plus a scale transform.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    device_pixel_ratio: f64,
    backing: (u32, u32),
    scale: f64,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
            backing: (width.round() as u32, height.round() as u32),
            scale: 1.0,
            elements: Vec::new(),
        }
    }

    pub fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Number of drawn elements since the last clear.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Serialize the current content as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let (bw, bh) = self.backing;
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{bw}\" height=\"{bh}\" viewBox=\"0 0 {:.2} {:.2}\">\n",
            self.width, self.height
        );
        for element in &self.elements {
            svg.push_str("  ");
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl Surface for SvgSurface {
    fn client_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn resize_backing(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    fn clear(&mut self, width: f64, height: f64) {
        // the viewBox origin is the surface origin, so a covering clear drops everything
        if width >= self.width && height >= self.height {
            self.elements.clear();
        } else {
            self.elements.push(format!(
                "<rect x=\"0\" y=\"0\" width=\"{width:.2}\" height=\"{height:.2}\" fill=\"white\"/>"
            ));
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba) {
        self.elements.push(format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{color}\" stroke-width=\"1\"/>",
            from.x, from.y, to.x, to.y
        ));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, fill: Rgba, border: Rgba) {
        self.elements.push(format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{radius:.2}\" ry=\"{radius:.2}\" fill=\"{fill}\" stroke=\"{border}\" stroke-width=\"1\"/>",
            rect.x, rect.y, rect.width, rect.height
        ));
    }

    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        text.width() as f64 * font.size * COLUMN_ADVANCE
    }

    fn fill_text(&mut self, text: &str, at: Point, font: &Font, color: Rgba) {
        self.elements.push(format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{color}\">{}</text>",
            at.x,
            at.y,
            escape_xml(&font.family),
            font.size,
            escape_xml(text)
        ));
    }
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_markup_in_text_when_drawing_then_escaped() {
        let mut surface = SvgSurface::new(100.0, 100.0, 1.0);
        surface.fill_text("a<b & \"c\"", Point::new(10.0, 10.0), &Font::default(), Rgba::new(0, 0, 0, 1.0));
        let svg = surface.to_svg();
        assert!(svg.contains("a&lt;b &amp; &quot;c&quot;"));
    }

    #[test]
    fn given_full_clear_when_drawing_again_then_previous_elements_dropped() {
        let mut surface = SvgSurface::new(100.0, 50.0, 2.0);
        let black = Rgba::new(0, 0, 0, 1.0);
        surface.stroke_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), black);
        surface.clear(100.0, 50.0);
        assert_eq!(surface.element_count(), 0);
    }

    #[test]
    fn given_resized_backing_then_document_uses_backing_size_and_css_viewbox() {
        let mut surface = SvgSurface::new(100.0, 50.0, 2.0);
        surface.resize_backing(200, 100);
        let svg = surface.to_svg();
        assert!(svg.contains("width=\"200\" height=\"100\" viewBox=\"0 0 100.00 50.00\""));
    }

    #[test]
    fn given_wide_characters_when_measuring_then_counts_display_columns() {
        let surface = SvgSurface::new(100.0, 100.0, 1.0);
        let font = Font::default();
        let narrow = surface.measure_text("ab", &font);
        let wide = surface.measure_text("日本", &font);
        assert!((wide - 2.0 * narrow).abs() < 1e-9);
    }
}
