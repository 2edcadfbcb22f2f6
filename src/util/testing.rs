use std::env;
use std::sync::Once;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::render::{Font, Point, Rect, Rgba, Surface};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "trace");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    ResizeBacking(u32, u32),
    SetScale(f64),
    Clear(f64, f64),
    Line { from: Point, to: Point, color: Rgba },
    RoundedRect { rect: Rect, radius: f64 },
    Text { text: String, at: Point },
}

/// Surface that records drawing calls instead of producing pixels.
///
/// Text is measured at a fixed advance per character so wrapping is easy to
/// predict in tests.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
    pub char_advance: f64,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
            char_advance: 7.0,
            ops: Vec::new(),
        }
    }

    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::RoundedRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(String, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, at } => Some((text.clone(), *at)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn client_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn resize_backing(&mut self, width: u32, height: u32) {
        self.ops.push(DrawOp::ResizeBacking(width, height));
    }

    fn set_scale(&mut self, scale: f64) {
        self.ops.push(DrawOp::SetScale(scale));
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear(width, height));
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba) {
        self.ops.push(DrawOp::Line { from, to, color });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, _fill: Rgba, _border: Rgba) {
        self.ops.push(DrawOp::RoundedRect { rect, radius });
    }

    fn measure_text(&self, text: &str, _font: &Font) -> f64 {
        text.chars().count() as f64 * self.char_advance
    }

    fn fill_text(&mut self, text: &str, at: Point, _font: &Font, _color: Rgba) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            at,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
    }
}
