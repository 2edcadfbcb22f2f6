//! Renderer: paints a laid-out decision tree onto a [`Surface`].

pub mod style;
pub mod surface;
pub mod svg;
pub mod wrap;

use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::domain::{DecisionTree, Layout, Placement};

pub use style::{Font, RenderStyle, Rgba};
pub use surface::{Point, Rect, Surface};
pub use svg::SvgSurface;
pub use wrap::{block_start_y, wrap_text};

/// Draws edges first, then node boxes with wrapped captions.
///
/// Rendering reads the tree and layout only, so it can be repeated any number
/// of times against the same surface; each pass clears and redraws everything.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: RenderStyle,
}

/// Pixel geometry of one render pass.
struct Frame {
    width: f64,
    height: f64,
    padding: f64,
    box_width: f64,
}

impl Frame {
    fn position(&self, placement: Placement) -> Point {
        Point::new(
            self.padding + placement.x * (self.width - 2.0 * self.padding),
            self.padding + placement.y * (self.height - 2.0 * self.padding),
        )
    }
}

impl Renderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    #[instrument(level = "debug", skip_all)]
    pub fn render<S: Surface + ?Sized>(&self, tree: &DecisionTree, layout: &Layout, surface: &mut S) {
        let Some(root) = tree.root() else {
            debug!("Nothing to render: tree is empty");
            return;
        };

        let (width, height) = surface.client_size();
        let ratio = surface.device_pixel_ratio();
        surface.resize_backing(
            (width * ratio).round() as u32,
            (height * ratio).round() as u32,
        );
        surface.set_scale(ratio);
        surface.clear(width, height);

        let frame = Frame {
            width,
            height,
            padding: self.style.padding,
            box_width: self.style.box_width(width),
        };
        debug!(width, height, ratio, box_width = frame.box_width, "Rendering tree");

        self.draw_edges(tree, layout, root, &frame, surface);
        self.draw_nodes(tree, layout, root, &frame, surface);
    }

    fn draw_edges<S: Surface + ?Sized>(
        &self,
        tree: &DecisionTree,
        layout: &Layout,
        root: Index,
        frame: &Frame,
        surface: &mut S,
    ) {
        let half = self.style.box_height / 2.0;
        let child_edges = move |idx: Index| {
            tree.get_node(idx)
                .into_iter()
                .flat_map(move |node| node.children().rev().map(move |child| (idx, child)))
        };

        // each edge is drawn right before the edges below its child
        let mut stack: Vec<(Index, Index)> = child_edges(root).collect();
        while let Some((parent, child)) = stack.pop() {
            if let (Some(p), Some(q)) = (layout.placement(parent), layout.placement(child)) {
                let p = frame.position(p);
                let q = frame.position(q);
                surface.stroke_line(
                    Point::new(p.x, p.y + half),
                    Point::new(q.x, q.y - half),
                    self.style.edge_color,
                );
            }
            stack.extend(child_edges(child));
        }
    }

    fn draw_nodes<S: Surface + ?Sized>(
        &self,
        tree: &DecisionTree,
        layout: &Layout,
        root: Index,
        frame: &Frame,
        surface: &mut S,
    ) {
        let style = &self.style;
        let max_width = style.label_width(frame.width);
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            let (Some(node), Some(placement)) = (tree.get_node(idx), layout.placement(idx)) else {
                continue;
            };
            let center = frame.position(placement);
            surface.fill_rounded_rect(
                Rect::centered(center, frame.box_width, style.box_height),
                style.corner_radius,
                style.box_fill,
                style.box_border,
            );

            let caption = node.caption();
            let lines = wrap_text(&caption, max_width, |s| surface.measure_text(s, &style.font));
            trace!(caption = %caption, lines = lines.len(), "Drawing node");
            let start_y = block_start_y(center.y, lines.len(), style.line_height);
            for (i, line) in lines.iter().enumerate() {
                let at = Point::new(center.x, start_y + i as f64 * style.line_height);
                surface.fill_text(line, at, &style.font, style.text_color);
            }
            stack.extend(node.children().rev());
        }
    }
}
