use crate::geometry::Rect;

/// Which of the two configured icons to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Empty,
    Filled,
}

/// 2D surface the host hands to [`RatingBar::draw`](crate::RatingBar::draw).
///
/// Implementations own the GPU/bitmap resources for both icons and for the
/// [`FillTile`](crate::FillTile); the widget only says what goes where.
pub trait Canvas {
    /// Draw `icon` stretched into `bounds` (in the current translation).
    fn draw_icon(&mut self, icon: Icon, bounds: Rect);

    /// Shift the origin for every following call.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Fill `rect` (in the current translation) with the fill tile anchored
    /// at the current origin, clamped to its edges.
    fn fill_tiled(&mut self, rect: Rect);
}

/// A single recorded draw call, in absolute widget coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Icon { icon: Icon, bounds: Rect },
    Fill { rect: Rect },
}

/// [`Canvas`] that records draw calls instead of rendering them.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    ops:    Vec<DrawOp>,
    origin: (f32, f32),
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Bounds of every recorded icon of kind `icon`, in draw order.
    pub fn icons(&self, icon: Icon) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Icon { icon: i, bounds } if i == icon => Some(bounds),
                _ => None,
            })
            .collect()
    }

    /// Every recorded fill rectangle.
    pub fn fills(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Fill { rect } => Some(rect),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for Recorder {
    fn draw_icon(&mut self, icon: Icon, bounds: Rect) {
        let bounds = bounds.translated(self.origin.0, self.origin.1);
        self.ops.push(DrawOp::Icon { icon, bounds });
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.origin.0 += dx;
        self.origin.1 += dy;
    }

    fn fill_tiled(&mut self, rect: Rect) {
        let rect = rect.translated(self.origin.0, self.origin.1);
        self.ops.push(DrawOp::Fill { rect });
    }
}
