use iced::{
    widget::{
        canvas::{self, Frame},
        image::Handle,
    },
    Point, Rectangle, Size, Vector,
};
use starbar_core::{Canvas, FillTile, Icon, RatingBar, Rect, StarIcon};

/// GPU image handles for one [`RatingBar`].
///
/// Build once per bar and keep it next to the bar: every handle carries a
/// stable id, so iced uploads each texture a single time.
#[derive(Debug, Clone)]
pub struct IconHandles {
    empty:     Handle,
    filled:    Handle,
    tile:      Handle,
    tile_side: f32,
}

impl IconHandles {
    /// `None` when the bar is missing an icon (it would draw nothing anyway).
    pub fn from_bar(bar: &RatingBar) -> Option<Self> {
        let tile = bar.fill_tile()?;
        Some(Self {
            empty:     icon_handle(bar.empty_icon()?),
            filled:    icon_handle(bar.filled_icon()?),
            tile:      tile_handle(tile),
            tile_side: bar.config().star_size,
        })
    }
}

fn icon_handle(icon: &StarIcon) -> Handle {
    Handle::from_rgba(icon.width(), icon.height(), icon.pixels().to_vec())
}

fn tile_handle(tile: &FillTile) -> Handle {
    Handle::from_rgba(tile.side(), tile.side(), tile.pixels().to_vec())
}

/// [`Canvas`] over an iced canvas [`Frame`].
pub struct FrameCanvas<'a> {
    frame:   &'a mut Frame,
    handles: &'a IconHandles,
    origin:  Vector,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(frame: &'a mut Frame, handles: &'a IconHandles) -> Self {
        Self {
            frame,
            handles,
            origin: Vector::ZERO,
        }
    }

    fn place(&self, rect: Rect) -> Rectangle {
        Rectangle::new(
            Point::new(rect.x + self.origin.x, rect.y + self.origin.y),
            Size::new(rect.width, rect.height),
        )
    }
}

impl Canvas for FrameCanvas<'_> {
    fn draw_icon(&mut self, icon: Icon, bounds: Rect) {
        let handle = match icon {
            Icon::Empty  => &self.handles.empty,
            Icon::Filled => &self.handles.filled,
        };
        let bounds = self.place(bounds);
        self.frame.draw_image(bounds, canvas::Image::new(handle.clone()));
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.origin = self.origin + Vector::new(dx, dy);
    }

    fn fill_tiled(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }

        let clip = self.place(rect);
        let tile = tile_in_clip(self.origin, clip, self.handles.tile_side);
        let handle = self.handles.tile.clone();
        self.frame.with_clip(clip, move |frame| {
            frame.draw_image(tile, canvas::Image::new(handle));
        });
    }
}

/// Where the fill tile sits inside `clip`, in the clip's local coordinates.
///
/// The tile is anchored at the canvas `origin` and the fill never extends
/// past one star, so a single clipped tile is the whole fill.
pub fn tile_in_clip(origin: Vector, clip: Rectangle, tile_side: f32) -> Rectangle {
    Rectangle::new(
        Point::new(origin.x - clip.x, origin.y - clip.y),
        Size::new(tile_side, tile_side),
    )
}
