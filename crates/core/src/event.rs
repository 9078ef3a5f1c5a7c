/// Pointer input delivered to a [`RatingBar`](crate::RatingBar).
///
/// Coordinates are relative to the widget's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Mouse button or finger went down inside the widget.
    Down { x: f32, y: f32 },
    /// Pointer moved while down.
    Move { x: f32, y: f32 },
    /// Button released / finger lifted.  Does not change the rating.
    Up,
}

impl PointerEvent {
    /// Horizontal position, `None` for [`PointerEvent::Up`].
    pub fn x(&self) -> Option<f32> {
        match *self {
            Self::Down { x, .. } | Self::Move { x, .. } => Some(x),
            Self::Up => None,
        }
    }
}
