/// Pointer lifecycle: down → move* → up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pointer {
    #[default]
    Idle,
    Dragging,
}

/// Mutable widget state.  Lives as long as the widget; never persisted.
#[derive(Debug, Clone, Default)]
pub struct RatingState {
    /// Current rating in `[0, star_count]`.
    rating: f32,
    pub pointer: Pointer,
}

impl RatingState {
    pub fn rating(&self) -> f32 {
        self.rating
    }

    /// Store `value` clamped to `[0, max]`.  NaN is stored as 0.
    pub fn set_rating(&mut self, value: f32, max: f32) {
        self.rating = if value.is_nan() { 0.0 } else { value.clamp(0.0, max) };
    }
}
