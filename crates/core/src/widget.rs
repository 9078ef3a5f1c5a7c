use crate::{
    canvas::{Canvas, Icon},
    config::{RatingBarConfig, DEFAULT_PADDING},
    event::PointerEvent,
    geometry::{Rect, Size},
    icon::{FillTile, StarIcon},
    state::{Pointer, RatingState},
};

/// What a host framework needs from an embedded widget.
///
/// Hosts call [`measure`](Widget::measure) during layout,
/// [`draw`](Widget::draw) on every render pass and
/// [`on_pointer`](Widget::on_pointer) for input; a `true` return from the
/// latter means the host should schedule a redraw.
pub trait Widget: std::fmt::Debug {
    /// Preferred size.  Pure; may be called before the first draw.
    fn measure(&self) -> Size;

    /// Paint the current state.  Must not mutate anything.
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Handle a pointer event. `width` is the widget's laid-out width.
    fn on_pointer(&mut self, event: PointerEvent, width: f32) -> bool;
}

/// A row of N star icons showing a fractional rating.
///
/// Dragging or pressing sets the rating from the pointer's horizontal
/// position across the whole widget width.
#[derive(Debug, Clone)]
pub struct RatingBar {
    config: RatingBarConfig,
    /// Filled icon pre-rendered at star size; `None` without a filled icon.
    tile:   Option<FillTile>,
    state:  RatingState,
}

impl RatingBar {
    pub fn new(config: RatingBarConfig) -> Self {
        let config = config.sanitized();
        let tile = config
            .filled_icon
            .as_ref()
            .map(|icon| FillTile::new(icon, config.star_size));

        if config.empty_icon.is_none() || config.filled_icon.is_none() {
            tracing::warn!("Star bar is missing an icon; nothing will be drawn");
        }

        Self {
            config,
            tile,
            state: RatingState::default(),
        }
    }

    pub fn config(&self) -> &RatingBarConfig {
        &self.config
    }

    /// Current rating in `[0, star_count]`.
    pub fn rating(&self) -> f32 {
        self.state.rating()
    }

    pub fn pointer(&self) -> Pointer {
        self.state.pointer
    }

    pub fn empty_icon(&self) -> Option<&StarIcon> {
        self.config.empty_icon.as_ref()
    }

    pub fn filled_icon(&self) -> Option<&StarIcon> {
        self.config.filled_icon.as_ref()
    }

    pub fn fill_tile(&self) -> Option<&FillTile> {
        self.tile.as_ref()
    }

    /// Both icons are present, so [`draw`](Self::draw) will paint something.
    pub fn is_drawable(&self) -> bool {
        self.config.empty_icon.is_some() && self.config.filled_icon.is_some()
    }

    /// `star_size * n + spacing * (n - 1) + 2 * DEFAULT_PADDING` by `star_size`.
    pub fn measure(&self) -> Size {
        let n = self.config.star_count as f32;
        Size::new(
            self.config.star_size * n + self.config.star_spacing * (n - 1.0) + DEFAULT_PADDING * 2.0,
            self.config.star_size,
        )
    }

    /// Square region of star `index`.
    pub fn star_bounds(&self, index: u32) -> Rect {
        Rect::square(self.star_x(index), 0.0, self.config.star_size)
    }

    fn star_x(&self, index: u32) -> f32 {
        DEFAULT_PADDING + (self.config.star_size + self.config.star_spacing) * index as f32
    }

    /// Paint the background row, then the filled stars and partial fill.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        if !self.is_drawable() {
            return;
        }

        for i in 0..self.config.star_count {
            canvas.draw_icon(Icon::Empty, self.star_bounds(i));
        }

        let rating = self.rating();
        tracing::debug!(rating, "draw");
        if rating <= 0.0 {
            return;
        }

        // Never above star_count thanks to the clamp on write.
        let complete = rating.floor() as u32;
        for i in 0..complete {
            canvas.draw_icon(Icon::Filled, self.star_bounds(i));
        }

        if self.config.whole_stars_only {
            return;
        }

        // One decimal place keeps the fill edge from jittering on float noise.
        let fraction = ((rating - complete as f32) * 10.0).round() / 10.0;
        tracing::debug!(complete, fraction, "partial star");

        let dx = self.star_x(complete);
        canvas.translate(dx, 0.0);
        canvas.fill_tiled(Rect::new(
            0.0,
            0.0,
            self.config.star_size * fraction,
            self.config.star_size,
        ));
        // Leave the canvas origin where we found it.
        canvas.translate(-dx, 0.0);
    }

    /// Apply a pointer event.  Returns `true` when a redraw is needed.
    pub fn handle_pointer(&mut self, event: PointerEvent, width: f32) -> bool {
        match event {
            PointerEvent::Down { x, .. } => {
                self.state.pointer = Pointer::Dragging;
                self.update_rating_from_x(x, width);
                true
            }
            PointerEvent::Move { x, .. } => {
                self.update_rating_from_x(x, width);
                true
            }
            PointerEvent::Up => {
                self.state.pointer = Pointer::Idle;
                false
            }
        }
    }

    /// Map a pointer x-coordinate to a rating, linearly across `width`.
    ///
    /// Anything left of `star_spacing` (not the edge padding) reads as 0.
    pub fn update_rating_from_x(&mut self, x: f32, width: f32) {
        let max = self.config.star_count as f32;
        let rating = if x < self.config.star_spacing {
            0.0
        } else {
            let width = if width.is_finite() && width > 0.0 {
                width
            } else {
                self.measure().width
            };
            max * (x / width)
        };

        self.state.set_rating(rating, max);
        tracing::debug!(x, rating = self.state.rating(), "rating updated");
    }
}

impl Widget for RatingBar {
    fn measure(&self) -> Size {
        RatingBar::measure(self)
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        RatingBar::draw(self, canvas);
    }

    fn on_pointer(&mut self, event: PointerEvent, width: f32) -> bool {
        self.handle_pointer(event, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawOp, Recorder};

    fn icon() -> StarIcon {
        StarIcon::from_raw(2, 2, vec![255; 16]).unwrap()
    }

    fn bar(whole_stars_only: bool) -> RatingBar {
        RatingBar::new(
            RatingBarConfig {
                whole_stars_only,
                ..Default::default()
            }
            .with_icons(icon(), icon()),
        )
    }

    fn rated(whole_stars_only: bool, rating: f32) -> RatingBar {
        let mut bar = bar(whole_stars_only);
        let width = bar.measure().width;
        bar.update_rating_from_x(rating / 5.0 * width, width);
        bar
    }

    fn recorded(bar: &RatingBar) -> Recorder {
        let mut rec = Recorder::new();
        bar.draw(&mut rec);
        rec
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn measure_default_row() {
        let size = bar(false).measure();
        assert_eq!(size, Size::new(640.0, 100.0));
    }

    #[test]
    fn measure_single_star_has_no_spacing() {
        let bar = RatingBar::new(RatingBarConfig {
            star_count: 1,
            star_size: 24.0,
            star_spacing: 8.0,
            ..Default::default()
        });
        assert_eq!(bar.measure(), Size::new(24.0 + 60.0, 24.0));
    }

    #[test]
    fn zero_stars_clamped_to_one() {
        let bar = RatingBar::new(RatingBarConfig {
            star_count: 0,
            ..Default::default()
        });
        assert_eq!(bar.config().star_count, 1);
        assert!(bar.measure().width > 0.0);
    }

    #[test]
    fn pointer_at_right_edge_is_full_rating() {
        let mut bar = bar(false);
        bar.update_rating_from_x(640.0, 640.0);
        assert_eq!(bar.rating(), 5.0);
    }

    #[test]
    fn pointer_past_right_edge_is_clamped() {
        let mut bar = bar(false);
        bar.update_rating_from_x(10_000.0, 640.0);
        assert_eq!(bar.rating(), 5.0);
    }

    #[test]
    fn pointer_left_of_spacing_resets_to_zero() {
        let mut bar = bar(false);
        bar.update_rating_from_x(500.0, 640.0);
        assert!(bar.rating() > 0.0);

        bar.update_rating_from_x(19.9, 640.0);
        assert_eq!(bar.rating(), 0.0);
    }

    #[test]
    fn pointer_between_spacing_and_padding_is_linear() {
        // 25 is past the 20px spacing but still inside the 30px edge padding.
        let mut bar = bar(false);
        bar.update_rating_from_x(25.0, 640.0);
        assert!(approx(bar.rating(), 5.0 * 25.0 / 640.0));
    }

    #[test]
    fn zero_width_falls_back_to_measured_width() {
        let mut bar = bar(false);
        bar.update_rating_from_x(320.0, 0.0);
        assert!(approx(bar.rating(), 2.5));
    }

    #[test]
    fn rating_ignores_whole_star_mode() {
        let mut bar = bar(true);
        bar.update_rating_from_x(320.0, 640.0);
        assert!(approx(bar.rating(), 2.5));
    }

    #[test]
    fn pointer_lifecycle() {
        let mut bar = bar(false);
        assert!(bar.handle_pointer(PointerEvent::Down { x: 128.0, y: 5.0 }, 640.0));
        assert_eq!(bar.pointer(), Pointer::Dragging);
        assert!(approx(bar.rating(), 1.0));

        assert!(bar.handle_pointer(PointerEvent::Move { x: 384.0, y: 50.0 }, 640.0));
        assert!(approx(bar.rating(), 3.0));

        assert!(!bar.handle_pointer(PointerEvent::Up, 640.0));
        assert_eq!(bar.pointer(), Pointer::Idle);
        assert!(approx(bar.rating(), 3.0));
    }

    #[test]
    fn zero_rating_draws_background_only() {
        let rec = recorded(&bar(false));
        assert_eq!(rec.icons(Icon::Empty).len(), 5);
        assert!(rec.icons(Icon::Filled).is_empty());
        assert!(rec.fills().is_empty());
    }

    #[test]
    fn background_row_positions() {
        let rec = recorded(&bar(false));
        let xs: Vec<f32> = rec.icons(Icon::Empty).iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![30.0, 150.0, 270.0, 390.0, 510.0]);
        assert!(rec
            .icons(Icon::Empty)
            .iter()
            .all(|r| r.y == 0.0 && r.width == 100.0 && r.height == 100.0));
    }

    #[test]
    fn whole_stars_draws_floor_without_fill() {
        let bar = rated(true, 3.7);
        let rec = recorded(&bar);

        let filled = rec.icons(Icon::Filled);
        assert_eq!(filled, vec![bar.star_bounds(0), bar.star_bounds(1), bar.star_bounds(2)]);
        assert!(rec.fills().is_empty());
    }

    #[test]
    fn whole_stars_near_integer_renders_like_integer() {
        let rec = recorded(&rated(true, 2.99));
        assert_eq!(rec.icons(Icon::Filled).len(), 2);
    }

    #[test]
    fn fractional_draws_complete_stars_and_partial_fill() {
        let bar = rated(false, 3.7);
        let rec = recorded(&bar);

        assert_eq!(rec.icons(Icon::Filled).len(), 3);

        let fills = rec.fills();
        assert_eq!(fills.len(), 1);
        let fill = fills[0];
        assert!(approx(fill.x, 30.0 + 3.0 * 120.0));
        assert_eq!(fill.y, 0.0);
        assert!(approx(fill.width, 70.0));
        assert_eq!(fill.height, 100.0);
    }

    #[test]
    fn fraction_is_rounded_to_one_decimal() {
        let bar = rated(false, 1.34);
        let fill = recorded(&bar).fills()[0];
        assert!(approx(fill.width, 30.0));
    }

    #[test]
    fn fills_are_drawn_after_background() {
        let ops = recorded(&rated(false, 1.5)).into_ops();
        let first_filled = ops
            .iter()
            .position(|op| matches!(op, DrawOp::Icon { icon: Icon::Filled, .. }))
            .unwrap();
        assert!(ops[..first_filled]
            .iter()
            .all(|op| matches!(op, DrawOp::Icon { icon: Icon::Empty, .. })));
        assert!(matches!(ops.last(), Some(DrawOp::Fill { .. })));
    }

    #[test]
    fn missing_icon_draws_nothing() {
        let mut bar = RatingBar::new(RatingBarConfig {
            empty_icon: Some(icon()),
            ..Default::default()
        });
        bar.update_rating_from_x(400.0, 640.0);

        assert!(!bar.is_drawable());
        assert!(recorded(&bar).ops().is_empty());
        assert!(bar.fill_tile().is_none());
    }

    #[test]
    fn draw_is_idempotent() {
        let bar = rated(false, 2.4);
        assert_eq!(recorded(&bar).into_ops(), recorded(&bar).into_ops());
    }

    #[test]
    fn repeated_draws_on_one_canvas_match() {
        let bar = rated(false, 3.7);
        let mut rec = Recorder::new();
        bar.draw(&mut rec);
        let first = rec.ops().len();
        bar.draw(&mut rec);

        let ops = rec.into_ops();
        assert_eq!(ops.len(), first * 2);
        assert_eq!(ops[..first], ops[first..]);
        assert_eq!(ops[first], DrawOp::Icon { icon: Icon::Empty, bounds: bar.star_bounds(0) });
    }

    #[test]
    fn origin_restored_after_partial_fill() {
        let bar = rated(false, 1.5);
        let mut rec = Recorder::new();
        bar.draw(&mut rec);
        rec.draw_icon(Icon::Empty, Rect::square(0.0, 0.0, 1.0));
        assert_eq!(rec.icons(Icon::Empty).last(), Some(&Rect::square(0.0, 0.0, 1.0)));
    }

    #[test]
    fn fill_tile_built_at_star_size() {
        let bar = bar(false);
        assert_eq!(bar.fill_tile().map(FillTile::side), Some(100));
    }

    #[test]
    fn draws_through_widget_trait_object() {
        let bar = rated(false, 1.0);
        let widget: &dyn Widget = &bar;
        let mut rec = Recorder::new();
        widget.draw(&mut rec);
        assert_eq!(rec.icons(Icon::Filled).len(), 1);
        assert_eq!(widget.measure(), bar.measure());
    }
}
