use crate::frame::{FrameCanvas, IconHandles};
use iced::{
    mouse, touch,
    widget::canvas::{self, Cache, Geometry},
    Event, Point, Rectangle, Renderer, Theme,
};
use starbar_core::{Pointer, PointerEvent, Widget};

/// iced [`canvas::Program`] that paints a [`Widget`] (normally a
/// [`RatingBar`](starbar_core::RatingBar)) and reports pointer input back to
/// the host.
///
/// The program only reads the widget; the host applies the published
/// [`PointerEvent`] with [`Widget::on_pointer`] in its `update` and clears
/// the [`Cache`] when that returns `true`.
pub struct StarBarProgram<'a, Message> {
    bar:        &'a dyn Widget,
    handles:    Option<&'a IconHandles>,
    cache:      &'a Cache,
    on_pointer: Box<dyn Fn(PointerEvent, f32) -> Message + 'a>,
}

impl<'a, Message> StarBarProgram<'a, Message> {
    /// `on_pointer` receives the event and the widget's laid-out width.
    pub fn new(
        bar: &'a dyn Widget,
        handles: Option<&'a IconHandles>,
        cache: &'a Cache,
        on_pointer: impl Fn(PointerEvent, f32) -> Message + 'a,
    ) -> Self {
        Self {
            bar,
            handles,
            cache,
            on_pointer: Box::new(on_pointer),
        }
    }
}

impl<Message> canvas::Program<Message> for StarBarProgram<'_, Message> {
    type State = Pointer;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let pointer = pointer_event(event, bounds, cursor, state)?;
        tracing::trace!(?pointer, "star bar input");
        Some(canvas::Action::publish((self.on_pointer)(pointer, bounds.width)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let Some(handles) = self.handles else {
            return Vec::new();
        };

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            self.bar.draw(&mut FrameCanvas::new(frame, handles));
        });
        vec![geometry]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match state {
            Pointer::Dragging => mouse::Interaction::Grabbing,
            Pointer::Idle if cursor.is_over(bounds) => mouse::Interaction::Pointer,
            Pointer::Idle => mouse::Interaction::default(),
        }
    }
}

/// Translate an iced event into widget-relative pointer input.
///
/// Presses only count inside `bounds`; once pressed, moves and the release
/// are reported wherever the pointer goes, like a captured touch.
pub fn pointer_event(
    event: &Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    state: &mut Pointer,
) -> Option<PointerEvent> {
    let relative = |p: Point| (p.x - bounds.x, p.y - bounds.y);

    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            let p = cursor.position_in(bounds)?;
            *state = Pointer::Dragging;
            Some(PointerEvent::Down { x: p.x, y: p.y })
        }
        Event::Mouse(mouse::Event::CursorMoved { .. }) if *state == Pointer::Dragging => {
            let (x, y) = relative(cursor.position()?);
            Some(PointerEvent::Move { x, y })
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            if *state == Pointer::Dragging =>
        {
            *state = Pointer::Idle;
            Some(PointerEvent::Up)
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) if bounds.contains(*position) => {
            let (x, y) = relative(*position);
            *state = Pointer::Dragging;
            Some(PointerEvent::Down { x, y })
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) if *state == Pointer::Dragging => {
            let (x, y) = relative(*position);
            Some(PointerEvent::Move { x, y })
        }
        Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. })
            if *state == Pointer::Dragging =>
        {
            *state = Pointer::Idle;
            Some(PointerEvent::Up)
        }
        _ => None,
    }
}
