//! iced front-end for the star rating bar.
//!
//! [`view`] turns a [`Widget`] (in practice a
//! [`RatingBar`](starbar_core::RatingBar)) into an iced [`Element`] sized to
//! its measured size.  The host keeps three things per bar: the bar itself, its
//! [`IconHandles`], and a [`Cache`] that must be cleared after every pointer
//! update that changes the rating.

pub mod frame;
pub mod program;

pub use frame::{FrameCanvas, IconHandles};
pub use iced::widget::canvas::Cache;
pub use program::{pointer_event, StarBarProgram};

use iced::{widget::canvas, Element, Length};
use starbar_core::{PointerEvent, Widget};

/// Canvas element drawing `bar`, reporting input through `on_pointer`.
pub fn view<'a, Message: 'a>(
    bar: &'a dyn Widget,
    handles: Option<&'a IconHandles>,
    cache: &'a Cache,
    on_pointer: impl Fn(PointerEvent, f32) -> Message + 'a,
) -> Element<'a, Message> {
    let size = bar.measure();

    canvas(StarBarProgram::new(bar, handles, cache, on_pointer))
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .into()
}
