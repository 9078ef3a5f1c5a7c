//! Star rating bar widget, independent of any GUI toolkit.
//!
//! The host framework supplies a [`Canvas`] to draw into and forwards pointer
//! events; everything else (layout size, fill maths, rating clamping) lives
//! in [`RatingBar`].

pub mod canvas;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod icon;
pub mod state;
pub mod widget;

pub use canvas::{Canvas, DrawOp, Icon, Recorder};
pub use config::{RatingBarConfig, DEFAULT_PADDING};
pub use error::{Result, StarBarError};
pub use event::PointerEvent;
pub use geometry::{Rect, Size};
pub use icon::{FillTile, StarIcon};
pub use state::Pointer;
pub use widget::{RatingBar, Widget};
