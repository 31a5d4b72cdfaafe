//! Carousel core: slide selection, autoplay, and input bindings.
//!
//! The controller never owns the slide and indicator elements. It is handed
//! a [`CarouselSurface`] whenever it needs to render, and only toggles the
//! visual attributes exposed through that trait.

pub mod autoplay;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod surface;

use std::time::Duration;

pub use controller::CarouselController;
pub use error::CarouselError;
pub use surface::CarouselSurface;

/// Interval between automatic advances.
pub const AUTOPLAY_PERIOD: Duration = Duration::from_millis(5000);

/// Minimum horizontal travel, in input units, that counts as a swipe.
pub const SWIPE_THRESHOLD: i32 = 50;

/// Navigation direction for [`CarouselController::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}
