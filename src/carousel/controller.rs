use std::time::Instant;

use tracing::{debug, info, warn};

use super::autoplay::Autoplay;
use super::error::CarouselError;
use super::gesture::TouchGesture;
use super::surface::CarouselSurface;
use super::Direction;

/// Owns the active slide index and the autoplay timer.
///
/// Every operation runs to completion on the caller's thread. Slide and
/// indicator elements are borrowed from the host for the duration of a
/// single call and never stored.
#[derive(Debug)]
pub struct CarouselController {
    current: usize,
    len: usize,
    autoplay: Autoplay,
    gesture: TouchGesture,
}

impl CarouselController {
    /// Wire the controller to `surface`, show the first slide and start
    /// autoplay.
    ///
    /// An empty surface is accepted: nothing is rendered, no timer runs and
    /// every navigation becomes a no-op.
    pub fn initialize<S: CarouselSurface>(
        surface: &mut S,
        now: Instant,
    ) -> Result<Self, CarouselError> {
        let slides = surface.slide_count();
        let indicators = surface.indicator_count();
        if slides != indicators {
            return Err(CarouselError::IndicatorMismatch { slides, indicators });
        }

        let mut controller = Self {
            current: 0,
            len: slides,
            autoplay: Autoplay::Suspended,
            gesture: TouchGesture::default(),
        };

        if controller.is_empty() {
            warn!("carousel initialized without slides; navigation disabled");
            return Ok(controller);
        }

        controller.render(surface, 0);
        controller.autoplay = Autoplay::started(now);
        info!(slides, "carousel initialized");
        Ok(controller)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Make slide `index` the only visible slide and indicator `index` the
    /// only highlighted one. Leaves the timer alone; out-of-range indices
    /// are ignored.
    pub fn render<S: CarouselSurface>(&mut self, surface: &mut S, index: usize) {
        if index >= self.len {
            return;
        }
        for i in 0..surface.slide_count() {
            surface.set_slide_visible(i, i == index);
        }
        for i in 0..surface.indicator_count() {
            surface.set_indicator_highlighted(i, i == index);
        }
        self.current = index;
    }

    /// Step one slide in `direction`, wrapping at both ends.
    pub fn advance<S: CarouselSurface>(&mut self, surface: &mut S, direction: Direction) {
        if self.is_empty() {
            return;
        }
        let next = match direction {
            Direction::Forward => (self.current + 1) % self.len,
            Direction::Backward => (self.current + self.len - 1) % self.len,
        };
        debug!(from = self.current, to = next, ?direction, "advance");
        self.render(surface, next);
    }

    /// Jump straight to `index`. Out-of-range indices are ignored.
    pub fn go_to<S: CarouselSurface>(&mut self, surface: &mut S, index: usize) {
        if index >= self.len {
            warn!(index, len = self.len, "ignoring jump to nonexistent slide");
            return;
        }
        debug!(from = self.current, to = index, "go to");
        self.render(surface, index);
    }

    /// Cancel any pending tick and start a fresh full period from `now`.
    pub fn restart_autoplay(&mut self, now: Instant) {
        if self.is_empty() {
            return;
        }
        self.autoplay.restart(now);
    }

    pub fn suspend_autoplay(&mut self) {
        self.autoplay.stop();
        debug!(index = self.current, "autoplay suspended");
    }

    pub fn resume_autoplay(&mut self, now: Instant) {
        self.restart_autoplay(now);
        debug!(index = self.current, "autoplay resumed");
    }

    /// "Next" control activated.
    pub fn next<S: CarouselSurface>(&mut self, surface: &mut S, now: Instant) {
        self.advance(surface, Direction::Forward);
        self.restart_autoplay(now);
    }

    /// "Previous" control activated.
    pub fn previous<S: CarouselSurface>(&mut self, surface: &mut S, now: Instant) {
        self.advance(surface, Direction::Backward);
        self.restart_autoplay(now);
    }

    /// Indicator `index` activated.
    pub fn select<S: CarouselSurface>(&mut self, surface: &mut S, index: usize, now: Instant) {
        if index >= self.len {
            return;
        }
        self.go_to(surface, index);
        self.restart_autoplay(now);
    }

    pub fn pointer_enter(&mut self) {
        self.suspend_autoplay();
    }

    pub fn pointer_leave(&mut self, now: Instant) {
        self.resume_autoplay(now);
    }

    pub fn touch_start(&mut self, x: i32) {
        self.gesture.begin(x);
    }

    /// Finish a touch interaction at `x` and navigate for each swipe
    /// threshold it crossed.
    pub fn touch_end<S: CarouselSurface>(&mut self, surface: &mut S, x: i32, now: Instant) {
        for direction in self.gesture.finish(x) {
            debug!(delta = self.gesture.delta(), ?direction, "swipe");
            self.advance(surface, direction);
            self.restart_autoplay(now);
        }
    }

    /// Poll the autoplay timer. Returns `true` if the carousel advanced.
    pub fn tick<S: CarouselSurface>(&mut self, surface: &mut S, now: Instant) -> bool {
        if self.is_empty() || !self.autoplay.poll(now) {
            return false;
        }
        self.advance(surface, Direction::Forward);
        true
    }
}
