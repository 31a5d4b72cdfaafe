//! Horizontal swipe detection.

use super::{Direction, SWIPE_THRESHOLD};

/// Start and end column of the most recent touch interaction.
///
/// Each new interaction simply overwrites the previous coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchGesture {
    start_x: i32,
    end_x: i32,
}

impl TouchGesture {
    pub fn begin(&mut self, x: i32) {
        self.start_x = x;
    }

    /// Record the end coordinate and return every direction whose threshold
    /// was crossed, forward first.
    ///
    /// The two checks are evaluated independently rather than as an
    /// either/or. With a single horizontal delta at most one can pass.
    pub fn finish(&mut self, x: i32) -> impl Iterator<Item = Direction> {
        self.end_x = x;
        let forward = (self.start_x - self.end_x > SWIPE_THRESHOLD).then_some(Direction::Forward);
        let backward = (self.end_x - self.start_x > SWIPE_THRESHOLD).then_some(Direction::Backward);
        forward.into_iter().chain(backward)
    }

    pub fn delta(&self) -> i32 {
        self.end_x - self.start_x
    }
}
