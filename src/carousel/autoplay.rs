//! Autoplay timer as an explicit two-state machine.
//!
//! Time is always passed in by the caller. The host polls with the current
//! instant on every UI tick; tests poll with a base instant plus offsets.

use std::time::Instant;

use super::AUTOPLAY_PERIOD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Autoplay {
    Running {
        next_tick: Instant,
    },
    #[default]
    Suspended,
}

impl Autoplay {
    /// A running timer whose first tick is one full period after `now`.
    pub fn started(now: Instant) -> Self {
        Autoplay::Running {
            next_tick: now + AUTOPLAY_PERIOD,
        }
    }

    /// Stop the timer. Stopping a suspended timer is a no-op.
    pub fn stop(&mut self) {
        *self = Autoplay::Suspended;
    }

    /// Drop any pending tick and start over with a fresh period.
    pub fn restart(&mut self, now: Instant) {
        self.stop();
        *self = Autoplay::started(now);
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Autoplay::Running { .. })
    }

    /// Returns `true` when a tick is due. The next tick is scheduled one
    /// period after `now`, so periods missed during a stall collapse into
    /// a single tick.
    pub fn poll(&mut self, now: Instant) -> bool {
        match *self {
            Autoplay::Running { next_tick } if now >= next_tick => {
                *self = Autoplay::Running {
                    next_tick: now + AUTOPLAY_PERIOD,
                };
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_fires_after_full_period() {
        let t0 = Instant::now();
        let mut timer = Autoplay::started(t0);
        assert!(!timer.poll(t0 + Duration::from_millis(4999)));
        assert!(timer.poll(t0 + AUTOPLAY_PERIOD));
        assert!(!timer.poll(t0 + AUTOPLAY_PERIOD + Duration::from_millis(1)));
        assert!(timer.poll(t0 + AUTOPLAY_PERIOD * 2));
    }

    #[test]
    fn test_suspended_never_fires() {
        let t0 = Instant::now();
        let mut timer = Autoplay::started(t0);
        timer.stop();
        assert!(!timer.poll(t0 + AUTOPLAY_PERIOD * 10));
        assert!(!timer.is_running());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut timer = Autoplay::default();
        timer.stop();
        timer.stop();
        assert_eq!(timer, Autoplay::Suspended);
    }

    #[test]
    fn test_restart_resets_clock() {
        let t0 = Instant::now();
        let mut timer = Autoplay::started(t0);
        let later = t0 + Duration::from_millis(4000);
        timer.restart(later);
        assert!(!timer.poll(t0 + AUTOPLAY_PERIOD));
        assert!(timer.poll(later + AUTOPLAY_PERIOD));
    }

    #[test]
    fn test_stall_collapses_missed_ticks() {
        let t0 = Instant::now();
        let mut timer = Autoplay::started(t0);
        let stalled = t0 + AUTOPLAY_PERIOD * 3;
        assert!(timer.poll(stalled));
        assert!(!timer.poll(stalled));
        assert_eq!(
            timer,
            Autoplay::Running {
                next_tick: stalled + AUTOPLAY_PERIOD
            }
        );
    }
}
