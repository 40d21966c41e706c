//! Time-based debouncing.
//!
//! Driver buttons are sampled as levels, so holding a button keeps it "pressed" on
//! every cycle. A [`Cooldown`] accepts a trigger at most once per period. A [`Toggle`]
//! flips a boolean through a cooldown.
//!
//! Time comes from a [`Clock`] as a [`Duration`] since an arbitrary fixed epoch, which
//! lets tests drive the debouncers with a fake clock.

use core::time::Duration;

/// Monotonic time source.
pub trait Clock {
    /// Time elapsed since this clock's epoch.
    fn now(&self) -> Duration;
}

/// Rate limiter for level-triggered inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldown {
    period: Duration,
    last: Option<Duration>,
}

impl Cooldown {
    /// Creates a cooldown that has never fired.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self { period, last: None }
    }

    /// Time of the last accepted trigger.
    #[must_use]
    pub const fn last_triggered(&self) -> Option<Duration> {
        self.last
    }

    /// Returns `true` if a trigger at `now` would be accepted.
    #[must_use]
    pub fn is_ready(&self, now: Duration) -> bool {
        self.last
            .is_none_or(|last| now.saturating_sub(last) >= self.period)
    }

    /// Fires if ready, recording `now` as the last trigger time.
    pub fn try_trigger(&mut self, now: Duration) -> bool {
        if self.is_ready(now) {
            self.last = Some(now);
            true
        } else {
            false
        }
    }
}

/// A debounced on/off state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    state: bool,
    cooldown: Cooldown,
}

impl Toggle {
    /// Creates a toggle with an initial state and cooldown period.
    #[must_use]
    pub const fn new(initial: bool, period: Duration) -> Self {
        Self {
            state: initial,
            cooldown: Cooldown::new(period),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn get(&self) -> bool {
        self.state
    }

    /// Flips the state if `pressed` and the cooldown allows it.
    ///
    /// Returns `true` if the state changed.
    pub fn update(&mut self, pressed: bool, now: Duration) -> bool {
        if pressed && self.cooldown.try_trigger(now) {
            self.state = !self.state;
            true
        } else {
            false
        }
    }
}
