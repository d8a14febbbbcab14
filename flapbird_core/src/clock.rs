// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation clock.
//!
//! [`AnimationClock`] turns host-time observations into the continuously
//! increasing animation time (in seconds) that the flight controller consumes:
//!
//! ```text
//! animation_secs = ticks_to_secs(host_ticks - origin_ticks)
//! ```
//!
//! The first observation fixes the origin. Observations earlier than the
//! origin read as zero, so the output never runs backwards past the start of
//! the session.

use crate::time::{HostTime, Timebase};

/// Maps host time to animation seconds measured from the first observation.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    timebase: Timebase,
    /// Host time of the first observation, once one has been made.
    origin: Option<HostTime>,
    /// Latest value returned by [`observe`](Self::observe).
    last_secs: f64,
}

impl AnimationClock {
    /// Creates a clock that has not been started yet.
    #[must_use]
    pub const fn new(timebase: Timebase) -> Self {
        Self {
            timebase,
            origin: None,
            last_secs: 0.0,
        }
    }

    /// Returns the timebase used for conversions.
    #[must_use]
    pub const fn timebase(&self) -> Timebase {
        self.timebase
    }

    /// Returns the host time that maps to animation time zero, if started.
    #[must_use]
    pub const fn origin(&self) -> Option<HostTime> {
        self.origin
    }

    /// Feeds a host-time observation and returns the animation time in
    /// seconds.
    ///
    /// The first call starts the clock and returns `0.0`. The returned value
    /// never decreases between calls, even if the host reports an earlier
    /// time.
    pub fn observe(&mut self, now: HostTime) -> f64 {
        let origin = *self.origin.get_or_insert(now);
        let secs = self
            .timebase
            .ticks_to_secs(now.saturating_ticks_since(origin));
        if secs > self.last_secs {
            self.last_secs = secs;
        }
        self.last_secs
    }

    /// Queries the animation time at `now` without recording it.
    ///
    /// Returns `None` if the clock has not been started.
    #[must_use]
    pub fn secs_at(&self, now: HostTime) -> Option<f64> {
        let origin = self.origin?;
        Some(
            self.timebase
                .ticks_to_secs(now.saturating_ticks_since(origin)),
        )
    }

    /// Forgets the origin; the next observation starts a new session at zero.
    pub fn reset(&mut self) {
        self.origin = None;
        self.last_secs = 0.0;
    }
}
