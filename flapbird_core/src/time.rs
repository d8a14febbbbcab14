// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic host time and timebase conversion.
//!
//! [`HostTime`] is a point in time in platform-native monotonic ticks.
//! [`Timebase`] carries the rational ticks → nanoseconds factor
//! (`nanoseconds = ticks * numer / denom`). Conversions use `u128`
//! intermediates to avoid overflow.

use core::fmt;

/// A point in time expressed as platform-native monotonic ticks.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// Returns the raw tick value.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Returns the number of ticks between `self` and an earlier time, or zero
    /// if `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_ticks_since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Returns this time advanced by `ticks`, saturating at `u64::MAX`.
    #[inline]
    #[must_use]
    pub const fn saturating_add_ticks(self, ticks: u64) -> Self {
        Self(self.0.saturating_add(ticks))
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({})", self.0)
    }
}

/// Rational conversion factor from ticks to nanoseconds.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timebase {
    /// Numerator of the ticks-to-nanoseconds ratio.
    pub numer: u32,
    /// Denominator of the ticks-to-nanoseconds ratio.
    pub denom: u32,
}

impl Timebase {
    /// A timebase where ticks are already nanoseconds (1:1).
    pub const NANOS: Self = Self { numer: 1, denom: 1 };

    /// Creates a new timebase with the given numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `denom` or `numer` is zero.
    #[inline]
    #[must_use]
    pub const fn new(numer: u32, denom: u32) -> Self {
        assert!(denom != 0, "timebase denominator must not be zero");
        assert!(numer != 0, "timebase numerator must not be zero");
        Self { numer, denom }
    }

    /// Converts a tick count to nanoseconds.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "u128 intermediate avoids overflow; truncation back to u64 is intentional"
    )]
    pub const fn ticks_to_nanos(self, ticks: u64) -> u64 {
        (ticks as u128 * self.numer as u128 / self.denom as u128) as u64
    }

    /// Converts nanoseconds to a tick count.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "u128 intermediate avoids overflow; truncation back to u64 is intentional"
    )]
    pub const fn nanos_to_ticks(self, nanos: u64) -> u64 {
        (nanos as u128 * self.denom as u128 / self.numer as u128) as u64
    }

    /// Converts a tick count to (fractional) seconds.
    #[inline]
    #[must_use]
    pub fn ticks_to_secs(self, ticks: u64) -> f64 {
        self.ticks_to_nanos(ticks) as f64 * 1e-9
    }
}

impl fmt::Debug for Timebase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timebase({}/{})", self.numer, self.denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_timebase_is_nanoseconds() {
        let tb = Timebase::NANOS;
        assert_eq!(tb.ticks_to_nanos(1_000_000_000), 1_000_000_000);
        assert_eq!(tb.nanos_to_ticks(42), 42);
        assert!((tb.ticks_to_secs(1_500_000_000) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn mach_style_timebase() {
        // 24 MHz ticks: 125/3 ns per tick.
        let tb = Timebase::new(125, 3);
        assert_eq!(tb.ticks_to_nanos(24_000_000), 1_000_000_000, "24 MHz -> 1s");
        assert_eq!(tb.nanos_to_ticks(1_000_000_000), 24_000_000);
    }

    #[test]
    fn large_values_do_not_overflow() {
        let tb = Timebase::new(125, 3);
        let _nanos = tb.ticks_to_nanos(u64::MAX / 2);
    }

    #[test]
    fn saturating_tick_arithmetic() {
        let t = HostTime(1000);
        assert_eq!(t.saturating_ticks_since(HostTime(400)), 600);
        assert_eq!(t.saturating_ticks_since(HostTime(1500)), 0);
        assert_eq!(HostTime(u64::MAX).saturating_add_ticks(5), HostTime(u64::MAX));
    }

    #[test]
    #[should_panic(expected = "denominator must not be zero")]
    fn zero_denominator_panics() {
        let _ = Timebase::new(1, 0);
    }
}
