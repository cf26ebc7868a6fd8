//! Pluggable persistence that keeps timestamps monotonic across process restarts.

use std::io;

/// Reserves ranges of timestamps in storage shared with earlier (or concurrent) incarnations of
/// the generator, so that none of them reuse a timestamp.
///
/// All values are 100-nanosecond ticks since the Gregorian epoch. A [`UuidTimer`](crate::UuidTimer)
/// calls these methods while holding its lock; implementations may block on I/O but must not call
/// back into the timer.
pub trait TimestampSynchronizer: Send + Sync {
    /// Returns the lowest timestamp guaranteed not to have been used before, or `0` if nothing is
    /// known and the local clock is to be trusted.
    ///
    /// Called once, lazily, before the first timestamp is issued.
    fn initialize(&self) -> io::Result<u64>;

    /// Persists a reservation covering `timestamp` and returns the new boundary: the first value
    /// that is *not* reserved. The returned boundary must be greater than `timestamp`.
    ///
    /// Must fail, rather than clamp, if asked to persist a value lower than one already stored.
    fn update(&self, timestamp: u64) -> io::Result<u64>;
}

/// A synchronizer that records nothing: reports no prior state and reserves only the requested
/// tick.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct NoSynchronizer;

impl TimestampSynchronizer for NoSynchronizer {
    fn initialize(&self) -> io::Result<u64> {
        Ok(0)
    }

    fn update(&self, timestamp: u64) -> io::Result<u64> {
        Ok(timestamp + 1)
    }
}
