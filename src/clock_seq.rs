//! Monotonic 100-nanosecond tick counter.

/// Offset between the Gregorian epoch (1582-10-15T00:00:00Z) and the Unix epoch, in 100-nanosecond
/// ticks.
pub const GREGORIAN_OFFSET_TICKS: u64 = 122_192_928_000_000_000;

/// Number of 100-nanosecond ticks per millisecond.
pub const TICKS_PER_MILLI: u64 = 10_000;

/// Largest timestamp representable in the 60-bit field of a time-based UUID.
pub const MAX_TIMESTAMP: u64 = (1 << 60) - 1;

/// Converts a Unix timestamp in milliseconds to ticks since the Gregorian epoch.
///
/// Saturates at `u64::MAX` for readings far beyond any representable UUID timestamp.
pub const fn ticks_from_unix_ms(unix_ts_ms: u64) -> u64 {
    unix_ts_ms
        .saturating_mul(TICKS_PER_MILLI)
        .saturating_add(GREGORIAN_OFFSET_TICKS)
}

/// Converts ticks since the Gregorian epoch to a Unix timestamp in milliseconds, or `None` for
/// ticks before the Unix epoch.
pub const fn unix_ms_from_ticks(ticks: u64) -> Option<u64> {
    if ticks < GREGORIAN_OFFSET_TICKS {
        None
    } else {
        Some((ticks - GREGORIAN_OFFSET_TICKS) / TICKS_PER_MILLI)
    }
}

/// Tracks the last issued timestamp and the fixed 14-bit clock sequence of one timer.
///
/// Every call to [`advance`](Self::advance) returns a value strictly greater than the previous
/// one. When the clock has moved forward the new reading is accepted (plus a small perturbation);
/// otherwise, whether the clock stood still or went backwards, the last value is bumped by one
/// tick. A burst of more than [`TICKS_PER_MILLI`] calls within one millisecond therefore runs
/// ahead of the wall clock until the clock catches up.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ClockSequence {
    last_timestamp: u64,
    last_reading: u64,
    clock_seq: u16,
}

impl ClockSequence {
    /// Creates a counter with the given clock sequence (masked to 14 bits).
    pub const fn new(clock_seq: u16) -> Self {
        Self {
            last_timestamp: 0,
            last_reading: 0,
            clock_seq: clock_seq & 0x3fff,
        }
    }

    /// Returns the 14-bit clock sequence stamped into UUIDs.
    pub const fn clock_seq(&self) -> u16 {
        self.clock_seq
    }

    /// Returns the last timestamp issued, or zero if none.
    pub const fn last_timestamp(&self) -> u64 {
        self.last_timestamp
    }

    /// Raises the floor so that the next timestamp is at least `floor`.
    pub fn reserve_floor(&mut self, floor: u64) {
        if floor > 0 && self.last_timestamp < floor - 1 {
            self.last_timestamp = floor - 1;
        }
    }

    /// Computes the next timestamp from a clock reading without committing it.
    ///
    /// `perturbation` is added only when `now_ticks` is ahead of the last timestamp.
    pub const fn peek(&self, now_ticks: u64, perturbation: u64) -> u64 {
        if now_ticks > self.last_timestamp {
            now_ticks.saturating_add(perturbation)
        } else {
            self.last_timestamp.saturating_add(1)
        }
    }

    /// Commits a timestamp previously computed by [`peek`](Self::peek) for `now_ticks`.
    ///
    /// Returns the previous clock reading if `now_ticks` went backwards compared with it.
    pub fn commit(&mut self, now_ticks: u64, timestamp: u64) -> Option<u64> {
        debug_assert!(timestamp > self.last_timestamp);
        let previous = std::mem::replace(&mut self.last_reading, now_ticks);
        self.last_timestamp = timestamp;
        (now_ticks < previous).then_some(previous)
    }

    /// Computes and commits the next timestamp.
    pub fn advance(&mut self, now_ticks: u64, perturbation: u64) -> u64 {
        let timestamp = self.peek(now_ticks, perturbation);
        self.commit(now_ticks, timestamp);
        timestamp
    }
}
