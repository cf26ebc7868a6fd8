//! Thread-safe source of strictly increasing UUIDv1 timestamps.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::clock_seq::{self, ClockSequence, MAX_TIMESTAMP};
use crate::generator::{RandSource, StdSystemTime, TimeSource};
use crate::{NodeId, TimerError, TimestampSynchronizer};

/// Issues the 60-bit timestamps of time-based UUIDs.
///
/// Every timestamp returned by one timer is strictly greater than all timestamps it returned
/// before, regardless of how many threads call it or how the system clock behaves:
///
/// - A clock that has advanced is accepted, plus a random perturbation of up to 255 ticks so that
///   independent timers reading the same millisecond are unlikely to collide.
/// - A clock that stands still or moves backwards is ignored; the previous timestamp is bumped by
///   one tick instead and a warning is logged for the backward case.
///
/// With a [`TimestampSynchronizer`] attached, the timer also never issues a timestamp at or below
/// the boundary reported by the synchronizer on startup, and persists a new boundary before
/// issuing any timestamp that reaches the current one.
///
/// # Examples
///
/// ```rust
/// use timeuuid::UuidTimer;
///
/// let timer = UuidTimer::with_rand08(rand::rngs::OsRng);
/// let a = timer.next_timestamp()?;
/// let b = timer.next_timestamp()?;
/// assert!(a < b);
/// # Ok::<(), timeuuid::TimerError>(())
/// ```
pub struct UuidTimer<R, T = StdSystemTime> {
    state: Mutex<TimerState<R, T>>,
    clock_seq: u16,
}

struct TimerState<R, T> {
    seq: ClockSequence,

    /// First timestamp not yet reserved through the synchronizer.
    boundary: u64,
    synchronizer: Option<Arc<dyn TimestampSynchronizer>>,
    initialized: bool,

    rng: R,
    time: T,
}

impl<R: RandSource> UuidTimer<R> {
    /// Creates a timer with a random clock sequence that reads the system clock.
    pub fn new(rng: R) -> Self {
        Self::with_rand_and_time_sources(rng, StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> UuidTimer<R, T> {
    /// Creates a timer with a random number generator and a system clock.
    pub fn with_rand_and_time_sources(mut rng: R, time: T) -> Self {
        let seq = ClockSequence::new(rng.next_u32() as u16);
        Self {
            clock_seq: seq.clock_seq(),
            state: Mutex::new(TimerState {
                seq,
                boundary: 0,
                synchronizer: None,
                initialized: false,
                rng,
                time,
            }),
        }
    }

    /// Attaches a synchronizer. It is initialized lazily by the first request for a timestamp.
    pub fn with_synchronizer(mut self, synchronizer: Arc<dyn TimestampSynchronizer>) -> Self {
        let state = self
            .state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        state.synchronizer = Some(synchronizer);
        state.initialized = false;
        self
    }

    /// Returns the 14-bit clock sequence, fixed for the lifetime of this timer.
    pub const fn clock_seq(&self) -> u16 {
        self.clock_seq
    }

    /// Returns a new timestamp in 100-nanosecond ticks since 1582-10-15T00:00:00Z.
    ///
    /// # Errors
    ///
    /// Fails only if the synchronizer fails or the 60-bit timestamp space is exhausted. No
    /// timestamp is consumed on failure.
    pub fn next_timestamp(&self) -> Result<u64, TimerError> {
        self.next_timestamp_salted(&[])
    }

    /// Returns a new timestamp, mixing `salt` into the random perturbation.
    pub fn next_timestamp_salted(&self, salt: &[u8]) -> Result<u64, TimerError> {
        let mut state = self.lock();
        let unix_ts_ms = state.time.unix_ts_ms();
        Self::issue(&mut state, clock_seq::ticks_from_unix_ms(unix_ts_ms), salt)
    }

    /// Returns a new timestamp from a given clock reading in Unix milliseconds instead of the
    /// timer's own time source.
    pub fn next_timestamp_core(&self, unix_ts_ms: u64, salt: &[u8]) -> Result<u64, TimerError> {
        Self::issue(
            &mut self.lock(),
            clock_seq::ticks_from_unix_ms(unix_ts_ms),
            salt,
        )
    }

    /// Draws a random node identifier with the multicast bit set from the timer's random number
    /// generator.
    pub fn random_node(&self) -> NodeId {
        NodeId::random(&mut self.lock().rng)
    }

    fn lock(&self) -> MutexGuard<'_, TimerState<R, T>> {
        // every mutation happens after all fallible steps, so a poisoned state is still consistent
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn issue(state: &mut TimerState<R, T>, now: u64, salt: &[u8]) -> Result<u64, TimerError> {
        if !state.initialized {
            if let Some(synchronizer) = &state.synchronizer {
                let floor = synchronizer.initialize().map_err(TimerError::Initialize)?;
                if now < floor {
                    tracing::warn!(
                        now,
                        boundary = floor,
                        "system clock is behind the synchronized boundary; continuing from the boundary"
                    );
                }
                state.seq.reserve_floor(floor);
                state.boundary = floor;
                tracing::debug!(boundary = floor, "initialized timestamp synchronizer");
            }
            state.initialized = true;
        }

        let perturbation = (state.rng.next_u32() ^ fold_salt(salt)) & 0xff;
        let timestamp = state.seq.peek(now, perturbation as u64);
        if timestamp > MAX_TIMESTAMP {
            return Err(TimerError::Overflow(timestamp));
        }

        if let Some(synchronizer) = &state.synchronizer {
            if timestamp >= state.boundary {
                let boundary = synchronizer
                    .update(timestamp)
                    .map_err(|source| TimerError::Update { timestamp, source })?;
                if boundary <= timestamp {
                    return Err(TimerError::Boundary {
                        timestamp,
                        boundary,
                    });
                }
                tracing::debug!(timestamp, boundary, "reserved timestamps");
                state.boundary = boundary;
            }
        }

        if let Some(last) = state.seq.commit(now, timestamp) {
            tracing::warn!(
                now,
                last,
                issued = timestamp,
                "system clock moved backwards; bumping last timestamp"
            );
        }
        Ok(timestamp)
    }
}

/// Folds an arbitrary byte string into 32 bits.
fn fold_salt(salt: &[u8]) -> u32 {
    salt.iter()
        .fold(0u32, |acc, &b| acc.rotate_left(5) ^ u32::from(b))
}

impl<R, T> fmt::Debug for UuidTimer<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UuidTimer")
            .field("clock_seq", &self.clock_seq)
            .finish_non_exhaustive()
    }
}
