//! UUID generators, and the entropy and clock sources they build on.

use crate::fields::{Fields, TimeFields};
use crate::kind::UuidType;
use crate::{NodeId, TimerError, Uuid, UuidTimer};
use std::sync::Arc;

mod name_based;
pub use name_based::{HashAlgorithm, NameBasedGenerator};

pub mod with_rand08;

#[cfg(test)]
pub(crate) mod tests;

/// A trait that defines the minimum random number generator interface for [`UuidTimer`] and the
/// generators.
pub trait RandSource {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;

    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// A trait that defines the minimum system clock interface for [`UuidTimer`].
pub trait TimeSource {
    /// Returns the current Unix timestamp in milliseconds.
    fn unix_ts_ms(&mut self) -> u64;
}

/// The default [`TimeSource`] that uses [`std::time::SystemTime`].
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&mut self) -> u64 {
        use std::time;
        // a clock set before 1970 reads as the epoch; the timer keeps going from its last value
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as u64)
    }
}

/// Generates time-based (version 1) UUIDs from a shared [`UuidTimer`] and a node identifier.
///
/// The generator itself holds no mutable state; all serialization happens inside the timer, so a
/// generator (or several generators sharing one timer) can be used from many threads at once.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use timeuuid::{NodeId, TimeBasedGenerator, UuidTimer};
///
/// let timer = Arc::new(UuidTimer::with_rand08(rand::rngs::OsRng));
/// let g = TimeBasedGenerator::new(timer, Some("00:1b:63:84:45:e6".parse::<NodeId>()?));
/// let uuid = g.generate()?;
/// assert!(uuid.to_string().ends_with("-001b638445e6"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct TimeBasedGenerator<R, T = StdSystemTime> {
    timer: Arc<UuidTimer<R, T>>,
    node: NodeId,
}

impl<R: RandSource, T: TimeSource> TimeBasedGenerator<R, T> {
    /// Creates a generator. Without a node identifier a random one with the multicast bit set is
    /// drawn from the timer's random number generator.
    pub fn new(timer: Arc<UuidTimer<R, T>>, node: Option<NodeId>) -> Self {
        let node = node.unwrap_or_else(|| timer.random_node());
        Self { timer, node }
    }

    /// Returns the node identifier stamped into every UUID.
    pub const fn node_id(&self) -> NodeId {
        self.node
    }

    /// Returns the timer this generator draws timestamps from.
    pub fn timer(&self) -> &Arc<UuidTimer<R, T>> {
        &self.timer
    }

    /// Returns [`UuidType::TimeBased`].
    pub const fn uuid_type(&self) -> UuidType {
        UuidType::TimeBased
    }

    /// Generates a new UUIDv1 object.
    ///
    /// Fails only if the timer's synchronizer fails; clock anomalies are absorbed by the timer.
    pub fn generate(&self) -> Result<Uuid, TimerError> {
        let timestamp = self.timer.next_timestamp()?;
        Ok(self.assemble(timestamp))
    }

    /// Generates a new UUIDv1 object, folding the bytes of `previous` into the random timestamp
    /// perturbation.
    pub fn generate_mixing(&self, previous: &Uuid) -> Result<Uuid, TimerError> {
        let timestamp = self.timer.next_timestamp_salted(previous.as_bytes())?;
        Ok(self.assemble(timestamp))
    }

    fn assemble(&self, timestamp: u64) -> Uuid {
        Uuid::from_fields(Fields::TimeBased(TimeFields {
            timestamp,
            clock_seq: self.timer.clock_seq(),
            node: self.node,
        }))
    }
}

/// Generates random-based (version 4) UUIDs.
///
/// # Examples
///
/// ```rust
/// use timeuuid::RandomBasedGenerator;
///
/// let mut g = RandomBasedGenerator::with_rand08(rand::thread_rng());
/// println!("{}", g.generate());
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct RandomBasedGenerator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> RandomBasedGenerator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns [`UuidType::RandomBased`].
    pub const fn uuid_type(&self) -> UuidType {
        UuidType::RandomBased
    }

    /// Generates a new UUIDv4 object.
    pub fn generate(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Uuid::from_fields(Fields::RandomBased(bytes))
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
impl<R: RandSource> Iterator for RandomBasedGenerator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource> std::iter::FusedIterator for RandomBasedGenerator<R> {}


#[cfg(test)]
mod tests_random_based {
    use super::tests::new_rand_source;
    use super::RandomBasedGenerator;
    use crate::kind::{UuidType, Variant};

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = RandomBasedGenerator::new(new_rand_source())
        .take(N_SAMPLES)
        .map(String::from)
        .collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Sets constant bits and random bits properly
    #[test]
    fn sets_constant_bits_and_random_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 128];
            for e in samples {
                let mut it = bins.iter_mut().rev();
                for c in e.chars().rev() {
                    if let Some(mut num) = c.to_digit(16) {
                        for _ in 0..4 {
                            *it.next().unwrap() += num & 1;
                            num >>= 1;
                        }
                    }
                }
            }
            bins
        });

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], 0, "version bit 50");
        assert_eq!(bins[51], 0, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in (0..48).chain(52..64).chain(66..128) {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {i}: {p}");
        }
    }

    /// Runs on a random source providing only 32-bit words and byte filling
    #[test]
    fn runs_on_a_random_source_providing_only_32_bit_words_and_byte_filling() {
        use crate::{TimeBasedGenerator, UuidTimer};
        use std::sync::Arc;

        struct Saturated;
        impl super::RandSource for Saturated {
            fn next_u32(&mut self) -> u32 {
                u32::MAX
            }
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                dest.fill(0xff);
            }
        }

        let mut g = RandomBasedGenerator::new(Saturated);
        assert_eq!(g.generate().to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");

        let timer = Arc::new(UuidTimer::new(Saturated));
        assert_eq!(timer.clock_seq(), 0x3fff);
        let g = TimeBasedGenerator::new(timer, None);
        assert_eq!(g.node_id().to_u64(), 0xffff_ffff_ffff);
        assert!(g.generate().unwrap().to_string().ends_with("-bfff-ffffffffffff"));
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        let mut g = RandomBasedGenerator::new(new_rand_source());
        for _ in 0..1_000 {
            let e = g.generate();
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), 4);
            assert_eq!(e.uuid_type(), UuidType::RandomBased);
        }
    }
}
