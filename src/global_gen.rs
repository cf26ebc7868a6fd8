//! Default generators and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::Uuid;
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generators, creating them if none exist.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a UUIDv1 object.
///
/// This function employs a process-wide timer with a random clock sequence and a random multicast
/// node identifier, and guarantees that every UUID it returns carries a distinct, increasing
/// timestamp. On Unix, this function resets the generator when the process ID changes (i.e., upon
/// process forks) to prevent collisions across processes.
///
/// # Examples
///
/// ```rust
/// let uuid = timeuuid::uuid1();
/// println!("{}", uuid); // e.g., "f3b4958c-52a1-11e7-802a-d3b1e5a3c1f7"
/// println!("{:?}", uuid.timestamp()); // 100-nanosecond ticks since 1582-10-15
///
/// let uuid_string: String = timeuuid::uuid1().to_string();
/// ```
///
/// # Panics
///
/// Panics if the system clock reads beyond the year 5236, where the 60-bit timestamp runs out.
pub fn uuid1() -> Uuid {
    match lock_global_gen().get_mut().time_based.generate() {
        Ok(uuid) => uuid,
        Err(err) => panic!("timeuuid: could not generate time-based UUID: {err}"),
    }
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = timeuuid::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
pub fn uuid4() -> Uuid {
    lock_global_gen().get_mut().random_based.generate()
}

mod inner {
    use rand::rngs::adapter::ReseedingRng;
    use rand::rngs::OsRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;
    use std::sync::Arc;

    use crate::generator::{RandSource, RandomBasedGenerator, TimeBasedGenerator};
    use crate::UuidTimer;

    /// The random number generator of the global generators.
    ///
    /// The global generators currently employ [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    #[derive(Debug)]
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl GlobalGenRng {
        fn new() -> Self {
            let core = match ChaCha12Core::from_rng(OsRng) {
                Ok(core) => core,
                Err(err) => panic!("timeuuid: could not initialize global generator: {err}"),
            };
            Self(ReseedingRng::new(core, 1024 * 64, OsRng))
        }
    }

    impl RandSource for GlobalGenRng {
        fn next_u32(&mut self) -> u32 {
            rand::RngCore::next_u32(&mut self.0)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand::RngCore::fill_bytes(&mut self.0, dest)
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generators: Generators,
    }

    #[derive(Debug)]
    pub struct Generators {
        pub time_based: TimeBasedGenerator<GlobalGenRng>,
        pub random_based: RandomBasedGenerator<GlobalGenRng>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            let timer = Arc::new(UuidTimer::new(GlobalGenRng::new()));
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generators: Generators {
                    time_based: TimeBasedGenerator::new(timer, None),
                    random_based: RandomBasedGenerator::new(GlobalGenRng::new()),
                },
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner generators, resetting their state on Unix if
        /// the process ID has changed.
        pub fn get_mut(&mut self) -> &mut Generators {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                tracing::debug!(
                    pid = std::process::id(),
                    "process forked; resetting global generators"
                );
                *self = Default::default();
            }
            &mut self.generators
        }
    }
}
