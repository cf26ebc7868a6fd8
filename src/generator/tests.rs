use super::*;
use std::sync::atomic::{AtomicU64, Ordering};

pub(crate) fn new_rand_source() -> impl RandSource {
    struct MockRandSource;
    impl RandSource for MockRandSource {
        fn next_u32(&mut self) -> u32 {
            rand::random()
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand::RngCore::fill_bytes(&mut rand::thread_rng(), dest)
        }
    }
    MockRandSource
}

/// A clock that tests can set from outside while a timer holds a clone of it.
#[derive(Clone, Debug)]
pub(crate) struct MockTime(Arc<AtomicU64>);

impl MockTime {
    pub(crate) fn new(unix_ts_ms: u64) -> Self {
        Self(Arc::new(AtomicU64::new(unix_ts_ms)))
    }

    pub(crate) fn set(&self, unix_ts_ms: u64) {
        self.0.store(unix_ts_ms, Ordering::SeqCst);
    }
}

impl TimeSource for MockTime {
    fn unix_ts_ms(&mut self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}
