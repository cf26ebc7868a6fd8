//! RFC 4122 UUIDs with a monotonic, externally synchronizable time-based generator
//!
//! ```rust
//! use timeuuid::uuid1;
//!
//! let uuid = uuid1();
//! println!("{}", uuid); // e.g. "f3b4958c-52a1-11e7-802a-d3b1e5a3c1f7"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! Time-based (version 1) identifiers have the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |        time_hi        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp counts 100-nanosecond intervals since
//!   1582-10-15T00:00:00Z. It is split into the 32 least significant bits
//!   (`time_low`), the next 16 bits (`time_mid`) and the 12 most significant bits
//!   (`time_hi`), so the raw byte order of time-based UUIDs is not chronological.
//!   Use [`compare`] or [`Collated`] to sort them by creation time.
//! - The 4-bit `ver` field is set at `0001`.
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit `clock_seq` is drawn at random once per [`UuidTimer`].
//! - The 48-bit `node` is a hardware address or a random value with the multicast
//!   bit set.
//!
//! A [`UuidTimer`] never issues the same timestamp twice. When the system clock
//! stands still or moves backwards, the timer keeps counting up from its last
//! timestamp; a burst of more than 10,000 UUIDs within one millisecond therefore
//! runs ahead of the real-time clock until the clock catches up. To keep timestamps
//! unique across process restarts, attach a [`TimestampSynchronizer`] that persists
//! reserved ranges of timestamps.
//!
//! # Other features
//!
//! This library also supports the generation of random-based (version 4) and
//! name-based (versions 3 and 5) UUIDs:
//!
//! ```rust
//! use timeuuid::{uuid4, HashAlgorithm, NameBasedGenerator, Uuid};
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//!
//! let g = NameBasedGenerator::new(Some(Uuid::NAMESPACE_URL), HashAlgorithm::Sha1);
//! let uuid = g.generate_str("https://example.com/");
//! assert_eq!(uuid.to_string(), "dd2c1780-811a-5296-81c5-178a0ef488bc");
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the process-wide default generators behind [`uuid1()`]
//!   and [`uuid4()`].
//!
//! Optional features:
//!
//! - `serde` enables serialization and deserialization of [`Uuid`] objects.
//! - `uuid` enables conversion from/to [`uuid::Uuid`].

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{BufferError, ParseError, TimerError};

mod id;
pub use id::Uuid;

mod kind;
pub use kind::{UuidType, Variant};

mod fields;
pub use fields::{Fields, TimeFields};

mod node;
pub use node::NodeId;

pub mod clock_seq;
pub use clock_seq::ClockSequence;

mod sync;
pub use sync::{NoSynchronizer, TimestampSynchronizer};

mod timer;
pub use timer::UuidTimer;

pub mod generator;
pub use generator::{HashAlgorithm, NameBasedGenerator, RandomBasedGenerator, TimeBasedGenerator};

mod tag_uri;
pub use tag_uri::TagUri;

mod compare;
pub use compare::{compare, Collated};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid1, uuid4};
