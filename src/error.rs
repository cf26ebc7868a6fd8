//! Error types.

use std::io;

/// Error parsing an invalid string representation of a UUID or node identifier.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ParseError {
    /// The input does not have the exact length of the expected representation.
    #[error("invalid length {len} (expected {expected}): {input:?}")]
    Length {
        input: String,
        len: usize,
        expected: usize,
    },

    /// A separator is missing or found at the wrong position.
    #[error("expected '{expected}' at index {index}: {input:?}")]
    Separator {
        input: String,
        index: usize,
        expected: char,
    },

    /// A character that is not a hexadecimal digit.
    #[error("invalid hexadecimal digit at index {index}: {input:?}")]
    Digit { input: String, index: usize },
}

/// Error converting between a UUID and a byte buffer.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum BufferError {
    /// The slice is not exactly 16 bytes long.
    #[error("invalid byte length {len} (expected 16)")]
    Length { len: usize },

    /// The offset leaves less than 16 bytes in the buffer.
    #[error("invalid offset {offset}: not enough room in buffer of {len} bytes (need 16)")]
    Offset { offset: usize, len: usize },
}

/// Error producing a timestamp from a [`UuidTimer`](crate::UuidTimer).
///
/// Clock anomalies are never reported through this type; they are recovered locally and only
/// logged.
#[derive(Debug, thiserror::Error)]
pub enum TimerError {
    /// The synchronizer failed to report the initial safe boundary.
    #[error("failed to initialize timestamp synchronizer")]
    Initialize(#[source] io::Error),

    /// The synchronizer failed to persist a new boundary.
    #[error("failed to reserve timestamps up to {timestamp}")]
    Update {
        timestamp: u64,
        #[source]
        source: io::Error,
    },

    /// The synchronizer returned a boundary that does not cover the requested timestamp.
    #[error("synchronizer reserved boundary {boundary} which is not above timestamp {timestamp}")]
    Boundary { timestamp: u64, boundary: u64 },

    /// The 60-bit timestamp space is exhausted.
    #[error("timestamp {0} exceeds the 60-bit range")]
    Overflow(u64),
}
