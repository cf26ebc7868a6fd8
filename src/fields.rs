//! Per-type field values that a UUID is assembled from.

use crate::kind::UuidType;
use crate::node::NodeId;

/// The components of a UUID, tagged by generation type.
///
/// [`Uuid::from_fields`](crate::Uuid::from_fields) assembles a UUID from these values and
/// [`Uuid::fields`](crate::Uuid::fields) takes one apart again. Hash and random kinds carry the
/// full 16 source bytes; six of those bits are overwritten by the version and variant on assembly.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Fields {
    /// Version 1.
    TimeBased(TimeFields),
    /// Version 2. Carried as raw bytes; the DCE-specific local domain fields are not interpreted.
    Dce([u8; 16]),
    /// Version 3, from an MD5 digest.
    NameBasedMd5([u8; 16]),
    /// Version 4, from random bytes.
    RandomBased([u8; 16]),
    /// Version 5, from the first 16 bytes of a SHA-1 digest.
    NameBasedSha1([u8; 16]),
}

/// Components of a time-based (version 1) UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TimeFields {
    /// 60-bit count of 100-nanosecond intervals since 1582-10-15T00:00:00Z.
    pub timestamp: u64,
    /// 14-bit clock sequence.
    pub clock_seq: u16,
    /// Spatial component.
    pub node: NodeId,
}

impl Fields {
    /// Returns the type these fields assemble into.
    pub const fn uuid_type(&self) -> UuidType {
        match self {
            Self::TimeBased(_) => UuidType::TimeBased,
            Self::Dce(_) => UuidType::Dce,
            Self::NameBasedMd5(_) => UuidType::NameBasedMd5,
            Self::RandomBased(_) => UuidType::RandomBased,
            Self::NameBasedSha1(_) => UuidType::NameBasedSha1,
        }
    }
}
