//! UUID type and variant classification.

use std::fmt;

/// The kind of a UUID as encoded in its 4-bit version field.
///
/// Classification never fails: a UUID whose version nibble is not recognized is reported as
/// [`UuidType::Unknown`] and left to the caller to reject if unwanted.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum UuidType {
    /// All 128 bits are zero.
    Null,
    /// Version 1: Gregorian timestamp, clock sequence and node identifier.
    TimeBased,
    /// Version 2: DCE security.
    Dce,
    /// Version 3: MD5 hash of a namespace and a name.
    NameBasedMd5,
    /// Version 4: random bits.
    RandomBased,
    /// Version 5: SHA-1 hash of a namespace and a name.
    NameBasedSha1,
    /// Any other version nibble, including a zero nibble on a non-nil value.
    Unknown,
}

impl UuidType {
    /// Returns the version nibble this type is encoded with, or `None` for [`UuidType::Null`] and
    /// [`UuidType::Unknown`].
    pub const fn version(self) -> Option<u8> {
        match self {
            Self::TimeBased => Some(1),
            Self::Dce => Some(2),
            Self::NameBasedMd5 => Some(3),
            Self::RandomBased => Some(4),
            Self::NameBasedSha1 => Some(5),
            Self::Null | Self::Unknown => None,
        }
    }

    /// Maps a version nibble to the corresponding generation type.
    ///
    /// Returns [`UuidType::Unknown`] for zero and for anything above five; use
    /// [`Uuid::uuid_type`](crate::Uuid::uuid_type) to tell the nil UUID apart.
    pub const fn from_version(version: u8) -> Self {
        match version {
            1 => Self::TimeBased,
            2 => Self::Dce,
            3 => Self::NameBasedMd5,
            4 => Self::RandomBased,
            5 => Self::NameBasedSha1,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for UuidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::TimeBased => "time-based",
            Self::Dce => "dce",
            Self::NameBasedMd5 => "name-based (md5)",
            Self::RandomBased => "random-based",
            Self::NameBasedSha1 => "name-based (sha1)",
            Self::Unknown => "unknown",
        })
    }
}

/// The layout family encoded in the most significant bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// `0xx`: reserved, NCS backward compatibility (includes the nil UUID).
    Var0,
    /// `10x`: the RFC 4122 layout, produced by every generator in this crate.
    Var10,
    /// `110`: reserved, Microsoft backward compatibility.
    Var110,
    /// `111`: reserved for future definition.
    VarReserved,
}

impl Variant {
    pub(crate) const fn from_octet(octet: u8) -> Self {
        match octet >> 5 {
            0b000..=0b011 => Self::Var0,
            0b100 | 0b101 => Self::Var10,
            0b110 => Self::Var110,
            _ => Self::VarReserved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{UuidType, Variant};

    /// Maps version nibbles to types and back
    #[test]
    fn maps_version_nibbles_to_types_and_back() {
        for v in 1..=5u8 {
            assert_eq!(UuidType::from_version(v).version(), Some(v));
        }
        assert_eq!(UuidType::from_version(0), UuidType::Unknown);
        for v in 6..=15u8 {
            assert_eq!(UuidType::from_version(v), UuidType::Unknown);
        }
        assert_eq!(UuidType::Null.version(), None);
        assert_eq!(UuidType::Unknown.version(), None);
    }

    /// Classifies variant octets
    #[test]
    fn classifies_variant_octets() {
        assert_eq!(Variant::from_octet(0x00), Variant::Var0);
        assert_eq!(Variant::from_octet(0x7f), Variant::Var0);
        assert_eq!(Variant::from_octet(0x80), Variant::Var10);
        assert_eq!(Variant::from_octet(0xbf), Variant::Var10);
        assert_eq!(Variant::from_octet(0xc0), Variant::Var110);
        assert_eq!(Variant::from_octet(0xdf), Variant::Var110);
        assert_eq!(Variant::from_octet(0xe0), Variant::VarReserved);
        assert_eq!(Variant::from_octet(0xff), Variant::VarReserved);
    }
}
