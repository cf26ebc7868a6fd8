use crate::clock_seq::MAX_TIMESTAMP;
use crate::error::{BufferError, ParseError};
use crate::fields::{Fields, TimeFields};
use crate::kind::{UuidType, Variant};
use crate::node::NodeId;
use std::{fmt, ops, str};

/// Represents a Universally Unique IDentifier.
///
/// The derived ordering is plain unsigned big-endian byte order. Use
/// [`compare`](crate::compare::compare) or [`Collated`](crate::Collated) to order time-based
/// UUIDs chronologically.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Namespace for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self::from_u128(0x6ba7b810_9dad_11d1_80b4_00c04fd430c8);

    /// Namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self::from_u128(0x6ba7b811_9dad_11d1_80b4_00c04fd430c8);

    /// Namespace for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self::from_u128(0x6ba7b812_9dad_11d1_80b4_00c04fd430c8);

    /// Namespace for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self::from_u128(0x6ba7b814_9dad_11d1_80b4_00c04fd430c8);

    /// Creates a UUID from a 16-byte big-endian array without touching version or variant bits.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a UUID from a 128-bit integer.
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    /// Creates a UUID from its most and least significant 64-bit halves.
    pub const fn from_u64_pair(high: u64, low: u64) -> Self {
        Self::from_u128((high as u128) << 64 | low as u128)
    }

    /// Creates a UUID from a slice of exactly 16 bytes.
    pub fn from_slice(src: &[u8]) -> Result<Self, BufferError> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| BufferError::Length { len: src.len() })
    }

    /// Creates a UUID from the 16 bytes starting at `offset` in a larger buffer.
    pub fn from_slice_at(src: &[u8], offset: usize) -> Result<Self, BufferError> {
        let range = checked_range(offset, src.len())?;
        Self::from_slice(&src[range])
    }

    /// Creates a UUID byte array from UUIDv1 field values.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` is not a 60-bit integer or `clock_seq` is not a 14-bit integer.
    pub const fn from_fields_v1(timestamp: u64, clock_seq: u16, node: &NodeId) -> Self {
        if timestamp > MAX_TIMESTAMP || clock_seq >= 1 << 14 {
            panic!("invalid field value");
        }

        let t = shuffle_timestamp(timestamp);
        let n = node.as_bytes();
        Self([
            t[0],
            t[1],
            t[2],
            t[3],
            t[4],
            t[5],
            0x10 | t[6],
            t[7],
            0x80 | (clock_seq >> 8) as u8,
            clock_seq as u8,
            n[0],
            n[1],
            n[2],
            n[3],
            n[4],
            n[5],
        ])
    }

    /// Assembles a UUID from tagged field values, setting the version nibble and the RFC 4122
    /// variant.
    ///
    /// For the byte-carrying kinds the high nibble of byte 6 and the two most significant bits of
    /// byte 8 are overwritten; the source bits in those positions are lost.
    ///
    /// # Panics
    ///
    /// Panics if time-based fields are out of range (see [`Uuid::from_fields_v1`]).
    pub const fn from_fields(fields: Fields) -> Self {
        match fields {
            Fields::TimeBased(f) => Self::from_fields_v1(f.timestamp, f.clock_seq, &f.node),
            Fields::Dce(bytes) => Self::stamp(bytes, 2),
            Fields::NameBasedMd5(bytes) => Self::stamp(bytes, 3),
            Fields::RandomBased(bytes) => Self::stamp(bytes, 4),
            Fields::NameBasedSha1(bytes) => Self::stamp(bytes, 5),
        }
    }

    /// Forces the version nibble and the `10` variant onto arbitrary bytes.
    const fn stamp(mut bytes: [u8; 16], version: u8) -> Self {
        bytes[6] = (version << 4) | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }

    /// Forces the version of `uuid_type` and the `10` variant onto arbitrary bytes, or returns
    /// `None` if the type has no version number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timeuuid::{Uuid, UuidType};
    ///
    /// let uuid = Uuid::with_type([0xff; 16], UuidType::RandomBased).unwrap();
    /// assert_eq!(uuid.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    /// assert_eq!(Uuid::with_type([0xff; 16], UuidType::Unknown), None);
    /// ```
    pub const fn with_type(bytes: [u8; 16], uuid_type: UuidType) -> Option<Self> {
        match uuid_type.version() {
            Some(version) => Some(Self::stamp(bytes, version)),
            None => None,
        }
    }

    /// Takes the UUID apart into tagged field values, or returns `None` for the nil UUID and
    /// unrecognized versions.
    pub fn fields(&self) -> Option<Fields> {
        match self.uuid_type() {
            UuidType::TimeBased => Some(Fields::TimeBased(TimeFields {
                timestamp: unshuffle_timestamp(&self.0),
                clock_seq: self.raw_clock_seq(),
                node: self.raw_node_id(),
            })),
            UuidType::Dce => Some(Fields::Dce(self.0)),
            UuidType::NameBasedMd5 => Some(Fields::NameBasedMd5(self.0)),
            UuidType::RandomBased => Some(Fields::RandomBased(self.0)),
            UuidType::NameBasedSha1 => Some(Fields::NameBasedSha1(self.0)),
            UuidType::Null | UuidType::Unknown => None,
        }
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a copy of the underlying byte array.
    pub const fn to_bytes(&self) -> [u8; 16] {
        self.0
    }

    /// Returns the most and least significant 64-bit halves.
    pub const fn as_u64_pair(&self) -> (u64, u64) {
        let value = u128::from_be_bytes(self.0);
        ((value >> 64) as u64, value as u64)
    }

    /// Copies the 16 bytes into `dst` starting at `offset`.
    pub fn write_to(&self, dst: &mut [u8], offset: usize) -> Result<(), BufferError> {
        let range = checked_range(offset, dst.len())?;
        dst[range].copy_from_slice(&self.0);
        Ok(())
    }

    /// Returns the 4-bit version field.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the variant field.
    pub const fn variant(&self) -> Variant {
        Variant::from_octet(self.0[8])
    }

    /// Classifies the UUID by its version field.
    pub const fn uuid_type(&self) -> UuidType {
        if self.is_nil() {
            UuidType::Null
        } else {
            UuidType::from_version(self.version())
        }
    }

    /// Returns `true` if all 128 bits are zero.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Returns the 60-bit Gregorian timestamp of a time-based UUID.
    pub const fn timestamp(&self) -> Option<u64> {
        match self.uuid_type() {
            UuidType::TimeBased => Some(unshuffle_timestamp(&self.0)),
            _ => None,
        }
    }

    /// Returns the 14-bit clock sequence of a time-based UUID.
    pub const fn clock_seq(&self) -> Option<u16> {
        match self.uuid_type() {
            UuidType::TimeBased => Some(self.raw_clock_seq()),
            _ => None,
        }
    }

    /// Returns the node identifier of a time-based UUID.
    pub const fn node_id(&self) -> Option<NodeId> {
        match self.uuid_type() {
            UuidType::TimeBased => Some(self.raw_node_id()),
            _ => None,
        }
    }

    /// Reads the timestamp bits regardless of the version field.
    pub(crate) const fn raw_timestamp(&self) -> u64 {
        unshuffle_timestamp(&self.0)
    }

    const fn raw_clock_seq(&self) -> u16 {
        ((self.0[8] & 0x3f) as u16) << 8 | self.0[9] as u16
    }

    pub(crate) const fn raw_node_id(&self) -> NodeId {
        let b = &self.0;
        NodeId::from_bytes([b[10], b[11], b[12], b[13], b[14], b[15]])
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timeuuid::Uuid;
    ///
    /// let x = "4d687664-3A1e-4F30-aCc1-87F59306d30C".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "4d687664-3a1e-4f30-acc1-87f59306d30c");
    /// assert_eq!(format!("{}", y), "4d687664-3a1e-4f30-acc1-87f59306d30c");
    /// # Ok::<(), timeuuid::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for i in 0..16 {
            let e = self.0[i] as usize;
            *buf_iter.next().unwrap() = DIGITS[e >> 4];
            *buf_iter.next().unwrap() = DIGITS[e & 15];
            if i == 3 || i == 5 || i == 7 || i == 9 {
                *buf_iter.next().unwrap() = b'-';
            }
        }
        debug_assert!(buffer.is_ascii());
        UuidStr(buffer)
    }
}

/// Splits a 60-bit timestamp into the `time_low`, `time_mid` and `time_hi` fields that occupy
/// bytes 0 to 7, leaving the version nibble clear.
const fn shuffle_timestamp(timestamp: u64) -> [u8; 8] {
    [
        (timestamp >> 24) as u8,
        (timestamp >> 16) as u8,
        (timestamp >> 8) as u8,
        timestamp as u8,
        (timestamp >> 40) as u8,
        (timestamp >> 32) as u8,
        (timestamp >> 56) as u8 & 0x0f,
        (timestamp >> 48) as u8,
    ]
}

/// Inverse of [`shuffle_timestamp`]: reassembles the chronological 60-bit value.
const fn unshuffle_timestamp(bytes: &[u8; 16]) -> u64 {
    ((bytes[6] & 0x0f) as u64) << 56
        | (bytes[7] as u64) << 48
        | (bytes[4] as u64) << 40
        | (bytes[5] as u64) << 32
        | (bytes[0] as u64) << 24
        | (bytes[1] as u64) << 16
        | (bytes[2] as u64) << 8
        | bytes[3] as u64
}

fn checked_range(offset: usize, len: usize) -> Result<ops::Range<usize>, BufferError> {
    match offset.checked_add(16) {
        Some(end) if end <= len => Ok(offset..end),
        _ => Err(BufferError::Offset { offset, len }),
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation. Hex digits are
    /// accepted in either case.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let bytes = src.as_bytes();
        if bytes.len() != 36 {
            return Err(ParseError::Length {
                input: src.to_owned(),
                len: bytes.len(),
                expected: 36,
            });
        }

        let digit = |index: usize| {
            (bytes[index] as char)
                .to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| ParseError::Digit {
                    input: src.to_owned(),
                    index,
                })
        };

        let mut dst = [0u8; 16];
        let mut pos = 0;
        for (i, e) in dst.iter_mut().enumerate() {
            *e = (digit(pos)? << 4) | digit(pos + 1)?;
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                if bytes[pos] != b'-' {
                    return Err(ParseError::Separator {
                        input: src.to_owned(),
                        index: pos,
                        expected: '-',
                    });
                }
                pos += 1;
            }
        }
        Ok(Self(dst))
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = BufferError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated 8-4-4-4-12 string
/// representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Uuid::from_slice(value).map_err(de::Error::custom)
        }
    }

}
