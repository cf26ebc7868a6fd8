//! Node identifier: the 6-byte spatial component of time-based UUIDs.

use crate::error::ParseError;
use crate::generator::RandSource;
use std::{fmt, str};

/// A 6-byte node identifier, either a hardware (IEEE 802) address supplied by the caller or a
/// random substitute.
///
/// Random node identifiers have the multicast bit (least significant bit of the first octet) set,
/// which no real network interface address carries. Ordering is lexical with byte 0 most
/// significant.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct NodeId([u8; 6]);

impl NodeId {
    /// Creates a node identifier from its six octets.
    pub const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Creates a node identifier from the low 48 bits of `value`; the upper 16 bits are ignored.
    pub const fn from_u64(value: u64) -> Self {
        Self([
            (value >> 40) as u8,
            (value >> 32) as u8,
            (value >> 24) as u8,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ])
    }

    /// Creates a random node identifier with the multicast bit set.
    pub fn random<R: RandSource + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 6];
        rng.fill_bytes(&mut bytes);
        bytes[0] |= 0x01;
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Returns the node identifier as a 48-bit integer.
    pub const fn to_u64(&self) -> u64 {
        let b = &self.0;
        (b[0] as u64) << 40
            | (b[1] as u64) << 32
            | (b[2] as u64) << 24
            | (b[3] as u64) << 16
            | (b[4] as u64) << 8
            | b[5] as u64
    }

    /// Returns `true` if the multicast bit is set, i.e. the identifier is not a hardware address.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }
}

impl fmt::Display for NodeId {
    /// Returns the lowercase colon-separated representation, e.g. `00:1b:63:84:45:e6`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

impl str::FromStr for NodeId {
    type Err = ParseError;

    /// Parses the colon-separated representation; hex digits may be in either case.
    ///
    /// Leading zeroes of an octet may be omitted, and an octet that is zero may be left out
    /// entirely, so `1:3::7::` reads as `01:03:00:07:00:00`.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let bytes = src.as_bytes();
        if bytes.len() > 17 {
            return Err(ParseError::Length {
                input: src.to_owned(),
                len: bytes.len(),
                expected: 17,
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

        let mut dst = [0u8; 6];
        let mut pos = 0;
        for (i, e) in dst.iter_mut().enumerate() {
            let start = pos;
            while pos < bytes.len() && pos - start < 2 && bytes[pos] != b':' {
                *e = (*e << 4) | digit(pos)?;
                pos += 1;
            }
            if i < 5 {
                if bytes.get(pos) != Some(&b':') {
                    return Err(ParseError::Separator {
                        input: src.to_owned(),
                        index: pos,
                        expected: ':',
                    });
                }
                pos += 1;
            }
        }

        if pos != bytes.len() {
            return Err(ParseError::Length {
                input: src.to_owned(),
                len: bytes.len(),
                expected: pos,
            });
        }
        Ok(Self(dst))
    }
}

impl From<[u8; 6]> for NodeId {
    fn from(src: [u8; 6]) -> Self {
        Self(src)
    }
}

impl From<NodeId> for [u8; 6] {
    fn from(src: NodeId) -> Self {
        src.0
    }
}

#[cfg(test)]
mod tests {
    use super::NodeId;
    use crate::error::ParseError;
    use crate::generator::with_rand08;

    /// Parses and formats prepared cases
    #[test]
    fn parses_and_formats_prepared_cases() {
        let cases = [
            ("00:00:00:00:00:00", 0u64),
            ("00:1b:63:84:45:e6", 0x001b_6384_45e6),
            ("ff:ff:ff:ff:ff:ff", 0xffff_ffff_ffff),
            ("01:23:45:67:89:ab", 0x0123_4567_89ab),
        ];
        for (text, value) in cases {
            let e: NodeId = text.parse().unwrap();
            assert_eq!(e.to_u64(), value);
            assert_eq!(NodeId::from_u64(value), e);
            assert_eq!(e.to_string(), text);
            assert_eq!(text.to_uppercase().parse::<NodeId>(), Ok(e));
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            "00:1b:63:84:45",
            "00:1b:63:84:45:e6:",
            " 00:1b:63:84:45:e6",
            "00-1b-63-84-45-e6",
            "00:1b:63:84:45:g6",
            "001b:63:84:45:e6:",
            "0:1b:63:84:45:e6:0",
            "1:3::7:",
            "::::",
        ];
        for e in cases {
            assert!(e.parse::<NodeId>().is_err(), "{e:?}");
        }

        assert_eq!(
            "00-1b-63-84-45-e6".parse::<NodeId>(),
            Err(ParseError::Separator {
                input: "00-1b-63-84-45-e6".to_owned(),
                index: 2,
                expected: ':',
            })
        );
    }

    /// Accepts octets with omitted leading zeroes
    #[test]
    fn accepts_octets_with_omitted_leading_zeroes() {
        let cases = [
            ("00:23:45:67:89:ab", [0x00, 0x23, 0x45, 0x67, 0x89, 0xab]),
            ("0:23:45:67:89:ab", [0x00, 0x23, 0x45, 0x67, 0x89, 0xab]),
            (":23:45:67:89:ab", [0x00, 0x23, 0x45, 0x67, 0x89, 0xab]),
            ("01:0:45:67:89:ab", [0x01, 0x00, 0x45, 0x67, 0x89, 0xab]),
            ("01::45:67:89:ab", [0x01, 0x00, 0x45, 0x67, 0x89, 0xab]),
            ("01:23::67:89:ab", [0x01, 0x23, 0x00, 0x67, 0x89, 0xab]),
            ("01:23:45::89:ab", [0x01, 0x23, 0x45, 0x00, 0x89, 0xab]),
            ("01:23:45:67::ab", [0x01, 0x23, 0x45, 0x67, 0x00, 0xab]),
            ("01:23:45:67:89:0", [0x01, 0x23, 0x45, 0x67, 0x89, 0x00]),
            ("01:23:45:67:89:", [0x01, 0x23, 0x45, 0x67, 0x89, 0x00]),
            ("01:03:00:07:00:00", [0x01, 0x03, 0x00, 0x07, 0x00, 0x00]),
            ("1:3:0:7:0:0", [0x01, 0x03, 0x00, 0x07, 0x00, 0x00]),
            ("1:3::7::", [0x01, 0x03, 0x00, 0x07, 0x00, 0x00]),
            ("A:b:C:d:E:f", [0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f]),
            (":::::", [0x00; 6]),
        ];
        for (text, bytes) in cases {
            assert_eq!(text.parse::<NodeId>(), Ok(NodeId::from_bytes(bytes)), "{text:?}");
        }

        assert_eq!(
            "1:3::7:".parse::<NodeId>(),
            Err(ParseError::Separator {
                input: "1:3::7:".to_owned(),
                index: 7,
                expected: ':',
            })
        );
        assert_eq!(
            "0:1:2:3:4:5:6".parse::<NodeId>(),
            Err(ParseError::Length {
                input: "0:1:2:3:4:5:6".to_owned(),
                len: 13,
                expected: 11,
            })
        );
    }

    /// Ignores upper 16 bits of integer
    #[test]
    fn ignores_upper_16_bits_of_integer() {
        assert_eq!(
            NodeId::from_u64(0xabcd_0123_4567_89ab),
            NodeId::from_u64(0x0123_4567_89ab)
        );
    }

    /// Orders lexically with first byte most significant
    #[test]
    fn orders_lexically_with_first_byte_most_significant() {
        let a = NodeId::from_bytes([0x01, 0xff, 0xff, 0xff, 0xff, 0xff]);
        let b = NodeId::from_bytes([0x02, 0x00, 0x00, 0x00, 0x00, 0x00]);
        let c = NodeId::from_bytes([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);
        assert!(a < b && b < c);
        assert!(a.to_u64() < b.to_u64() && b.to_u64() < c.to_u64());
    }

    /// Sets multicast bit on random identifiers
    #[test]
    fn sets_multicast_bit_on_random_identifiers() {
        let mut rng = with_rand08::Adapter(rand::thread_rng());
        for _ in 0..1_000 {
            let e = NodeId::random(&mut rng);
            assert!(e.is_multicast());
        }
        assert!(!NodeId::from_u64(0x001b_6384_45e6).is_multicast());
    }
}
