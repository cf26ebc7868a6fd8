//! Type-aware total ordering of UUIDs.

use std::cmp::Ordering;

use crate::kind::UuidType;
use crate::Uuid;

/// Compares two UUIDs so that time-based ones sort chronologically.
///
/// UUIDs are grouped by version number first. Time-based UUIDs are then ordered by their 60-bit
/// timestamp, then by node identifier, and finally by the clock sequence and variant bits so that
/// only identical values compare equal. All other UUIDs are ordered by their unsigned big-endian
/// bytes, which is also what the derived [`Ord`] of [`Uuid`] does.
///
/// # Examples
///
/// ```rust
/// use timeuuid::{compare, Uuid};
///
/// let a: Uuid = "80c1870d-bb6e-11e3-9e8f-000000000000".parse()?;
/// let b: Uuid = "7f905a0b-bb6f-11e3-9e8f-000000000000".parse()?;
/// assert!(a > b); // raw byte order
/// assert!(compare(&a, &b).is_lt()); // creation order
/// # Ok::<(), timeuuid::ParseError>(())
/// ```
pub fn compare(a: &Uuid, b: &Uuid) -> Ordering {
    a.version().cmp(&b.version()).then_with(|| {
        if a.uuid_type() == UuidType::TimeBased {
            a.raw_timestamp()
                .cmp(&b.raw_timestamp())
                .then_with(|| a.raw_node_id().cmp(&b.raw_node_id()))
                .then_with(|| a.as_bytes()[8..10].cmp(&b.as_bytes()[8..10]))
        } else {
            a.cmp(b)
        }
    })
}

/// A wrapper that orders UUIDs with [`compare`], for use as keys of sorted containers.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use timeuuid::{Collated, Uuid};
///
/// let set: BTreeSet<Collated> = [
///     "8028f08c-bb6e-11e3-9e8f-000000000000",
///     "7ef7c38a-bb6e-11e3-9e8f-000000000000",
/// ]
/// .into_iter()
/// .map(|s| Collated(s.parse().unwrap()))
/// .collect();
///
/// let first = set.first().unwrap();
/// assert_eq!(first.0.to_string(), "7ef7c38a-bb6e-11e3-9e8f-000000000000");
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Collated(/** The wrapped UUID. */ pub Uuid);

impl Ord for Collated {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&self.0, &other.0)
    }
}

impl PartialOrd for Collated {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Uuid> for Collated {
    fn from(src: Uuid) -> Self {
        Self(src)
    }
}

impl From<Collated> for Uuid {
    fn from(src: Collated) -> Self {
        src.0
    }
}
