//! Tag URIs (RFC 4151) used as names for name-based UUIDs.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A tag URI of the form `tag:<authority>[,<date>]:<identifier>`.
///
/// The date is written as `YYYY`, `YYYY-M` or `YYYY-M-D`: the month is left out when the date is
/// January 1st and the day is left out when it is the 1st of a month. Month and day are not
/// zero-padded.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use timeuuid::TagUri;
///
/// let date = NaiveDate::from_ymd_opt(2001, 7, 2);
/// let tag = TagUri::new("fred@flintstone.biz", "rock.123", date);
/// assert_eq!(tag.as_str(), "tag:fred@flintstone.biz,2001-7-2:rock.123");
///
/// let tag = TagUri::new("hp1.hp.com", "tst.1234567890", NaiveDate::from_ymd_opt(2001, 1, 1));
/// assert_eq!(tag.to_string(), "tag:hp1.hp.com,2001:tst.1234567890");
/// ```
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct TagUri(String);

impl TagUri {
    /// Builds a tag URI from an authority (a domain name or an email address), a locally unique
    /// identifier and an optional date.
    pub fn new(authority: &str, identifier: &str, date: Option<NaiveDate>) -> Self {
        use fmt::Write as _;

        let mut buf = String::with_capacity(authority.len() + identifier.len() + 16);
        buf.push_str("tag:");
        buf.push_str(authority);
        if let Some(date) = date {
            let (month, day) = (date.month(), date.day());
            // writing to a String cannot fail
            let _ = write!(buf, ",{}", date.year());
            if month != 1 || day != 1 {
                let _ = write!(buf, "-{month}");
            }
            if day != 1 {
                let _ = write!(buf, "-{day}");
            }
        }
        buf.push(':');
        buf.push_str(identifier);
        Self(buf)
    }

    /// Returns the string representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TagUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<TagUri> for String {
    fn from(src: TagUri) -> Self {
        src.0
    }
}

#[cfg(test)]
mod tests {
    use super::TagUri;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        Some(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    /// Abbreviates dates falling on first of month or year
    #[test]
    fn abbreviates_dates_falling_on_first_of_month_or_year() {
        let cases = [
            (None, "tag:example.org:widget"),
            (date(2001, 1, 1), "tag:example.org,2001:widget"),
            (date(2001, 7, 1), "tag:example.org,2001-7:widget"),
            (date(2001, 1, 2), "tag:example.org,2001-1-2:widget"),
            (date(2024, 3, 7), "tag:example.org,2024-3-7:widget"),
            (date(1999, 12, 31), "tag:example.org,1999-12-31:widget"),
        ];
        for (d, text) in cases {
            let tag = TagUri::new("example.org", "widget", d);
            assert_eq!(tag.as_str(), text);
            assert_eq!(tag.to_string(), text);
            assert_eq!(String::from(tag), text);
        }
    }

    /// Compares by string representation
    #[test]
    fn compares_by_string_representation() {
        let a = TagUri::new("a@example.com", "x/y", date(2010, 5, 1));
        let b = TagUri::new("a@example.com", "x/y", date(2010, 5, 1));
        let c = TagUri::new("a@example.com", "x/y", date(2010, 5, 2));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_ref(), "tag:a@example.com,2010-5:x/y");
    }

    /// Passes authority and identifier through verbatim
    #[test]
    fn passes_authority_and_identifier_through_verbatim() {
        let tag = TagUri::new("", "", None);
        assert_eq!(tag.as_str(), "tag::");
        let tag = TagUri::new("fred@flintstone.biz", "/home/tatu/index.html", None);
        assert_eq!(tag.as_str(), "tag:fred@flintstone.biz:/home/tatu/index.html");
    }
}
