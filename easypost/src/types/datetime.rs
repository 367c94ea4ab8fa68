//! Wire timestamp used by every dated field in the API.
//!
//! The API emits RFC 3339 strings and sometimes `""` or `null` for dates that
//! were never set. [`Timestamp`] keeps those absent values as an explicit
//! unset state instead of failing deserialization.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EasyPostError, Result};

/// A calendar instant with a fixed UTC offset, or unset.
///
/// Equality, ordering and hashing follow the underlying instant, so the same
/// moment expressed in two offsets compares equal. Unset sorts first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(Option<DateTime<FixedOffset>>);

impl Timestamp {
    pub const UNSET: Timestamp = Timestamp(None);

    /// Build a timestamp from calendar components.
    ///
    /// # Errors
    ///
    /// Returns `EasyPostError::Format` if any component is out of range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
        offset: FixedOffset,
    ) -> Result<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_nano_opt(hour, minute, second, nanosecond));
        let local = naive.and_then(|n| offset.from_local_datetime(&n).single());
        local.map(|dt| Self(Some(dt))).ok_or_else(|| EasyPostError::Format {
            input: format!(
                "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{nanosecond:09}{offset}"
            ),
            reason: "date or time component out of range".into(),
        })
    }

    pub fn from_instant<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Self(Some(instant.fixed_offset()))
    }

    /// The wrapped instant, `None` when unset.
    pub fn to_instant(&self) -> Option<DateTime<FixedOffset>> {
        self.0
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    /// Parse the canonical wire format.
    ///
    /// `""` and `"null"` yield [`Timestamp::UNSET`].
    ///
    /// # Errors
    ///
    /// Returns `EasyPostError::Format` for any other string that is not
    /// RFC 3339. Years outside `0000..=9999` are accepted in the signed
    /// form [`Timestamp::format`] writes them in (`+10000-01-01T00:00:00Z`).
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Self::UNSET);
        }
        match DateTime::parse_from_rfc3339(trimmed) {
            Ok(dt) => Ok(Self(Some(dt))),
            Err(e) => parse_signed_year(trimmed)
                .map(|dt| Self(Some(dt)))
                .ok_or_else(|| EasyPostError::Format {
                    input: input.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    /// Canonical wire format; unset formats as `""`.
    ///
    /// RFC 3339 offsets carry whole minutes only, so an instant whose offset
    /// has a seconds part is written in UTC.
    pub fn format(&self) -> String {
        match self.0 {
            Some(dt) if dt.offset().local_minus_utc() % 60 != 0 => dt
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
            Some(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            None => String::new(),
        }
    }
}

/// `[+-]YYYYY-MM-DDT...`: an RFC 3339 body behind a signed year of four or
/// more digits. The body is parsed against a stand-in year with the same
/// leap-ness, then moved to the real year.
fn parse_signed_year(s: &str) -> Option<DateTime<FixedOffset>> {
    let negative = match s.as_bytes().first()? {
        b'+' => false,
        b'-' => true,
        _ => return None,
    };
    let rest = &s[1..];
    let end = rest.find('-')?;
    let digits = &rest[..end];
    if digits.len() < 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude: i32 = digits.parse().ok()?;
    let year = if negative { -magnitude } else { magnitude };
    let stand_in = if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        2000
    } else {
        2001
    };
    DateTime::parse_from_rfc3339(&format!("{stand_in}{}", &rest[end..]))
        .ok()?
        .with_year(year)
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(instant: DateTime<Tz>) -> Self {
        Self::from_instant(instant)
    }
}

impl FromStr for Timestamp {
    type Err = EasyPostError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Human-readable form for logs; not the wire format.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.f %:z")),
            None => write!(f, "unset"),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Some(_) => serializer.serialize_str(&self.format()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => Self::parse(&s).map_err(de::Error::custom),
            None => Ok(Self::UNSET),
        }
    }
}
