use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::ValidationError;

/// Point in time normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

impl UtcDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Parse a feed date.
    ///
    /// Accepts RFC3339 or any other ISO 8601 date-time with an offset
    /// (`2024-01-02T00:00Z`, `2024-01-02T00:00:00+0100`), converted to UTC.
    /// A naive `YYYY-MM-DDTHH:MM:SS[.fff]` is read as UTC and a bare
    /// `YYYY-MM-DD` calendar date as midnight UTC.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();

        if let Ok(parsed) = OffsetDateTime::parse(trimmed, &Rfc3339) {
            return Ok(Self(parsed.to_offset(UtcOffset::UTC)));
        }

        if let Ok(parsed) = OffsetDateTime::parse(trimmed, &Iso8601::DEFAULT) {
            return Ok(Self(parsed.to_offset(UtcOffset::UTC)));
        }

        let naive = format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
        );
        if let Ok(parsed) = PrimitiveDateTime::parse(trimmed, naive) {
            return Ok(Self(parsed.assume_utc()));
        }

        let date_only = format_description!("[year]-[month]-[day]");
        if let Ok(parsed) = Date::parse(trimmed, date_only) {
            return Ok(Self(parsed.midnight().assume_utc()));
        }

        Err(ValidationError::InvalidTimestamp {
            value: input.to_owned(),
        })
    }

    pub fn from_offset_datetime(value: OffsetDateTime) -> Self {
        Self(value.to_offset(UtcOffset::UTC))
    }

    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }

    pub fn format_rfc3339(self) -> String {
        self.0
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.0.unix_timestamp().to_string())
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_rfc3339())
    }
}

impl Serialize for UtcDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_rfc3339())
    }
}

impl<'de> Deserialize<'de> for UtcDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
