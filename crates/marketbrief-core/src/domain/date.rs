use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::{self, FormatItem};
use time::Date;

use crate::ValidationError;

/// Calendar date of one trading session, `YYYY-MM-DD` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradingDate(Date);

fn wire_format() -> Vec<FormatItem<'static>> {
    format_description::parse("[year]-[month]-[day]")
        .expect("static trading-date format must parse")
}

fn display_format() -> Vec<FormatItem<'static>> {
    format_description::parse("[day] [month repr:short], [year]")
        .expect("static trading-date display format must parse")
}

impl TradingDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        Date::parse(trimmed, &wire_format())
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: trimmed.to_owned(),
            })
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    /// `YYYY-MM-DD` wire form.
    pub fn format_wire(self) -> String {
        self.0
            .format(&wire_format())
            .expect("TradingDate must be wire formattable")
    }

    /// Long human form used in report headings, e.g. `02 Jan, 2024`.
    pub fn format_long(self) -> String {
        self.0
            .format(&display_format())
            .expect("TradingDate must be display formattable")
    }

    /// Unix-second bounds of the session day: `[midnight, next midnight)`.
    ///
    /// The end bound is exclusive, mirroring the one-day download window the
    /// chart endpoint expects.
    pub fn unix_session_bounds(self) -> Result<(i64, i64), ValidationError> {
        let start = self.0.midnight().assume_utc().unix_timestamp();
        let next = self
            .0
            .next_day()
            .ok_or_else(|| ValidationError::DateOutOfRange {
                value: self.format_wire(),
            })?;
        let end = next.midnight().assume_utc().unix_timestamp();
        Ok((start, end))
    }
}

impl Display for TradingDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_wire())
    }
}

impl Serialize for TradingDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_wire())
    }
}

impl<'de> Deserialize<'de> for TradingDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
