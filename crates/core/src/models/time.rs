use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AvailabilityError;

/// Minutes in a day; the exclusive upper bound for [`TimeOfDay`].
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Wall-clock time of day with minute granularity.
///
/// Stored as minutes since midnight rather than an `"HH:MM"` string, so
/// ordering is genuine integer comparison and cannot break if the display
/// format changes. Serializes as the zero-padded `"HH:MM"` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Builds a time from minutes since midnight.
    ///
    /// # Errors
    ///
    /// Returns [`AvailabilityError::MalformedTime`] when `minutes` is not
    /// within `0..1440`.
    pub fn from_minutes(minutes: u16) -> Result<Self, AvailabilityError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(AvailabilityError::MalformedTime(format!(
                "{minutes} minutes is past the end of the day"
            )));
        }
        Ok(Self(minutes))
    }

    pub fn as_minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Renders the 12-hour display form used by profile screens:
    /// `"00:00"` becomes `"12:00 AM"`, `"13:30"` becomes `"1:30 PM"`,
    /// `"12:00"` becomes `"12:00 PM"`.
    pub fn display_12h(&self) -> String {
        let hour = self.hour();
        let hour_12 = match hour {
            0 => 12,
            1..=12 => hour,
            _ => hour - 12,
        };
        let suffix = if hour < 12 { "AM" } else { "PM" };
        format!("{}:{:02} {}", hour_12, self.minute(), suffix)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = AvailabilityError;

    /// Parses an `"HH:MM"` value (hour 0-23, minute 0-59).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn malformed(raw: &str) -> AvailabilityError {
            AvailabilityError::MalformedTime(format!("Expected HH:MM, got {raw:?}"))
        }

        let (hour, minute) = s.trim().split_once(':').ok_or_else(|| malformed(s))?;
        let hour: u16 = hour.parse().map_err(|_| malformed(s))?;
        let minute: u16 = minute.parse().map_err(|_| malformed(s))?;

        if hour > 23 || minute > 59 {
            return Err(malformed(s));
        }
        Ok(Self(hour * 60 + minute))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
