use crate::InvalidInput;
use crate::consts::{MAX_HOUR, MAX_MINUTE, MAX_SECOND};
use crate::normalize;
use crate::prelude::*;
use crate::types::{Day, Month, Year};
use std::str::FromStr;

/// A normalized point in local calendar time.
///
/// Every accepted input shape resolves to one of these before anything
/// is rendered. The calendar fields are validated on construction, so a
/// value of this type always names a real local proleptic-Gregorian
/// date; there is no way to hold February 30th or hour 25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(
    fmt = "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
    "year.get()",
    "month.get()",
    "day.get()",
    "hour",
    "minute",
    "second"
)]
pub struct Instant {
    year: Year,
    month: Month,
    day: Day,
    hour: u8,
    minute: u8,
    second: u8,
}

impl Instant {
    /// Creates an instant from raw local calendar fields.
    ///
    /// # Errors
    /// Returns `InvalidInput` when any field is out of range for the
    /// local proleptic-Gregorian calendar.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, InvalidInput> {
        if hour > MAX_HOUR || minute > MAX_MINUTE || second > MAX_SECOND {
            return Err(InvalidInput::Time {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(year, month, day)?,
            hour,
            minute,
            second,
        })
    }

    /// Creates an instant at local midnight of the given calendar date.
    ///
    /// # Errors
    /// Returns `InvalidInput` when the date is not a real calendar date.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, InvalidInput> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Returns the year (1..=9999)
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month (1..=31)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the hour (0..=23)
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59)
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59)
    pub const fn second(&self) -> u8 {
        self.second
    }
}

impl FromStr for Instant {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize::parse_text(s)
    }
}

impl serde::Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
