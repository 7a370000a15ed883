use crate::InvalidInput;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `InvalidInput::Year` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, InvalidInput> {
        if value > MAX_YEAR {
            return Err(InvalidInput::Year(i32::from(value)));
        }
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(InvalidInput::Year(i32::from(value)))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = InvalidInput;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `InvalidInput::Month` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, InvalidInput> {
        if value > MAX_MONTH {
            return Err(InvalidInput::Month(value));
        }
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(InvalidInput::Month(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = InvalidInput;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the
    /// given year and month (leap years included).
    ///
    /// # Errors
    /// Returns `InvalidInput::Day` if the value is 0 or past the end of
    /// the month.
    pub fn new(year: u16, month: u8, value: u8) -> Result<Self, InvalidInput> {
        let out_of_range = InvalidInput::Day {
            year,
            month,
            day: value,
        };
        if value > days_in_month(year, month) {
            return Err(out_of_range);
        }
        NonZeroU8::new(value).map(Self).ok_or(out_of_range)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = InvalidInput;

    // Context-free conversion: without a year and month only the
    // 1..=31 envelope can be checked.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let out_of_range = InvalidInput::Day {
            year: 0,
            month: 0,
            day: value,
        };
        if value > DAYS_IN_MONTH[1] {
            return Err(out_of_range);
        }
        NonZeroU8::new(value).map(Self).ok_or(out_of_range)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    if month == 0 || month > MAX_MONTH {
        return 0;
    }
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_bounds() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(matches!(Year::new(0), Err(InvalidInput::Year(0))));
        assert!(matches!(Year::new(10000), Err(InvalidInput::Year(10000))));
    }

    #[test]
    fn test_year_conversions() {
        let year: Year = 2024.try_into().unwrap();
        assert_eq!(year.get(), 2024);
        assert_eq!(u16::from(year), 2024);
        assert_eq!(year.to_string(), "2024");
    }

    #[test]
    fn test_month_bounds() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(InvalidInput::Month(0))));
        assert!(matches!(Month::new(13), Err(InvalidInput::Month(13))));
    }

    #[test]
    fn test_day_bounds() {
        assert!(Day::new(2024, 1, 31).is_ok());
        assert!(Day::new(2024, 4, 30).is_ok());
        assert!(Day::new(2024, 4, 31).is_err());
        assert!(matches!(
            Day::new(2024, 1, 0),
            Err(InvalidInput::Day {
                year: 2024,
                month: 1,
                day: 0
            })
        ));
        assert!(matches!(
            Day::new(2024, 1, 32),
            Err(InvalidInput::Day {
                year: 2024,
                month: 1,
                day: 32
            })
        ));
    }

    #[test]
    fn test_day_february() {
        // 2023 is not a leap year, 2024 is
        assert!(Day::new(2023, 2, 28).is_ok());
        assert!(Day::new(2023, 2, 29).is_err());
        assert!(Day::new(2024, 2, 29).is_ok());
        assert!(Day::new(2024, 2, 30).is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        assert!(is_leap_year(2020));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        // Century years are only leap when divisible by 400
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2400));
    }

    #[test]
    fn test_days_in_month_table() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
    }

    #[test]
    fn test_serde_numeric_form() {
        let month = Month::new(8).unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "8");
        let parsed: Month = serde_json::from_str("8").unwrap();
        assert_eq!(month, parsed);

        let result: Result<Month, _> = serde_json::from_str("13");
        assert!(result.is_err());
    }
}
