use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::consts::{DATE_SEPARATOR, DECEMBER, JANUARY, MAX_YEAR, MIN_DAY};
use crate::prelude::*;
use crate::types::{Day, Month, Year, days_in_month};
use crate::DateError;

/// A full Gregorian calendar date with no time-of-day component.
///
/// Every component is validated on construction, so a `CalendarDate` always
/// names a day that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl CalendarDate {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns the `DateError` of the first component that fails validation.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        Self::from_parts(year, month, day)
    }

    /// Creates a date from already validated year and month, checking only the day
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: u8) -> Result<Self, DateError> {
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Builds a date in `year`, clamping `month` and `day` into range.
    pub(crate) const fn saturating(year: Year, month: u8, day: u8) -> Self {
        let month = Month::saturating(month);
        let day = Day::saturating(day, year, month);
        Self { year, month, day }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the date as a `(year, month, day)` tuple, which orders chronologically.
    pub const fn to_tuple(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// Returns the following calendar day.
    /// Returns `None` if it would pass the `MAX_YEAR` limit.
    pub fn next_day(&self) -> Option<Self> {
        let (year, month, day) = self.to_tuple();
        let (ny, nm, nd) = if day < days_in_month(year, month) {
            (year, month, day + 1)
        } else if month < DECEMBER {
            (year, month + 1, MIN_DAY)
        } else if year < MAX_YEAR {
            (year + 1, JANUARY, MIN_DAY)
        } else {
            return None;
        };
        Self::new(ny, nm, nd).ok()
    }

    /// Calendar date of a `chrono` timestamp in its own time zone; the
    /// time-of-day is discarded.
    ///
    /// # Errors
    /// Returns a `DateError` for years outside `1..=MAX_YEAR`.
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: chrono::TimeZone>(datetime: &chrono::DateTime<Tz>) -> Result<Self, DateError> {
        Self::try_from(datetime.date_naive())
    }

    fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s) in {trimmed}",
                parts.len()
            )));
        };

        Self::new(
            Self::parse_component(year)?,
            Self::parse_component(month)?,
            Self::parse_component(day)?,
        )
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_tuple().cmp(&other.to_tuple())
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for CalendarDate {
    type Error = DateError;

    // chrono guarantees month and day are in range, so the casts cannot truncate
    #[allow(clippy::cast_possible_truncation)]
    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;

        let year = u16::try_from(date.year()).map_err(|_| DateError::InvalidFormat(date.to_string()))?;
        Self::new(year, date.month() as u8, date.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl From<CalendarDate> for chrono::NaiveDate {
    fn from(date: CalendarDate) -> Self {
        // A validated CalendarDate always lies inside chrono's supported range
        Self::from_ymd_opt(
            i32::from(date.year()),
            u32::from(date.month()),
            u32::from(date.day()),
        )
        .unwrap_or(Self::MIN)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
