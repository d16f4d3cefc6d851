use std::cmp::Ordering;

use crate::consts::{MAX_MONTH, MIN_DAY};
use crate::date::CalendarDate;
use crate::prelude::*;
use crate::types::{Year, days_in_month};

/// Any leap year; used to validate month/day pairs that must exist in some year.
const LEAP_REFERENCE_YEAR: u16 = 2000;

/// A month and day with no year, e.g. the 19th of February.
/// Feb 29 is accepted since it exists in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{month:02}-{day:02}")]
pub struct MonthDay {
    month: u8,
    day:   u8,
}

impl MonthDay {
    /// Creates a month/day pair for use in `const` tables.
    ///
    /// # Panics
    /// Panics if `month` is outside `1..=12` or `day` does not exist in that month
    /// of a leap year. In a `const` context this is a compile error.
    pub const fn new(month: u8, day: u8) -> Self {
        assert!(month != 0 && month <= MAX_MONTH, "month must be 1-12");
        assert!(
            day >= MIN_DAY && day <= days_in_month(LEAP_REFERENCE_YEAR, month),
            "day does not exist in month"
        );
        Self { month, day }
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Places this month/day in `year`. Feb 29 becomes Feb 28 in non-leap years.
    pub(crate) const fn in_year(self, year: Year) -> CalendarDate {
        CalendarDate::saturating(year, self.month, self.day)
    }

    /// First day in `year` that is not before this month/day. Feb 29 becomes
    /// Mar 1 in non-leap years.
    pub(crate) const fn first_in_year(self, year: Year) -> CalendarDate {
        if self.day > days_in_month(year.get(), self.month) {
            // Only Feb 29 can overflow, and February is never the last month
            CalendarDate::saturating(year, self.month + 1, MIN_DAY)
        } else {
            CalendarDate::saturating(year, self.month, self.day)
        }
    }
}

impl PartialOrd for MonthDay {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MonthDay {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.month, self.day).cmp(&(other.month, other.day))
    }
}

impl From<CalendarDate> for MonthDay {
    fn from(date: CalendarDate) -> Self {
        Self {
            month: date.month(),
            day:   date.day(),
        }
    }
}

/// A recurring annual interval, inclusive at both ends, with no year attached.
///
/// If `start` comes after `end` the interval runs across New Year (for example
/// Dec 22 through Jan 19).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: MonthDay,
    end:   MonthDay,
}

impl DateRange {
    pub const fn new(start: MonthDay, end: MonthDay) -> Self {
        Self { start, end }
    }

    /// Returns the first month/day of the range
    pub const fn start(&self) -> MonthDay {
        self.start
    }

    /// Returns the last month/day of the range (inclusive)
    pub const fn end(&self) -> MonthDay {
        self.end
    }

    /// Whether the range crosses from December into January.
    pub fn wraps_year(&self) -> bool {
        self.start > self.end
    }

    /// Materializes the range in `year` as `(start, end_exclusive)`.
    ///
    /// A bound on Feb 29 in a non-leap year keeps the range's extent: a start
    /// moves forward to Mar 1, an inclusive end moves back to Feb 28.
    ///
    /// `end_exclusive` is the day after the inclusive end, which is Jan 1 of the
    /// next year for a range ending Dec 31. It is `None` when that day would pass
    /// `MAX_YEAR`, meaning the range is open-ended.
    pub fn anchor(&self, year: Year) -> (CalendarDate, Option<CalendarDate>) {
        let start = self.start.first_in_year(year);
        let end_exclusive = self.end.in_year(year).next_day();
        (start, end_exclusive)
    }

    /// Checks if the range contains a given date.
    ///
    /// The range is re-anchored to the date's own year, so only the month and
    /// day of `date` decide the result.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        let year = date.year_typed();

        if self.wraps_year() {
            // Split at New Year: [start, Dec 31] or [Jan 1, end]
            let (start, end_exclusive) = self.anchor(year);
            return *date >= start || end_exclusive.is_none_or(|end| *date < end);
        }

        let (start, end_exclusive) = self.anchor(year);
        *date >= start && end_exclusive.is_none_or(|end| *date < end)
    }
}
