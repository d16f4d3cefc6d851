//! Shorthand constructors for tests. Panic on invalid input.

use crate::{CalendarDate, Month, Year};

pub fn year(value: u16) -> Year {
    Year::new(value).expect("test year should be valid")
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("test month should be valid")
}

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("test date should be valid")
}
