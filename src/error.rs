/// Error type for calendar date construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Invalid year: {0} (must be 1-{max})", max = crate::MAX_YEAR)]
    InvalidYear(u16),

    #[error("Invalid month: {0} (must be 1-{max})", max = crate::MAX_MONTH)]
    InvalidMonth(u8),

    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    #[error("Empty date string")]
    EmptyInput,
}

/// Returned when a textual sign identifier names none of the twelve signs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown zodiac sign identifier: {0:?}")]
pub struct UnknownSign(pub String);
