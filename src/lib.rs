//! Tropical zodiac sign lookup for calendar dates.
//!
//! ```
//! use zodiac_sign::{CalendarDate, Sign, classify_sign, localized_sign};
//!
//! let date: CalendarDate = "1963-12-18".parse().unwrap();
//! assert_eq!(classify_sign(&date), Sign::Sagittarius);
//! assert_eq!(localized_sign(&date), "射手座");
//! ```

mod classify;
mod consts;
mod date;
mod error;
mod label;
mod prelude;
mod range;
mod sign;
mod types;

#[cfg(test)]
mod test_utils;

pub use classify::{classify_sign, classify_ymd, zodiac_table};
pub use consts::*;
pub use date::CalendarDate;
pub use error::{DateError, UnknownSign};
pub use label::{LabelTable, ZH_HANS, localized_sign, localized_sign_in};
pub use range::{DateRange, MonthDay};
pub use sign::Sign;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
