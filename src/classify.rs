//! Date to sign classification over the fixed tropical zodiac table.

use crate::consts::{
    APRIL, AUGUST, DECEMBER, FEBRUARY, JANUARY, JULY, JUNE, MARCH, MAY, NOVEMBER, OCTOBER,
    RANGE_TABLE_LEN, SEPTEMBER,
};
use crate::date::CalendarDate;
use crate::range::{DateRange, MonthDay};
use crate::sign::Sign;
use crate::DateError;

const fn entry(start: (u8, u8), end: (u8, u8), sign: Sign) -> (DateRange, Sign) {
    (
        DateRange::new(MonthDay::new(start.0, start.1), MonthDay::new(end.0, end.1)),
        sign,
    )
}

/// Tropical zodiac boundaries. Capricorn straddles New Year and is split at
/// Jan 1 so that every entry lies within a single calendar year.
const ZODIAC_TABLE: [(DateRange, Sign); RANGE_TABLE_LEN] = [
    entry((MARCH, 21), (APRIL, 19), Sign::Aries),
    entry((APRIL, 20), (MAY, 20), Sign::Taurus),
    entry((MAY, 21), (JUNE, 21), Sign::Gemini),
    entry((JUNE, 22), (JULY, 22), Sign::Cancer),
    entry((JULY, 23), (AUGUST, 22), Sign::Leo),
    entry((AUGUST, 23), (SEPTEMBER, 22), Sign::Virgo),
    entry((SEPTEMBER, 23), (OCTOBER, 23), Sign::Libra),
    entry((OCTOBER, 24), (NOVEMBER, 22), Sign::Scorpio),
    entry((NOVEMBER, 23), (DECEMBER, 21), Sign::Sagittarius),
    entry((DECEMBER, 22), (DECEMBER, 31), Sign::Capricorn),
    entry((JANUARY, 1), (JANUARY, 19), Sign::Capricorn),
    entry((JANUARY, 20), (FEBRUARY, 18), Sign::Aquarius),
    entry((FEBRUARY, 19), (MARCH, 20), Sign::Pisces),
];

/// The ordered `(range, sign)` table used by [`classify_sign`].
pub fn zodiac_table() -> &'static [(DateRange, Sign)] {
    &ZODIAC_TABLE
}

/// Returns the zodiac sign whose annual range contains `date`.
///
/// Only the month and day take part; the same month/day maps to the same sign
/// in every year.
///
/// # Panics
/// Panics if no table entry matches. The table covers every day of every year,
/// so this signals a broken table rather than bad input.
pub fn classify_sign(date: &CalendarDate) -> Sign {
    classify_in(&ZODIAC_TABLE, date)
}

fn classify_in(table: &[(DateRange, Sign)], date: &CalendarDate) -> Sign {
    let Some(&(range, sign)) = table.iter().find(|(range, _)| range.contains(date)) else {
        tracing::error!(%date, "date fell outside every zodiac range");
        panic!("date {date} does not fall in any zodiac range");
    };

    tracing::trace!(%date, %range, %sign, "classified date");
    sign
}

/// Validates a raw `(year, month, day)` triple and classifies it.
///
/// # Errors
/// Returns a `DateError` if the triple is not a real calendar date.
pub fn classify_ymd(year: u16, month: u8, day: u8) -> Result<Sign, DateError> {
    let date = CalendarDate::new(year, month, day)?;
    Ok(classify_sign(&date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, year};

    /// Iterates every day of `year`.
    fn days_of(year: u16) -> impl Iterator<Item = CalendarDate> {
        std::iter::successors(Some(date(year, 1, 1)), CalendarDate::next_day)
            .take_while(move |d| d.year() == year)
    }

    #[test]
    fn test_table_partitions_every_year() {
        for year in [1900, 2000, 2023, 2024] {
            let mut count = 0;
            for day in days_of(year) {
                let matches = ZODIAC_TABLE.iter().filter(|(range, _)| range.contains(&day)).count();
                assert_eq!(matches, 1, "{day} matched {matches} ranges");
                assert_eq!(classify_sign(&day), classify_sign(&day), "{day} classified inconsistently");
                count += 1;
            }
            let expected = if crate::types::is_leap_year(year) { 366 } else { 365 };
            assert_eq!(count, expected, "year {year}");
        }
    }

    #[test]
    fn test_same_month_day_same_sign_across_years() {
        for day in days_of(2024) {
            let expected = classify_sign(&day);
            for other_year in [1, 1963, 1999, 2023, 9999] {
                let Ok(other) = CalendarDate::new(other_year, day.month(), day.day()) else {
                    continue; // Feb 29 in a common year
                };
                assert_eq!(classify_sign(&other), expected, "{day} vs {other}");
            }
        }
    }

    #[test]
    fn test_every_sign_is_reachable() {
        for sign in Sign::ALL {
            assert!(
                days_of(2023).any(|d| classify_sign(&d) == sign),
                "{sign} never produced"
            );
        }
    }

    #[test]
    fn test_boundaries() {
        struct TestCase {
            date:        (u16, u8, u8),
            expected:    Sign,
            description: &'static str,
        }

        let cases = [
            TestCase { date: (2023, 12, 21), expected: Sign::Sagittarius, description: "last Sagittarius day" },
            TestCase { date: (2023, 12, 22), expected: Sign::Capricorn, description: "first Capricorn day" },
            TestCase { date: (2024, 1, 19), expected: Sign::Capricorn, description: "last Capricorn day" },
            TestCase { date: (2024, 1, 20), expected: Sign::Aquarius, description: "first Aquarius day" },
            TestCase { date: (2000, 3, 20), expected: Sign::Pisces, description: "last Pisces day" },
            TestCase { date: (2000, 3, 21), expected: Sign::Aries, description: "first Aries day" },
            TestCase { date: (2023, 2, 18), expected: Sign::Aquarius, description: "last Aquarius day" },
            TestCase { date: (2023, 2, 19), expected: Sign::Pisces, description: "first Pisces day" },
            TestCase { date: (2024, 2, 29), expected: Sign::Pisces, description: "leap day" },
            TestCase { date: (1999, 12, 31), expected: Sign::Capricorn, description: "New Year's Eve" },
            TestCase { date: (2000, 1, 1), expected: Sign::Capricorn, description: "New Year's Day" },
            TestCase { date: (2023, 10, 23), expected: Sign::Libra, description: "last Libra day" },
            TestCase { date: (2023, 10, 24), expected: Sign::Scorpio, description: "first Scorpio day" },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            assert_eq!(classify_sign(&date(y, m, d)), case.expected, "{}", case.description);
        }
    }

    #[test]
    #[should_panic(expected = "date 2023-07-04 does not fall in any zodiac range")]
    fn test_table_with_gap_panics_naming_the_date() {
        // Cancer removed, leaving Jun 22 through Jul 22 uncovered
        let table: Vec<_> = ZODIAC_TABLE
            .iter()
            .copied()
            .filter(|&(_, sign)| sign != Sign::Cancer)
            .collect();

        assert_eq!(classify_in(&table, &date(2023, 6, 21)), Sign::Gemini);
        classify_in(&table, &date(2023, 7, 4));
    }

    #[test]
    fn test_classify_ymd() {
        assert_eq!(classify_ymd(1963, 11, 11), Ok(Sign::Scorpio));
        assert!(matches!(classify_ymd(2023, 2, 29), Err(DateError::InvalidDay { .. })));
        assert!(matches!(classify_ymd(2023, 0, 1), Err(DateError::InvalidMonth(0))));
    }

    #[test]
    fn test_adjacent_entries_leave_no_gap() {
        for window in ZODIAC_TABLE.windows(2) {
            let (current, _) = window[0];
            let (next, _) = window[1];
            // The Dec 31 -> Jan 1 step is the year boundary, not a gap
            if next.start() > current.end() {
                let day_after = current
                    .end()
                    .in_year(year(2023))
                    .next_day()
                    .expect("2023 is not MAX_YEAR");
                assert_eq!(next.start(), MonthDay::from(day_after), "gap between {current} and {next}");
            }
        }
        assert!(zodiac_table().iter().all(|(range, _)| !range.wraps_year()));
    }
}
