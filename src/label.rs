//! Localized display names for zodiac signs.
//!
//! Tables are keyed by the sign identifier (`"aries"`, ...) rather than by
//! [`Sign`] itself, so a caller holding only the textual form from
//! classification can still be served.

use crate::classify::classify_sign;
use crate::consts::SIGN_COUNT;
use crate::date::CalendarDate;
use crate::sign::Sign;

/// A read-only table of display names, one per sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelTable {
    /// BCP 47 tag of the language the labels are written in
    language: &'static str,
    /// Indexed by [`Sign::index`]
    labels:   [&'static str; SIGN_COUNT],
}

/// Simplified Chinese sign names.
pub const ZH_HANS: LabelTable = LabelTable::new(
    "zh-Hans",
    [
        "牡羊座", // aries
        "金牛座", // taurus
        "双子座", // gemini
        "巨蟹座", // cancer
        "狮子座", // leo
        "处女座", // virgo
        "天秤座", // libra
        "天蝎座", // scorpio
        "射手座", // sagittarius
        "摩羯座", // capricorn
        "水瓶座", // aquarius
        "双鱼座", // pisces
    ],
);

impl LabelTable {
    /// Creates a table from labels listed in `Sign::ALL` order.
    pub const fn new(language: &'static str, labels: [&'static str; SIGN_COUNT]) -> Self {
        Self { language, labels }
    }

    pub const fn language(&self) -> &'static str {
        self.language
    }

    /// Display name for `sign`.
    pub const fn label(&self, sign: Sign) -> &'static str {
        self.labels[sign.index()]
    }

    /// Display name for a textual sign identifier.
    ///
    /// The identifier must match exactly (no trimming, no case folding).
    /// Unknown identifiers yield an empty string rather than an error, so that
    /// a missing label never aborts the caller.
    pub fn translate(&self, id: &str) -> &'static str {
        match Sign::ALL.into_iter().find(|sign| sign.id() == id) {
            Some(sign) => self.label(sign),
            None => {
                tracing::debug!(language = self.language, id, "no label for identifier");
                ""
            },
        }
    }
}

/// Classifies `date` and returns the Simplified Chinese name of its sign.
///
/// # Panics
/// Panics under the same (unreachable) condition as [`classify_sign`].
pub fn localized_sign(date: &CalendarDate) -> String {
    localized_sign_in(&ZH_HANS, date)
}

/// Classifies `date` and looks the result up in `table` by identifier.
///
/// # Panics
/// Panics under the same (unreachable) condition as [`classify_sign`].
pub fn localized_sign_in(table: &LabelTable, date: &CalendarDate) -> String {
    let sign = classify_sign(date);
    table.translate(sign.id()).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_every_sign_has_a_label() {
        for sign in Sign::ALL {
            assert!(!ZH_HANS.label(sign).is_empty(), "{sign} has no label");
        }
    }

    #[test]
    fn test_labels_are_distinct() {
        let mut labels: Vec<_> = Sign::ALL.into_iter().map(|sign| ZH_HANS.label(sign)).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), SIGN_COUNT);
    }

    #[test]
    fn test_translate_by_identifier() {
        struct TestCase {
            id:       &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase { id: "aries", expected: "牡羊座" },
            TestCase { id: "leo", expected: "狮子座" },
            TestCase { id: "capricorn", expected: "摩羯座" },
            TestCase { id: "pisces", expected: "双鱼座" },
            TestCase { id: "ophiuchus", expected: "" },
            TestCase { id: "Aries", expected: "" },
            TestCase { id: " leo ", expected: "" },
            TestCase { id: "PISCES", expected: "" },
            TestCase { id: "", expected: "" },
        ];

        for case in &cases {
            assert_eq!(ZH_HANS.translate(case.id), case.expected, "identifier {:?}", case.id);
        }
    }

    #[test]
    fn test_translate_agrees_with_label() {
        for sign in Sign::ALL {
            assert_eq!(ZH_HANS.translate(sign.id()), ZH_HANS.label(sign));
        }
    }

    #[test]
    fn test_localized_sign() {
        assert_eq!(localized_sign(&date(1963, 12, 18)), "射手座");
        assert_eq!(localized_sign(&date(1963, 11, 11)), "天蝎座");
        assert_eq!(localized_sign(&date(2024, 2, 29)), ZH_HANS.label(Sign::Pisces));
    }

    #[test]
    fn test_sibling_table() {
        const EN: LabelTable = LabelTable::new(
            "en",
            [
                "Aries", "Taurus", "Gemini", "Cancer", "Leo", "Virgo", "Libra", "Scorpio",
                "Sagittarius", "Capricorn", "Aquarius", "Pisces",
            ],
        );

        assert_eq!(EN.language(), "en");
        assert_eq!(localized_sign_in(&EN, &date(2000, 3, 21)), "Aries");
        assert_eq!(localized_sign_in(&EN, &date(1999, 12, 31)), "Capricorn");
    }
}
