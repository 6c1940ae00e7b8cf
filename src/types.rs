use crate::consts::{CUTOFF_RANGE, MAX_SHORT_YEAR_DIGITS};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A year exactly as it was written, before any interpretation.
///
/// Keeps the trimmed source text next to the integer it denotes, because
/// whether a year is abbreviated depends on both: `"5"` and `"0005"` denote
/// the same value, but only the first is two characters or fewer and thus a
/// candidate for window resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RawYear {
    text: String,
    value: i32,
}

impl RawYear {
    /// Returns the trimmed text this year was built from
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the year as a signed integer
    #[inline]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Returns the year within its century: the value modulo [`CUTOFF_RANGE`].
    ///
    /// Uses euclidean remainder, so the offset is in `0..CUTOFF_RANGE` for
    /// every value: the offset of 2020 is 20, the offset of -1 is 99.
    pub const fn epoch_offset(&self) -> i32 {
        self.value.rem_euclid(CUTOFF_RANGE)
    }

    /// Returns the first year of this year's century: the value with its
    /// offset removed.
    ///
    /// The epoch of 2020 is 2000, the epoch of -1 is -100.
    pub const fn epoch(&self) -> i32 {
        self.value - self.epoch_offset()
    }

    /// Whether this year is abbreviated and eligible for cutoff resolution.
    ///
    /// Both conditions must hold: the value lies in `0..CUTOFF_RANGE` and
    /// the text is at most [`MAX_SHORT_YEAR_DIGITS`] characters long. The
    /// second condition keeps zero-padded years like "0005" literal, since
    /// their spelling already names a full year.
    pub fn is_short(&self) -> bool {
        (0..CUTOFF_RANGE).contains(&self.value) && self.text.len() <= MAX_SHORT_YEAR_DIGITS
    }
}

impl FromStr for RawYear {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let value = trimmed
            .parse::<i32>()
            .map_err(|source| ParseError::InvalidYear {
                text: trimmed.to_owned(),
                source,
            })?;

        Ok(Self {
            text: trimmed.to_owned(),
            value,
        })
    }
}

impl TryFrom<String> for RawYear {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<i32> for RawYear {
    /// Builds a year from an integer; the text becomes the canonical decimal
    /// rendering, without padding.
    fn from(value: i32) -> Self {
        Self {
            text: value.to_string(),
            value,
        }
    }
}

impl From<RawYear> for i32 {
    fn from(year: RawYear) -> Self {
        year.value
    }
}

impl From<RawYear> for String {
    fn from(year: RawYear) -> Self {
        year.text
    }
}

impl fmt::Display for RawYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let year: RawYear = "2020".parse().unwrap();
        assert_eq!(year.text(), "2020");
        assert_eq!(year.value(), 2020);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let year: RawYear = "  05 ".parse().unwrap();
        assert_eq!(year.text(), "05");
        assert_eq!(year.value(), 5);
    }

    #[test]
    fn test_parse_negative() {
        let year: RawYear = "-44".parse().unwrap();
        assert_eq!(year.text(), "-44");
        assert_eq!(year.value(), -44);
    }

    #[test]
    fn test_parse_empty() {
        let result = "".parse::<RawYear>();
        assert!(matches!(result, Err(ParseError::EmptyInput)));

        let result = "   ".parse::<RawYear>();
        assert!(matches!(result, Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_parse_invalid() {
        let result = "foobar".parse::<RawYear>();
        assert!(matches!(result, Err(ParseError::InvalidYear { .. })));

        let result = "19 50".parse::<RawYear>();
        assert!(matches!(result, Err(ParseError::InvalidYear { .. })));

        let result = "20.5".parse::<RawYear>();
        assert!(matches!(result, Err(ParseError::InvalidYear { .. })));
    }

    #[test]
    fn test_parse_invalid_keeps_text() {
        let Err(ParseError::InvalidYear { text, .. }) = " foobar ".parse::<RawYear>() else {
            panic!("expected InvalidYear");
        };
        assert_eq!(text, "foobar");
    }

    #[test]
    fn test_from_int_canonical_text() {
        assert_eq!(RawYear::from(5).text(), "5");
        assert_eq!(RawYear::from(0).text(), "0");
        assert_eq!(RawYear::from(-44).text(), "-44");
        assert_eq!(RawYear::from(2020).text(), "2020");
    }

    #[test]
    fn test_epoch_and_offset() {
        let cases = [
            (2020, 2000, 20),
            (1999, 1900, 99),
            (2000, 2000, 0),
            (100, 100, 0),
            (5, 0, 5),
            (0, 0, 0),
        ];
        for (value, epoch, offset) in cases {
            let year = RawYear::from(value);
            assert_eq!(year.epoch(), epoch, "epoch of {value}");
            assert_eq!(year.epoch_offset(), offset, "offset of {value}");
        }
    }

    #[test]
    fn test_epoch_and_offset_negative() {
        // Euclidean remainder keeps offsets non-negative below year zero
        let cases = [(-1, -100, 99), (-100, -100, 0), (-101, -200, 99)];
        for (value, epoch, offset) in cases {
            let year = RawYear::from(value);
            assert_eq!(year.epoch(), epoch, "epoch of {value}");
            assert_eq!(year.epoch_offset(), offset, "offset of {value}");
        }
    }

    #[test]
    fn test_epoch_plus_offset_is_value() {
        for value in [-250, -100, -1, 0, 7, 99, 100, 1850, 2020] {
            let year = RawYear::from(value);
            assert_eq!(year.epoch() + year.epoch_offset(), value);
        }
    }

    #[test]
    fn test_is_short() {
        for text in ["0", "5", "05", "99", " 7 "] {
            let year: RawYear = text.parse().unwrap();
            assert!(year.is_short(), "{text:?} should be short");
        }

        for text in ["005", "0005", "100", "1850", "-5"] {
            let year: RawYear = text.parse().unwrap();
            assert!(!year.is_short(), "{text:?} should not be short");
        }
    }

    #[test]
    fn test_display_preserves_text() {
        let year: RawYear = "05".parse().unwrap();
        assert_eq!(year.to_string(), "05");

        assert_eq!(RawYear::from(5).to_string(), "5");
    }

    #[test]
    fn test_conversions() {
        let year: RawYear = "0099".parse().unwrap();
        assert_eq!(i32::from(year.clone()), 99);
        assert_eq!(String::from(year), "0099");
    }

    #[test]
    fn test_serde_round_trip() {
        let year: RawYear = "05".parse().unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "\"05\"");

        let parsed: RawYear = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let result: Result<RawYear, _> = serde_json::from_str("\"foobar\"");
        assert!(result.is_err());

        let result: Result<RawYear, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
