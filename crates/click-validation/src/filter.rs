//! Keypress filters for numeric inputs

use std::ops::RangeInclusive;

/// Which characters a numeric input lets through while typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFilter {
    /// Digits, sign, comma and decimal point
    Double,
    /// Digits and minus sign
    Integer,
    /// Digits and the punctuation common in phone numbers
    NoLetter,
}

const DOUBLE_REJECTS: &[RangeInclusive<u32>] = &[33..=43, 47..=47, 58..=126];
const INTEGER_REJECTS: &[RangeInclusive<u32>] = &[33..=44, 46..=47, 58..=126];
const NO_LETTER_REJECTS: &[RangeInclusive<u32>] = &[33..=39, 47..=47, 58..=126];

impl KeyFilter {
    /// Should the key with this code reach the input?
    ///
    /// Control keys (below 33) and codes above 126 are always let through.
    pub fn accepts(self, key_code: u32) -> bool {
        let rejects = match self {
            KeyFilter::Double => DOUBLE_REJECTS,
            KeyFilter::Integer => INTEGER_REJECTS,
            KeyFilter::NoLetter => NO_LETTER_REJECTS,
        };
        !rejects.iter().any(|range| range.contains(&key_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyFilter::Double, '5', true)]
    #[case(KeyFilter::Double, '.', true)]
    #[case(KeyFilter::Double, ',', true)]
    #[case(KeyFilter::Double, '-', true)]
    #[case(KeyFilter::Double, '+', false)]
    #[case(KeyFilter::Double, '/', false)]
    #[case(KeyFilter::Double, 'a', false)]
    #[case(KeyFilter::Integer, '7', true)]
    #[case(KeyFilter::Integer, '-', true)]
    #[case(KeyFilter::Integer, '.', false)]
    #[case(KeyFilter::Integer, ',', false)]
    #[case(KeyFilter::NoLetter, '(', true)]
    #[case(KeyFilter::NoLetter, '+', true)]
    #[case(KeyFilter::NoLetter, '#', false)]
    #[case(KeyFilter::NoLetter, 'x', false)]
    fn test_filters(#[case] filter: KeyFilter, #[case] key: char, #[case] accepted: bool) {
        assert_eq!(filter.accepts(key as u32), accepted);
    }

    #[test]
    fn test_control_keys_pass() {
        for filter in [KeyFilter::Double, KeyFilter::Integer, KeyFilter::NoLetter] {
            assert!(filter.accepts(8));
            assert!(filter.accepts(13));
            assert!(filter.accepts(32));
        }
    }
}
