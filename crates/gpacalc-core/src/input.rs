//! GPA text entry gate.
//!
//! GPA fields are free text. A keystroke is committed only if the
//! resulting text still matches this grammar:
//!
//! ```text
//! gpa      := "" | digit [ "." fraction ]
//! fraction := digit{0,3}
//! ```
//!
//! so `""`, `"3"`, `"3."`, and `"3.125"` are accepted while `".5"`,
//! `"10"`, `"3.1234"`, `"-1"`, and `" 3"` are not.

/// Maximum number of digits after the decimal point.
pub const MAX_FRACTION_DIGITS: usize = 3;

/// Lowest and highest GPA that counts toward any aggregate.
pub const GPA_RANGE: std::ops::RangeInclusive<f64> = 0.0..=4.0;

/// Returns `true` if `text` is acceptable GPA input, including the empty
/// string meaning "not yet entered".
pub fn validate_gpa_text(text: &str) -> bool {
    let mut chars = text.chars();

    let Some(first) = chars.next() else {
        return true;
    };
    if !first.is_ascii_digit() {
        return false;
    }

    match chars.next() {
        None => true,
        Some('.') => {
            let fraction = chars.as_str();
            fraction.len() <= MAX_FRACTION_DIGITS && fraction.bytes().all(|b| b.is_ascii_digit())
        }
        Some(_) => false,
    }
}

/// Numeric value of accepted, non-empty GPA text. No range check.
pub fn parse_gpa(text: &str) -> Option<f64> {
    if text.is_empty() || !validate_gpa_text(text) {
        return None;
    }
    let digits = text.strip_suffix('.').unwrap_or(text);
    digits.parse().ok()
}

/// Like [`parse_gpa`], but only values in [0, 4] count.
pub fn parse_gpa_in_range(text: &str) -> Option<f64> {
    parse_gpa(text).filter(|gpa| GPA_RANGE.contains(gpa))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_partial_and_complete_entries() {
        for text in ["", "0", "3", "3.", "3.5", "3.50", "3.125", "9.999"] {
            assert!(validate_gpa_text(text), "{text:?} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_entries() {
        for text in [
            ".5", "10", "3.1234", "-1", " 3", "3 ", "3..", "3.a", "abc", "3,5", "+3", "٣",
        ] {
            assert!(!validate_gpa_text(text), "{text:?} should be rejected");
        }
    }

    #[test]
    fn parses_accepted_text() {
        assert_eq!(parse_gpa("3.5"), Some(3.5));
        assert_eq!(parse_gpa("3."), Some(3.0));
        assert_eq!(parse_gpa("0"), Some(0.0));
        assert_eq!(parse_gpa(""), None);
        assert_eq!(parse_gpa("abc"), None);
        assert_eq!(parse_gpa("5.0"), Some(5.0));
    }

    #[test]
    fn range_check_excludes_out_of_scale_values() {
        assert_eq!(parse_gpa_in_range("4.000"), Some(4.0));
        assert_eq!(parse_gpa_in_range("4.001"), None);
        assert_eq!(parse_gpa_in_range("5.0"), None);
        assert_eq!(parse_gpa_in_range("0.0"), Some(0.0));
    }
}
