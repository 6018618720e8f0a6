//! Duration parsing.
//!
//! Time-tracking exports give durations as free text such as `"3h 15m"`.
//! This module turns that text into fractional hours.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)h\s+(\d+(?:\.\d+)?)m\s*$").expect("duration pattern is valid")
});

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Parses a `<hours>h <minutes>m` duration into fractional hours.
///
/// Both unit letters are required and neither component may carry a sign.
/// Returns `None` for anything that does not match the pattern. Callers must
/// keep `None` distinct from zero: an unknown duration is rendered as an
/// empty cell.
///
/// # Examples
///
/// ```
/// use timesheet_formatter::conversion::parse_duration;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_duration("3h 15m"), Some(Decimal::from_str("3.25").unwrap()));
/// assert_eq!(parse_duration("0h 0m"), Some(Decimal::ZERO));
/// assert_eq!(parse_duration("garbage"), None);
/// assert_eq!(parse_duration(""), None);
/// ```
pub fn parse_duration(text: &str) -> Option<Decimal> {
    let captures = DURATION_PATTERN.captures(text)?;
    let hours: Decimal = captures.get(1)?.as_str().parse().ok()?;
    let minutes: Decimal = captures.get(2)?.as_str().parse().ok()?;

    let total_minutes = hours.checked_mul(MINUTES_PER_HOUR)?.checked_add(minutes)?;
    total_minutes.checked_div(MINUTES_PER_HOUR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(parse_duration("3h 15m"), Some(dec("3.25")));
        assert_eq!(parse_duration("8h 30m"), Some(dec("8.5")));
    }

    #[test]
    fn test_zero_is_not_unknown() {
        assert_eq!(parse_duration("0h 0m"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_minutes_over_sixty_roll_into_hours() {
        assert_eq!(parse_duration("1h 90m"), Some(dec("2.5")));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_duration("  2h 45m "), Some(dec("2.75")));
    }

    #[test]
    fn test_fractional_components() {
        assert_eq!(parse_duration("1.5h 0m"), Some(dec("1.5")));
    }

    #[test]
    fn test_unit_letters_and_sign_are_required() {
        assert_eq!(parse_duration("3 15"), None);
        assert_eq!(parse_duration("-1h 15m"), None);
        assert_eq!(parse_duration("1h -15m"), None);
    }

    #[test]
    fn test_invalid_inputs_are_none() {
        assert_eq!(parse_duration("garbage"), None);
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("3h15m"), None);
        assert_eq!(parse_duration("3h"), None);
        assert_eq!(parse_duration("15m"), None);
        assert_eq!(parse_duration("xh 15m"), None);
        assert_eq!(parse_duration("-1h 15m"), None);
        assert_eq!(parse_duration("3:15"), None);
    }

    proptest! {
        #[test]
        fn prop_whole_components_match_minutes(h in 0u32..1000, m in 0u32..60) {
            let parsed = parse_duration(&format!("{}h {}m", h, m));
            let expected = Decimal::from(h * 60 + m) / MINUTES_PER_HOUR;
            prop_assert_eq!(parsed, Some(expected));
        }

        #[test]
        fn prop_text_without_unit_letters_is_none(s in "[0-9 .]{0,12}") {
            prop_assert_eq!(parse_duration(&s), None);
        }
    }
}
