//! Number extraction and rounding shared by the normalizers.

use std::sync::LazyLock;

use regex::Regex;

/// Decimal number token: digits, an optional point, optional trailing digits.
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.?[0-9]*").expect("number pattern compiles"));

/// Parses a digit token, dropping runs too long to fit a finite `f64`.
pub fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Extracts every decimal number in `text`, left to right.
pub fn extract_numbers(text: &str) -> Vec<f64> {
    NUMBER_PATTERN
        .find_iter(text)
        .filter_map(|token| parse_finite(token.as_str()))
        .collect()
}

/// Rounds half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_integers_and_decimals() {
        assert_eq!(extract_numbers("$24.50/hr + $4/hr"), vec![24.5, 4.0]);
        assert_eq!(extract_numbers("5. patients"), vec![5.0]);
    }

    #[test]
    fn ignores_text_without_digits() {
        assert!(extract_numbers("depends on the day").is_empty());
        assert!(extract_numbers("").is_empty());
    }

    #[test]
    fn commas_split_tokens() {
        assert_eq!(extract_numbers("63,000"), vec![63.0, 0.0]);
    }

    #[test]
    fn overlong_digit_runs_are_dropped() {
        let huge = "9".repeat(400);
        assert_eq!(extract_numbers(&format!("{huge} or 4")), vec![4.0]);
        assert_eq!(parse_finite(&huge), None);
    }

    #[test]
    fn rounding_keeps_values_near_the_float_limit() {
        assert_eq!(round_to(f64::MAX, 1), f64::MAX);
    }

    #[test]
    fn rounds_to_requested_places() {
        assert_eq!(round_to(30.288_554, 2), 30.29);
        assert_eq!(round_to(3.25, 1), 3.3);
        assert_eq!(round_to(4.0, 1), 4.0);
    }
}
