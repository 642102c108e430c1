//! Patient-nurse ratio normalization.
//!
//! Staffing answers come as "4:1", "1:4", "5-7", "4 patients" or
//! "1 nurse to 5 patients". Each rule below reads one of these shapes; the
//! first rule that yields a nonzero ratio wins. Ratios are always reported as
//! patients per nurse, so values below one are inverted.

use std::sync::LazyLock;

use regex::Regex;
use survey_model::FieldValue;

use crate::numeric::{extract_numbers, parse_finite, round_to};

static COLON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*:\s*([0-9]+(?:\.[0-9]+)?)")
        .expect("colon ratio pattern compiles")
});

static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*-\s*([0-9]+(?:\.[0-9]+)?)")
        .expect("range pattern compiles")
});

/// A number followed by a dash and a non-digit, as in "7-May".
static DATE_FRAGMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+\s*-\s*[^0-9\s]").expect("date fragment pattern compiles")
});

/// Shape of staffing answer a ratio was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioRule {
    /// `N:M`
    Colon,
    /// `N-M` with `N < M`
    Range,
    /// A lone number, or several numbers including a 1.
    BareNumbers,
}

impl RatioRule {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Colon => "colon",
            Self::Range => "range",
            Self::BareNumbers => "bare-numbers",
        }
    }
}

const RATIO_RULES: [(RatioRule, fn(&str) -> f64); 3] = [
    (RatioRule::Colon, colon_ratio),
    (RatioRule::Range, range_ratio),
    (RatioRule::BareNumbers, bare_number_ratio),
];

/// Raw ratio read by the first matching rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioMatch {
    pub rule: RatioRule,
    /// Value before inversion and rounding.
    pub raw: f64,
}

impl RatioMatch {
    /// Patients per nurse, rounded to one decimal.
    pub fn patients_per_nurse(&self) -> f64 {
        let ratio = if self.raw > 0.0 && self.raw < 1.0 {
            1.0 / self.raw
        } else {
            self.raw
        };
        round_to(ratio, 1)
    }
}

fn capture_pairs(pattern: &Regex, text: &str) -> impl Iterator<Item = (f64, f64)> {
    pattern.captures_iter(text).filter_map(|caps| {
        let left = parse_finite(caps.get(1)?.as_str())?;
        let right = parse_finite(caps.get(2)?.as_str())?;
        Some((left, right))
    })
}

/// Largest `max/min` across every `N:M` in the text.
fn colon_ratio(text: &str) -> f64 {
    capture_pairs(&COLON_PATTERN, text)
        .map(|(left, right)| {
            let low = left.min(right);
            if low == 0.0 {
                0.0
            } else {
                left.max(right) / low
            }
        })
        .filter(|ratio| ratio.is_finite())
        .fold(0.0, f64::max)
}

/// Largest midpoint across every ascending `N-M` in the text.
fn range_ratio(text: &str) -> f64 {
    capture_pairs(&RANGE_PATTERN, text)
        .filter(|(low, high)| low < high)
        .map(|(low, high)| low / 2.0 + high / 2.0)
        .fold(0.0, f64::max)
}

fn bare_number_ratio(text: &str) -> f64 {
    let numbers = extract_numbers(text);
    match numbers.as_slice() {
        [] => 0.0,
        [only] => {
            if DATE_FRAGMENT_PATTERN.is_match(text) {
                0.0
            } else {
                *only
            }
        }
        many if many.contains(&1.0) => many.iter().copied().fold(0.0, f64::max),
        _ => 0.0,
    }
}

/// Finds the first rule that reads a nonzero ratio from `text`.
pub fn detect_ratio(text: &str) -> Option<RatioMatch> {
    RATIO_RULES.iter().find_map(|(rule, read)| {
        let raw = read(text);
        (raw > 0.0 && raw.is_finite()).then_some(RatioMatch { rule: *rule, raw })
    })
}

/// Normalizes a staffing answer to patients per nurse.
///
/// Returns `0.0` when no rule reads a ratio.
///
/// ```
/// use survey_normalize::normalize_ratio_text;
///
/// assert_eq!(normalize_ratio_text("4:1"), 4.0);
/// assert_eq!(normalize_ratio_text("5-7"), 6.0);
/// assert_eq!(normalize_ratio_text("1 nurse to 5 patients"), 5.0);
/// ```
pub fn normalize_ratio_text(text: &str) -> f64 {
    detect_ratio(text).map_or(0.0, |found| found.patients_per_nurse())
}

/// Normalizes a staffing cell. Only text cells are read.
pub fn normalize_ratio(value: &FieldValue) -> f64 {
    value.as_text().map_or(0.0, normalize_ratio_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colon_keeps_the_largest_ratio() {
        assert_eq!(colon_ratio("days 1:4, nights 1:6"), 6.0);
        assert_eq!(colon_ratio("1 : 3"), 3.0);
        assert_eq!(colon_ratio("0:4"), 0.0);
    }

    #[test]
    fn range_requires_ascending_bounds() {
        assert_eq!(range_ratio("4-6"), 5.0);
        assert_eq!(range_ratio("6-4"), 0.0);
        assert_eq!(range_ratio("2-3 or 4 - 6"), 5.0);
    }

    #[test]
    fn bare_number_rejects_date_fragments() {
        assert_eq!(bare_number_ratio("7-May"), 0.0);
        assert_eq!(bare_number_ratio("about 5"), 5.0);
    }

    #[test]
    fn bare_numbers_need_a_one() {
        assert_eq!(bare_number_ratio("1 nurse 6 patients"), 6.0);
        assert_eq!(bare_number_ratio("5 or 6"), 0.0);
    }

    #[test]
    fn detect_reports_the_rule() {
        let found = detect_ratio("1:5").expect("colon ratio");
        assert_eq!(found.rule, RatioRule::Colon);
        assert_eq!(found.raw, 5.0);

        let found = detect_ratio("0.25").expect("bare ratio");
        assert_eq!(found.rule, RatioRule::BareNumbers);
        assert_eq!(found.patients_per_nurse(), 4.0);

        assert!(detect_ratio("it depends").is_none());
    }

    #[test]
    fn overlong_digit_runs_never_yield_infinity() {
        let huge = "9".repeat(400);
        assert_eq!(normalize_ratio_text(&format!("{huge}:1")), 1.0);
        assert_eq!(normalize_ratio_text(&format!("{huge}:1 or 1:3")), 3.0);
        assert_eq!(normalize_ratio_text(&huge), 0.0);

        let near_max = format!("1{}", "0".repeat(308));
        assert_eq!(colon_ratio(&format!("{near_max}:0.5")), 0.0);
        assert_eq!(normalize_ratio_text(&format!("{near_max}:0.5")), 0.0);
    }

    #[test]
    fn colon_takes_precedence_over_range() {
        let found = detect_ratio("1:2 or 3-9").expect("ratio");
        assert_eq!(found.rule, RatioRule::Colon);
        assert_eq!(found.patients_per_nurse(), 2.0);
    }
}
