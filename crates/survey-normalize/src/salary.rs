//! Salary normalization: free-text pay to an hourly USD rate.
//!
//! The answer's largest number is taken as the pay amount, so differentials
//! like "+ $4/hr nights" do not depress the base rate. The pay period is then
//! chosen from an ordered rule table (first match wins) and the amount is
//! divided by the hours in that period.

use serde::{Deserialize, Serialize};
use survey_model::{FieldValue, format_numeric};

use crate::numeric::{extract_numbers, round_to};

/// Paid hours in a working day.
pub const HOURS_PER_DAY: f64 = 8.0;
/// Working days in a week.
pub const WORKDAYS_PER_WEEK: f64 = 5.0;
/// Average working days in a month.
pub const WORKDAYS_PER_MONTH: f64 = 21.6666;
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Amounts above this are read as annual pay even without a keyword.
pub const ANNUAL_THRESHOLD: f64 = 20_000.0;

const DAILY_KEYWORDS: &[&str] = &["day", "daily", "diem"];
const ANNUAL_KEYWORDS: &[&str] = &["yr", "year", "yearly", "annual", "annually"];
const MONTHLY_KEYWORDS: &[&str] = &["month", "monthly"];
const BIWEEKLY_KEYWORDS: &[&str] = &["bi", "other", "2", "two", "weeks"];

/// Accepted hourly range. Anything outside normalizes to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SalaryBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for SalaryBounds {
    fn default() -> Self {
        Self {
            min: 3.0,
            max: 200.0,
        }
    }
}

impl SalaryBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, hourly: f64) -> bool {
        hourly >= self.min && hourly <= self.max
    }
}

/// Pay period an amount is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayPeriod {
    Hourly,
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Annual,
}

impl PayPeriod {
    /// Paid hours in one period.
    pub fn hours(self) -> f64 {
        match self {
            Self::Hourly => 1.0,
            Self::Daily => HOURS_PER_DAY,
            Self::Weekly => WORKDAYS_PER_WEEK * HOURS_PER_DAY,
            Self::Biweekly => WORKDAYS_PER_WEEK * 2.0 * HOURS_PER_DAY,
            Self::Monthly => WORKDAYS_PER_MONTH * HOURS_PER_DAY,
            Self::Annual => MONTHS_PER_YEAR * WORKDAYS_PER_MONTH * HOURS_PER_DAY,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }
}

/// Prepared answer text and the amount extracted from it.
struct SalaryText<'a> {
    text: &'a str,
    amount: f64,
    bounds: SalaryBounds,
}

impl SalaryText<'_> {
    fn mentions(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| self.text.contains(keyword))
    }
}

type PeriodRule = (fn(&SalaryText<'_>) -> bool, PayPeriod);

/// Checked in order; [`PayPeriod::Weekly`] when none match.
const PERIOD_RULES: [PeriodRule; 5] = [
    (mentions_daily, PayPeriod::Daily),
    (below_hourly_ceiling, PayPeriod::Hourly),
    (looks_annual, PayPeriod::Annual),
    (mentions_monthly, PayPeriod::Monthly),
    (mentions_biweekly, PayPeriod::Biweekly),
];

fn mentions_daily(salary: &SalaryText<'_>) -> bool {
    salary.mentions(DAILY_KEYWORDS)
}

fn below_hourly_ceiling(salary: &SalaryText<'_>) -> bool {
    salary.amount < salary.bounds.max
}

fn looks_annual(salary: &SalaryText<'_>) -> bool {
    salary.amount > ANNUAL_THRESHOLD || salary.mentions(ANNUAL_KEYWORDS)
}

fn mentions_monthly(salary: &SalaryText<'_>) -> bool {
    salary.mentions(MONTHLY_KEYWORDS)
}

fn mentions_biweekly(salary: &SalaryText<'_>) -> bool {
    salary.mentions(BIWEEKLY_KEYWORDS)
}

fn period_for(salary: &SalaryText<'_>) -> PayPeriod {
    PERIOD_RULES
        .iter()
        .find(|(applies, _)| applies(salary))
        .map_or(PayPeriod::Weekly, |(_, period)| *period)
}

/// Lowercases and drops thousands separators.
fn prepare(text: &str) -> String {
    text.to_lowercase().replace(',', "")
}

/// Largest number in the prepared text, `0.0` when there is none.
fn candidate_amount(prepared: &str) -> f64 {
    extract_numbers(prepared).into_iter().fold(0.0, f64::max)
}

/// Every intermediate of a salary normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryParse {
    /// Largest number found in the answer.
    pub amount: f64,
    pub period: PayPeriod,
    /// `amount` divided by the period's hours, before range check and rounding.
    pub hourly: f64,
    /// Final value: `hourly` rounded to cents, or `0.0` when out of bounds.
    pub value: f64,
}

impl SalaryParse {
    pub fn is_resolved(&self) -> bool {
        self.value != 0.0
    }
}

/// Chooses the pay period for `amount` as quoted in `text`.
pub fn classify_pay_period(text: &str, amount: f64, bounds: &SalaryBounds) -> PayPeriod {
    let prepared = prepare(text);
    period_for(&SalaryText {
        text: &prepared,
        amount,
        bounds: *bounds,
    })
}

/// Runs the full salary normalization and keeps the intermediates.
pub fn parse_salary(text: &str, bounds: &SalaryBounds) -> SalaryParse {
    let prepared = prepare(text);
    let amount = candidate_amount(&prepared);
    let period = period_for(&SalaryText {
        text: &prepared,
        amount,
        bounds: *bounds,
    });
    let hourly = amount / period.hours();
    let value = if bounds.contains(hourly) {
        round_to(hourly, 2)
    } else {
        0.0
    };
    SalaryParse {
        amount,
        period,
        hourly,
        value,
    }
}

/// Normalizes a pay answer to an hourly rate rounded to cents.
///
/// Returns `0.0` when no rate inside `bounds` can be derived.
///
/// ```
/// use survey_normalize::{SalaryBounds, normalize_salary};
///
/// let bounds = SalaryBounds::default();
/// assert_eq!(normalize_salary("$24/hr + $4/hr nights", &bounds), 24.0);
/// assert_eq!(normalize_salary("me at $63,000", &bounds), 30.29);
/// assert_eq!(normalize_salary("varies", &bounds), 0.0);
/// ```
pub fn normalize_salary(text: &str, bounds: &SalaryBounds) -> f64 {
    parse_salary(text, bounds).value
}

/// Normalizes a salary cell. Numeric cells are read as their plain text.
pub fn normalize_salary_value(value: &FieldValue, bounds: &SalaryBounds) -> f64 {
    match value {
        FieldValue::Text(text) => normalize_salary(text, bounds),
        FieldValue::Number(amount) => normalize_salary(&format_numeric(*amount), bounds),
        FieldValue::Missing => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str, amount: f64) -> PayPeriod {
        classify_pay_period(text, amount, &SalaryBounds::default())
    }

    #[test]
    fn daily_keywords_win_over_everything() {
        assert_eq!(classify("$400 per diem", 400.0), PayPeriod::Daily);
        assert_eq!(classify("$30/hr days", 30.0), PayPeriod::Daily);
        assert_eq!(classify("paid daily", 90_000.0), PayPeriod::Daily);
    }

    #[test]
    fn amounts_under_ceiling_are_hourly() {
        assert_eq!(classify("$45 a year", 45.0), PayPeriod::Hourly);
        assert_eq!(classify("199.99", 199.99), PayPeriod::Hourly);
    }

    #[test]
    fn ceiling_is_exclusive() {
        assert_eq!(classify("flat rate", 199.5), PayPeriod::Hourly);
        assert_eq!(classify("flat rate", 200.0), PayPeriod::Weekly);
    }

    #[test]
    fn any_digit_two_reads_as_biweekly() {
        assert_eq!(classify("$2400", 2400.0), PayPeriod::Biweekly);
    }

    #[test]
    fn large_amounts_are_annual() {
        assert_eq!(classify("85000", 85_000.0), PayPeriod::Annual);
        assert_eq!(classify("$9000 yearly", 9000.0), PayPeriod::Annual);
        assert_eq!(classify("$900/yr", 900.0), PayPeriod::Annual);
    }

    #[test]
    fn monthly_precedes_biweekly() {
        assert_eq!(classify("$5000 every other month", 5000.0), PayPeriod::Monthly);
        assert_eq!(classify("$3000 every two weeks", 3000.0), PayPeriod::Biweekly);
    }

    #[test]
    fn weekly_is_the_fallback() {
        assert_eq!(classify("$1500 a week", 1500.0), PayPeriod::Weekly);
    }

    #[test]
    fn period_hours() {
        assert_eq!(PayPeriod::Weekly.hours(), 40.0);
        assert_eq!(PayPeriod::Biweekly.hours(), 80.0);
        assert!((PayPeriod::Annual.hours() - 2079.9936).abs() < 1e-9);
    }

    #[test]
    fn parse_keeps_intermediates() {
        let parse = parse_salary("$1,500 a week", &SalaryBounds::default());
        assert_eq!(parse.amount, 1500.0);
        assert_eq!(parse.period, PayPeriod::Weekly);
        assert_eq!(parse.hourly, 37.5);
        assert_eq!(parse.value, 37.5);
        assert!(parse.is_resolved());
    }

    #[test]
    fn numeric_cells_use_plain_text() {
        let bounds = SalaryBounds::default();
        assert_eq!(normalize_salary_value(&FieldValue::Number(38.0), &bounds), 38.0);
        assert_eq!(normalize_salary_value(&FieldValue::Missing, &bounds), 0.0);
    }
}
