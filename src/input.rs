use rust_decimal::Decimal;
use std::str::FromStr;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::interest::RateBasis;
use crate::locale::NumberLocale;

pub const PRINCIPAL: &str = "principal";
pub const INTEREST_RATE: &str = "interest rate";
pub const INTERVAL_COUNT: &str = "interval count";

/// parse user-typed text into a decimal; grouping separators are accepted
/// only between 3-digit groups of the integer part
pub fn parse_decimal(text: &str, field: &'static str, locale: &NumberLocale) -> Result<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalculatorError::EmptyInput { field });
    }

    let invalid = || CalculatorError::InvalidNumber {
        field,
        input: text.to_string(),
    };

    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    let (integer, fraction) = match compact.split_once(locale.decimal_separator) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (compact.as_str(), None),
    };

    let sep = locale.grouping_separator;
    if !grouping_is_well_placed(integer, sep) || fraction.is_some_and(|f| f.contains(sep)) {
        return Err(invalid());
    }

    let mut normalized: String = integer.chars().filter(|c| *c != sep).collect();
    if let Some(fraction) = fraction {
        normalized.push('.');
        normalized.push_str(fraction);
    }

    Decimal::from_str(&normalized).map_err(|_| invalid())
}

/// 1,234,567 is fine, 2,5 and 1,00,0 are not
fn grouping_is_well_placed(integer: &str, separator: char) -> bool {
    if !integer.contains(separator) {
        return true;
    }
    let digits = integer.trim_start_matches(['-', '+']);
    let mut groups = digits.split(separator);
    let leading = groups.next().is_some_and(|g| (1..=3).contains(&g.len()));
    leading && groups.all(|g| g.len() == 3)
}

/// typed loan terms, ready for the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanInput {
    pub principal: Money,
    /// rate as quoted, monthly or annual depending on `basis`
    pub rate: Rate,
    pub basis: RateBasis,
    /// number of months
    pub periods: Decimal,
}

impl LoanInput {
    pub fn new(principal: Money, rate: Rate, basis: RateBasis, periods: Decimal) -> Self {
        Self {
            principal,
            rate,
            basis,
            periods,
        }
    }

    /// parse the three text fields; the rate text is a percentage
    pub fn parse(
        principal: &str,
        rate_percent: &str,
        periods: &str,
        basis: RateBasis,
        locale: &NumberLocale,
    ) -> Result<Self> {
        let principal = Money::from_decimal(parse_decimal(principal, PRINCIPAL, locale)?);
        let rate = Rate::from_percentage(parse_decimal(rate_percent, INTEREST_RATE, locale)?);
        let periods = parse_decimal(periods, INTERVAL_COUNT, locale)?;

        Ok(Self::new(principal, rate, basis, periods))
    }
}
