use tracing::{debug, trace};

use crate::config::CalculatorConfig;
use crate::errors::{CalculatorError, Result};
use crate::input::LoanInput;
use crate::interest::{round_interest, InterestQuote, RateBasis, RoundingMode};
use crate::locale::NumberLocale;

/// engine for compound interest on pawn loans
///
/// The quoted rate is normalized to a monthly rate, the principal is
/// compounded monthly over the period count and the interest is rounded to
/// the configured unit. `quote` reports why a calculation failed; `compute`
/// returns 0 for any failure, so a half-filled form always shows a number.
#[derive(Debug, Clone, Default)]
pub struct InterestCalculator {
    config: CalculatorConfig,
}

impl InterestCalculator {
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn builder() -> InterestCalculatorBuilder {
        InterestCalculatorBuilder::new()
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// full calculation for already typed input
    pub fn quote_input(&self, input: &LoanInput) -> Result<InterestQuote> {
        let monthly_rate = input
            .basis
            .monthly_rate(input.rate)
            .ok_or_else(|| CalculatorError::calculation("cannot normalize rate to a monthly rate"))?;

        let total = input
            .principal
            .checked_compound(monthly_rate, input.periods)
            .ok_or_else(|| CalculatorError::calculation("compounded total out of range"))?;

        let raw_interest = total
            .checked_sub(input.principal)
            .ok_or_else(|| CalculatorError::calculation("interest out of range"))?;

        let interest = round_interest(raw_interest, self.config.rounding_unit, self.config.rounding_mode)?;

        trace!(
            principal = %input.principal,
            monthly_rate = %monthly_rate,
            periods = %input.periods,
            interest,
            "interest quoted"
        );

        Ok(InterestQuote {
            principal: input.principal,
            quoted_rate: input.rate,
            basis: input.basis,
            monthly_rate,
            periods: input.periods,
            total,
            raw_interest,
            interest,
            rounding_unit: self.config.rounding_unit,
        })
    }

    /// parse the text fields and calculate
    pub fn quote(
        &self,
        principal: &str,
        rate_percent: &str,
        period_count: &str,
        basis: RateBasis,
    ) -> Result<InterestQuote> {
        let input = LoanInput::parse(principal, rate_percent, period_count, basis, &self.config.locale)?;
        self.quote_input(&input)
    }

    /// rounded interest in whole dong; any invalid input yields 0
    pub fn compute(
        &self,
        principal: &str,
        rate_percent: &str,
        period_count: &str,
        basis: impl Into<RateBasis>,
    ) -> i64 {
        match self.quote(principal, rate_percent, period_count, basis.into()) {
            Ok(quote) => quote.interest,
            Err(e) => {
                debug!(error = %e, "interest input rejected, using zero");
                0
            }
        }
    }

    /// rounded interest for typed input; a calculation failure yields 0
    pub fn compute_input(&self, input: &LoanInput) -> i64 {
        match self.quote_input(input) {
            Ok(quote) => quote.interest,
            Err(e) => {
                debug!(error = %e, "interest calculation failed, using zero");
                0
            }
        }
    }
}

/// interest with the default configuration (nearest 1,000 dong, comma grouping)
pub fn compute_interest(principal: &str, rate_percent: &str, period_count: &str, is_monthly: bool) -> i64 {
    InterestCalculator::default().compute(principal, rate_percent, period_count, is_monthly)
}

pub struct InterestCalculatorBuilder {
    rounding_unit: Option<u64>,
    rounding_mode: Option<RoundingMode>,
    locale: Option<NumberLocale>,
}

impl InterestCalculatorBuilder {
    pub fn new() -> Self {
        Self {
            rounding_unit: None,
            rounding_mode: None,
            locale: None,
        }
    }

    pub fn rounding_unit(mut self, unit: u64) -> Self {
        self.rounding_unit = Some(unit);
        self
    }

    pub fn rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = Some(mode);
        self
    }

    pub fn locale(mut self, locale: NumberLocale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn build(self) -> Result<InterestCalculator> {
        let defaults = CalculatorConfig::default();
        InterestCalculator::new(CalculatorConfig {
            rounding_unit: self.rounding_unit.unwrap_or(defaults.rounding_unit),
            rounding_mode: self.rounding_mode.unwrap_or(defaults.rounding_mode),
            locale: self.locale.unwrap_or(defaults.locale),
        })
    }
}

impl Default for InterestCalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
