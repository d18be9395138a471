use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::format::{format_input, format_with_unit};
use crate::interest::{InterestCalculator, InterestQuote, RateBasis};
use crate::locale::NumberLocale;

/// text state of the pawn interest form
///
/// Holds exactly what the user typed. The interest is never stored; the
/// presentation layer calls `interest` after every change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestForm {
    principal: String,
    interest_rate: String,
    basis: RateBasis,
    interval_count: String,
}

impl InterestForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }

    pub fn interest_rate(&self) -> &str {
        &self.interest_rate
    }

    pub fn basis(&self) -> RateBasis {
        self.basis
    }

    pub fn interval_count(&self) -> &str {
        &self.interval_count
    }

    /// principal is regrouped with thousands separators as it is typed
    pub fn set_principal(&mut self, text: &str, locale: &NumberLocale) {
        self.principal = format_input(text, locale);
    }

    pub fn set_interest_rate(&mut self, text: &str) {
        self.interest_rate = text.to_string();
    }

    pub fn set_basis(&mut self, basis: RateBasis) {
        self.basis = basis;
    }

    pub fn set_interval_count(&mut self, text: &str) {
        self.interval_count = text.to_string();
    }

    pub fn clear(&mut self) {
        *self = Self {
            basis: self.basis,
            ..Self::default()
        };
    }

    pub fn quote(&self, calculator: &InterestCalculator) -> Result<InterestQuote> {
        calculator.quote(&self.principal, &self.interest_rate, &self.interval_count, self.basis)
    }

    /// interest due in whole dong, 0 while any field is missing or invalid
    pub fn interest(&self, calculator: &InterestCalculator) -> i64 {
        calculator.compute(&self.principal, &self.interest_rate, &self.interval_count, self.basis)
    }

    pub fn interest_display(&self, calculator: &InterestCalculator) -> String {
        format_with_unit(self.interest(calculator), &calculator.config().locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;

    fn type_principal(form: &mut InterestForm, keys: &str, locale: &NumberLocale) {
        for key in keys.chars() {
            let mut text = form.principal().to_string();
            text.push(key);
            form.set_principal(&text, locale);
        }
    }

    #[test]
    fn test_empty_form_shows_zero() {
        let calc = InterestCalculator::default();
        let form = InterestForm::new();
        assert_eq!(form.interest(&calc), 0);
        assert_eq!(form.interest_display(&calc), "0 VND");
        assert!(form.quote(&calc).is_err());
    }

    #[test]
    fn test_recomputes_on_every_change() {
        let calc = InterestCalculator::default();
        let locale = calc.config().locale.clone();
        let mut form = InterestForm::new();

        type_principal(&mut form, "1000000", &locale);
        assert_eq!(form.principal(), "1,000,000");
        assert_eq!(form.interest(&calc), 0);

        form.set_interest_rate("2");
        assert_eq!(form.interest(&calc), 0);

        form.set_interval_count("3");
        assert_eq!(form.interest(&calc), 61_000);
        assert_eq!(form.interest_display(&calc), "61,000 VND");

        form.set_basis(RateBasis::Annual);
        assert!(form.interest(&calc) < 61_000);
    }

    #[test]
    fn test_vietnamese_grouping() {
        let calc = InterestCalculator::new(
            CalculatorConfig::hundred_dong().with_locale(NumberLocale::vi_vn()),
        )
        .unwrap();
        let locale = calc.config().locale.clone();
        let mut form = InterestForm::new();

        type_principal(&mut form, "1000000", &locale);
        form.set_interest_rate("2");
        form.set_interval_count("3");

        assert_eq!(form.principal(), "1.000.000");
        assert_eq!(form.interest_display(&calc), "61.200 VND");
    }

    #[test]
    fn test_clear_keeps_basis() {
        let mut form = InterestForm::new();
        form.set_principal("500000", &NumberLocale::default());
        form.set_interest_rate("3");
        form.set_basis(RateBasis::Annual);

        form.clear();
        assert_eq!(form.principal(), "");
        assert_eq!(form.interest_rate(), "");
        assert_eq!(form.interval_count(), "");
        assert_eq!(form.basis(), RateBasis::Annual);
    }
}
