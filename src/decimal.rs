use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// money amount in dong; intermediate values keep full decimal precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d)
    }

    /// create from whole dong
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to the nearest multiple of `unit` (e.g. 1000 dong)
    pub fn round_to_unit(&self, unit: u64, strategy: RoundingStrategy) -> Option<Self> {
        let unit = Decimal::from(unit);
        let steps = self.0.checked_div(unit)?.round_dp_with_strategy(0, strategy);
        steps.checked_mul(unit).map(Money)
    }

    /// whole dong, truncating any fraction; None if outside i64
    pub fn to_i64(&self) -> Option<i64> {
        self.0.trunc().to_i64()
    }

    /// principal grown by `rate` per period over `periods` periods
    pub fn checked_compound(&self, rate: Rate, periods: Decimal) -> Option<Self> {
        let base = Decimal::ONE.checked_add(rate.as_decimal())?;
        let factor = checked_pow(base, periods)?;
        self.0.checked_mul(factor).map(Money)
    }

    pub fn checked_sub(&self, other: Money) -> Option<Self> {
        self.0.checked_sub(other.0).map(Money)
    }
}

/// `base^exp` without panicking; integral exponents stay exact
pub(crate) fn checked_pow(base: Decimal, exp: Decimal) -> Option<Decimal> {
    if exp.fract().is_zero() {
        return base.checked_powi(exp.to_i64()?);
    }
    if base.is_zero() && exp.is_sign_positive() {
        return Some(Decimal::ZERO);
    }
    // fractional powers go through ln/exp, which needs a positive base
    if base <= Decimal::ZERO {
        return None;
    }
    let power = base.checked_ln()?.checked_mul(exp)?;
    // e^-66 is already below the smallest positive decimal (1e-28)
    if power < Decimal::from(-66) {
        return Some(Decimal::ZERO);
    }
    match power.checked_exp() {
        Some(value) => Some(value),
        // e^x for a very negative x is below the smallest representable decimal
        None if power.is_sign_negative() => Some(Decimal::ZERO),
        None => None,
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// rate type for interest rates, stored as a fraction (0.02 for 2%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    /// create from decimal (e.g., 0.02 for 2%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 2.5 for 2.5%)
    pub fn from_percentage(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    /// monthly rate equivalent to this annual rate: (1 + r)^(1/12) - 1
    pub fn monthly_from_annual(&self) -> Option<Rate> {
        let base = Decimal::ONE.checked_add(self.0)?;
        let exp = Decimal::ONE / Decimal::from(12);
        let root = checked_pow(base, exp)?;
        Some(Rate(root - Decimal::ONE))
    }

    /// annual rate equivalent to this monthly rate: (1 + m)^12 - 1
    pub fn annual_from_monthly(&self) -> Option<Rate> {
        let base = Decimal::ONE.checked_add(self.0)?;
        let grown = base.checked_powi(12)?;
        Some(Rate(grown - Decimal::ONE))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_to_unit() {
        let m = Money::from_major(61_208);
        let s = RoundingStrategy::MidpointAwayFromZero;
        assert_eq!(m.round_to_unit(1000, s), Some(Money::from_major(61_000)));
        assert_eq!(m.round_to_unit(100, s), Some(Money::from_major(61_200)));
        assert_eq!(Money::from_major(1_500).round_to_unit(1000, s), Some(Money::from_major(2_000)));
        assert_eq!(
            Money::from_major(2_500).round_to_unit(1000, RoundingStrategy::MidpointNearestEven),
            Some(Money::from_major(2_000))
        );
    }

    #[test]
    fn test_round_negative_amount() {
        let m = Money::from_major(-1_500);
        let rounded = m.round_to_unit(1000, RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(rounded, Some(Money::from_major(-2_000)));
    }

    #[test]
    fn test_integral_compounding_is_exact() {
        let principal = Money::from_major(1_000_000);
        let rate = Rate::from_percentage(dec!(2));

        let total = principal.checked_compound(rate, dec!(3)).unwrap();
        assert_eq!(total.as_decimal(), dec!(1061208));
    }

    #[test]
    fn test_fractional_periods() {
        let principal = Money::from_major(1_000_000);
        let rate = Rate::from_percentage(dec!(2));

        let one = principal.checked_compound(rate, dec!(1)).unwrap();
        let half = principal.checked_compound(rate, dec!(1.5)).unwrap();
        let two = principal.checked_compound(rate, dec!(2)).unwrap();
        assert!(one < half);
        assert!(half < two);
    }

    #[test]
    fn test_annual_monthly_round_trip() {
        for pct in [dec!(12), dec!(24.5), dec!(0.5), dec!(100)] {
            let annual = Rate::from_percentage(pct);
            let monthly = annual.monthly_from_annual().unwrap();
            let back = monthly.annual_from_monthly().unwrap();
            assert!((back.as_decimal() - annual.as_decimal()).abs() < dec!(0.000001));
        }
    }

    #[test]
    fn test_monthly_from_annual_is_not_simple_division() {
        let annual = Rate::from_percentage(dec!(12));
        let monthly = annual.monthly_from_annual().unwrap();
        // compound root of 12% is about 0.9489% per month, below 12 / 12
        assert!(monthly.as_percentage() > dec!(0.948));
        assert!(monthly.as_percentage() < dec!(0.950));
    }

    #[test]
    fn test_checked_pow_rejects_bad_base() {
        assert_eq!(checked_pow(dec!(-0.5), dec!(0.5)), None);
        assert_eq!(checked_pow(dec!(0), dec!(-1)), None);
        assert_eq!(checked_pow(dec!(2), dec!(0)), Some(Decimal::ONE));
    }

    #[test]
    fn test_checked_pow_vanishing_results() {
        assert_eq!(checked_pow(dec!(0), dec!(0.5)), Some(Decimal::ZERO));
        assert_eq!(checked_pow(dec!(0), dec!(1.5)), Some(Decimal::ZERO));
        assert_eq!(checked_pow(dec!(0.01), dec!(100.5)), Some(Decimal::ZERO));
    }

    #[test]
    fn test_total_loss_annual_rate() {
        let annual = Rate::from_percentage(dec!(-100));
        assert_eq!(annual.monthly_from_annual(), Some(Rate::from_decimal(dec!(-1))));
    }

    #[test]
    fn test_to_i64_truncates() {
        assert_eq!(Money::from_decimal(dec!(61208.97)).to_i64(), Some(61_208));
        assert_eq!(Money::from_decimal(dec!(-5.5)).to_i64(), Some(-5));
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::from_percentage(dec!(2.5)).to_string(), "2.5%");
    }
}
