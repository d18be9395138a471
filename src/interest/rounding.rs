use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{CalculatorError, Result};

/// how a midpoint between two multiples of the rounding unit is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundingMode {
    /// 1,500 -> 2,000 and -1,500 -> -2,000
    #[default]
    HalfAwayFromZero,
    /// banker's rounding: 2,500 -> 2,000, 3,500 -> 4,000
    HalfEven,
}

impl RoundingMode {
    pub fn strategy(&self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// round an interest amount to a multiple of `unit` dong and return whole dong
pub fn round_interest(interest: Money, unit: u64, mode: RoundingMode) -> Result<i64> {
    if unit == 0 {
        return Err(CalculatorError::InvalidRoundingUnit { unit });
    }

    interest
        .round_to_unit(unit, mode.strategy())
        .and_then(|rounded| rounded.to_i64())
        .ok_or_else(|| CalculatorError::calculation("interest does not fit in a whole-dong amount"))
}
