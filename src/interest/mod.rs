pub mod compound;
pub mod rounding;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

pub use compound::{compute_interest, InterestCalculator, InterestCalculatorBuilder};
pub use rounding::{round_interest, RoundingMode};

/// whether a quoted rate applies per month or per year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RateBasis {
    #[default]
    Monthly,
    Annual,
}

impl RateBasis {
    pub fn from_is_monthly(is_monthly: bool) -> Self {
        if is_monthly {
            RateBasis::Monthly
        } else {
            RateBasis::Annual
        }
    }

    pub fn is_monthly(&self) -> bool {
        matches!(self, RateBasis::Monthly)
    }

    /// normalize a quoted rate to a monthly rate
    pub fn monthly_rate(&self, quoted: Rate) -> Option<Rate> {
        match self {
            RateBasis::Monthly => Some(quoted),
            // compound root, the annual rate is not simply divided by 12
            RateBasis::Annual => quoted.monthly_from_annual(),
        }
    }
}

impl From<bool> for RateBasis {
    fn from(is_monthly: bool) -> Self {
        RateBasis::from_is_monthly(is_monthly)
    }
}

/// interest calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestQuote {
    pub principal: Money,
    pub quoted_rate: Rate,
    pub basis: RateBasis,
    pub monthly_rate: Rate,
    /// number of months compounded
    pub periods: Decimal,
    /// principal plus compounded interest, unrounded
    pub total: Money,
    pub raw_interest: Money,
    /// interest rounded to the rounding unit, in whole dong
    pub interest: i64,
    pub rounding_unit: u64,
}

impl InterestQuote {
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}
