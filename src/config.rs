use serde::{Deserialize, Serialize};

use crate::errors::{CalculatorError, Result};
use crate::interest::RoundingMode;
use crate::locale::NumberLocale;

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// interest is rounded to a multiple of this many dong
    pub rounding_unit: u64,
    pub rounding_mode: RoundingMode,
    pub locale: NumberLocale,
}

impl CalculatorConfig {
    /// round to the nearest 1,000 dong
    pub fn thousand_dong() -> Self {
        Self {
            rounding_unit: 1000,
            rounding_mode: RoundingMode::HalfAwayFromZero,
            locale: NumberLocale::en_us(),
        }
    }

    /// round to the nearest 100 dong
    pub fn hundred_dong() -> Self {
        Self {
            rounding_unit: 100,
            ..Self::thousand_dong()
        }
    }

    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.rounding_unit == 0 {
            return Err(CalculatorError::InvalidRoundingUnit {
                unit: self.rounding_unit,
            });
        }
        if self.locale.grouping_separator == self.locale.decimal_separator {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!(
                    "grouping and decimal separator are both {:?}",
                    self.locale.decimal_separator
                ),
            });
        }
        Ok(())
    }

    /// load and validate a configuration from json
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)
            .map_err(|e| CalculatorError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::thousand_dong()
    }
}
