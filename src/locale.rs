use serde::{Deserialize, Serialize};

/// separators and currency label used to read and write amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocale {
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub currency_unit: String,
}

impl NumberLocale {
    /// comma grouping, dot decimals: 1,000,000.5
    pub fn en_us() -> Self {
        Self {
            grouping_separator: ',',
            decimal_separator: '.',
            currency_unit: "VND".to_string(),
        }
    }

    /// dot grouping, comma decimals: 1.000.000,5
    pub fn vi_vn() -> Self {
        Self {
            grouping_separator: '.',
            decimal_separator: ',',
            currency_unit: "VND".to_string(),
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::en_us()
    }
}
