use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("empty input: {field}")]
    EmptyInput {
        field: &'static str,
    },

    #[error("invalid number for {field}: {input:?}")]
    InvalidNumber {
        field: &'static str,
        input: String,
    },

    #[error("invalid rounding unit: {unit}")]
    InvalidRoundingUnit {
        unit: u64,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("invalid date range: redeemed {end} before pledged {start}")]
    InvalidDateRange {
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl CalculatorError {
    pub(crate) fn calculation(message: &str) -> Self {
        CalculatorError::CalculationError {
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
