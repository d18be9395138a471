pub mod config;
pub mod decimal;
pub mod errors;
pub mod form;
pub mod format;
pub mod input;
pub mod interest;
pub mod locale;
pub mod periods;

// re-export key types
pub use config::CalculatorConfig;
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, Result};
pub use form::InterestForm;
pub use format::{format_amount, format_input, format_with_unit};
pub use input::{parse_decimal, LoanInput};
pub use interest::{
    compute_interest, InterestCalculator, InterestCalculatorBuilder, InterestQuote, RateBasis,
    RoundingMode,
};
pub use locale::NumberLocale;
pub use periods::{elapsed_months, PeriodCounting};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
