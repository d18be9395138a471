use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{CalculatorError, Result};

/// how a partial month between pledge and redemption is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PeriodCounting {
    /// a started month is charged as a full month
    #[default]
    StartedMonths,
    /// remaining days count as days / 30 of a month
    ExactDays,
}

/// number of monthly periods between the pledge date and the redemption date
pub fn elapsed_months(
    pledged_on: NaiveDate,
    redeemed_on: NaiveDate,
    counting: PeriodCounting,
) -> Result<Decimal> {
    if redeemed_on < pledged_on {
        return Err(CalculatorError::InvalidDateRange {
            start: pledged_on,
            end: redeemed_on,
        });
    }

    let whole = whole_months_between(pledged_on, redeemed_on);
    let anniversary = add_months(pledged_on, whole)?;
    let rest_days = (redeemed_on - anniversary).num_days();

    let months = Decimal::from(whole);
    Ok(match counting {
        PeriodCounting::StartedMonths if rest_days > 0 => months + Decimal::ONE,
        PeriodCounting::StartedMonths => months,
        PeriodCounting::ExactDays => months + Decimal::from(rest_days) / dec!(30),
    })
}

/// full calendar months from `start` to `end`; month-end dates clamp (jan 31 -> feb 28)
fn whole_months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if months > 0 {
        let reached = u32::try_from(months)
            .ok()
            .and_then(|m| start.checked_add_months(Months::new(m)));
        if reached.map_or(true, |d| d > end) {
            months -= 1;
        }
    }
    months.max(0) as u32
}

fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| CalculatorError::calculation("date out of range"))
}
