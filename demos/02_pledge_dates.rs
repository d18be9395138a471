/// derive the period count from pledge and redemption dates
use pawn_interest_rs::chrono::NaiveDate;
use pawn_interest_rs::{
    elapsed_months, format_with_unit, InterestCalculator, LoanInput, Money, PeriodCounting,
    Rate, RateBasis,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pledged_on = NaiveDate::from_ymd_opt(2025, 5, 9).ok_or("bad date")?;
    let redeemed_on = NaiveDate::from_ymd_opt(2025, 7, 20).ok_or("bad date")?;
    let calculator = InterestCalculator::default();

    for counting in [PeriodCounting::StartedMonths, PeriodCounting::ExactDays] {
        let periods = elapsed_months(pledged_on, redeemed_on, counting)?;
        let input = LoanInput::new(
            Money::from_major(8_000_000),
            Rate::from_percentage(dec!(2.5)),
            RateBasis::Monthly,
            periods,
        );
        let quote = calculator.quote_input(&input)?;
        println!(
            "{:?}: {} months -> {}",
            counting,
            periods.round_dp(4),
            format_with_unit(quote.interest, &calculator.config().locale)
        );
    }

    Ok(())
}
