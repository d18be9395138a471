/// drive the form state the way a presentation layer would
use pawn_interest_rs::{CalculatorConfig, InterestCalculator, InterestForm, NumberLocale, RateBasis};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let calculator = InterestCalculator::new(
        CalculatorConfig::hundred_dong().with_locale(NumberLocale::vi_vn()),
    )?;
    let locale = calculator.config().locale.clone();
    let mut form = InterestForm::new();

    // every keystroke reformats the principal and recomputes the interest
    for key in "5000000".chars() {
        let mut text = form.principal().to_string();
        text.push(key);
        form.set_principal(&text, &locale);
        println!("{:>12} -> {}", form.principal(), form.interest_display(&calculator));
    }

    form.set_interest_rate("3");
    form.set_interval_count("4");
    println!("monthly: {}", form.interest_display(&calculator));

    form.set_basis(RateBasis::Annual);
    println!("annual:  {}", form.interest_display(&calculator));

    println!("{}", form.quote(&calculator)?.json());

    Ok(())
}
