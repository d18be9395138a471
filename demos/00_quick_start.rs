/// quick start - interest on a pawn loan in one call
use pawn_interest_rs::{compute_interest, format_with_unit, NumberLocale};

fn main() {
    // 1,000,000 dong at 2% a month for 3 months
    let interest = compute_interest("1,000,000", "2", "3", true);
    println!("monthly rate: {}", format_with_unit(interest, &NumberLocale::en_us()));

    // same loan quoted at 24% a year
    let interest = compute_interest("1,000,000", "24", "3", false);
    println!("annual rate:  {}", format_with_unit(interest, &NumberLocale::en_us()));

    // missing or invalid input never fails, it yields 0
    println!("empty rate:   {}", compute_interest("1,000,000", "", "3", true));
}
