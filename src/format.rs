//! amount formatting and live input reformatting, parameterized by locale

use crate::locale::NumberLocale;

/// format whole dong with thousands grouping (e.g. 61,000)
pub fn format_amount(amount: i64, locale: &NumberLocale) -> String {
    let grouped = group_digits(&amount.unsigned_abs().to_string(), locale.grouping_separator);
    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// format with the currency label appended (e.g. 61,000 VND)
pub fn format_with_unit(amount: i64, locale: &NumberLocale) -> String {
    format!("{} {}", format_amount(amount, locale), locale.currency_unit)
}

/// reformat text while it is being typed: digits are regrouped and
/// anything that is not a digit or the first decimal separator is dropped,
/// including a leading `-`, so the result is always non-negative
pub fn format_input(text: &str, locale: &NumberLocale) -> String {
    let mut integer = String::new();
    let mut fraction: Option<String> = None;

    for c in text.chars() {
        if c.is_ascii_digit() {
            match fraction.as_mut() {
                Some(f) => f.push(c),
                None => integer.push(c),
            }
        } else if c == locale.decimal_separator && fraction.is_none() {
            fraction = Some(String::new());
        }
    }

    if integer.is_empty() && fraction.is_none() {
        return String::new();
    }

    let significant = integer.trim_start_matches('0');
    let integer = if significant.is_empty() { "0" } else { significant };

    let mut out = group_digits(integer, locale.grouping_separator);
    if let Some(f) = fraction {
        out.push(locale.decimal_separator);
        out.push_str(&f);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        let en = NumberLocale::en_us();
        assert_eq!(format_amount(0, &en), "0");
        assert_eq!(format_amount(999, &en), "999");
        assert_eq!(format_amount(1_000, &en), "1,000");
        assert_eq!(format_amount(61_000, &en), "61,000");
        assert_eq!(format_amount(1_061_208, &en), "1,061,208");
        assert_eq!(format_amount(-59_000, &en), "-59,000");
        assert_eq!(format_amount(i64::MIN, &en), "-9,223,372,036,854,775,808");

        let vi = NumberLocale::vi_vn();
        assert_eq!(format_amount(1_061_208, &vi), "1.061.208");
    }

    #[test]
    fn test_format_with_unit() {
        assert_eq!(format_with_unit(61_000, &NumberLocale::en_us()), "61,000 VND");
        assert_eq!(format_with_unit(61_000, &NumberLocale::vi_vn()), "61.000 VND");
    }

    #[test]
    fn test_format_input_while_typing() {
        let en = NumberLocale::en_us();
        let mut field = String::new();
        for key in "1000000".chars() {
            field.push(key);
            field = format_input(&field, &en);
        }
        assert_eq!(field, "1,000,000");
    }

    #[test]
    fn test_format_input_decimals() {
        let en = NumberLocale::en_us();
        assert_eq!(format_input("1234.5", &en), "1,234.5");
        assert_eq!(format_input("1234.", &en), "1,234.");
        assert_eq!(format_input(".5", &en), "0.5");
        assert_eq!(format_input("1.2.3", &en), "1.23");

        let vi = NumberLocale::vi_vn();
        assert_eq!(format_input("1.234,5", &vi), "1.234,5");
    }

    #[test]
    fn test_format_input_drops_junk() {
        let en = NumberLocale::en_us();
        assert_eq!(format_input("", &en), "");
        assert_eq!(format_input("abc", &en), "");
        assert_eq!(format_input("007", &en), "7");
        assert_eq!(format_input("000", &en), "0");
        assert_eq!(format_input("1a2b3c4", &en), "1,234");
        assert_eq!(format_input("-5000", &en), "5,000");
    }
}
