//! Display formatting for figures

/// Group digits in threes with commas, `13360` -> `13,360`
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-unit currency amount, `$13,360`
pub fn format_currency(amount: u64, symbol: &str) -> String {
    format!("{}{}", symbol, format_number(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(13_360), "13,360");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn format_currency_prefixes_symbol() {
        assert_eq!(format_currency(13_360, "$"), "$13,360");
        assert_eq!(format_currency(5, "€"), "€5");
    }
}
