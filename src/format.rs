//! Display formatting for amounts (en-US style, whole units)

/// Format as whole US dollars with thousands separators, e.g. `$470,796,000`
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.abs()))
}

/// Format a BTC quantity as a whole number with thousands separators
pub fn format_quantity(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(rounded.abs()))
}

/// Format a percentage with two decimals, e.g. `3.50%`
pub fn format_percent(percent: f64) -> String {
    format!("{:.2}%", percent)
}

fn group_thousands(whole: f64) -> String {
    let digits = format!("{:.0}", whole);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(470_796_000.0), "$470,796,000");
        assert_eq!(format_currency(113_579.535), "$113,580");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1_000.0), "$1,000");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-0.2), "$0");
        assert_eq!(format_currency(-1_234.0), "-$1,234");
        assert_eq!(format_currency(7_061_940_000.0), "$7,061,940,000");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(4_000.0), "4,000");
        assert_eq!(format_quantity(60_000.0), "60,000");
        assert_eq!(format_quantity(4_500.6), "4,501");
        assert_eq!(format_quantity(12.0), "12");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(3.5), "3.50%");
        assert_eq!(format_percent(2.0727), "2.07%");
    }
}
