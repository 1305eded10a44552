/// Форматирует целое число с разделителями тысяч (запятыми)
///
/// # Примеры
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    group_thousands(&n.to_string())
}

/// Money with two decimals and thousands separators: `12,345.67`
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
}

/// Money followed by the currency code: `12,345.67 USD`
pub fn format_amount(value: f64, currency: &str) -> String {
    format!("{} {}", format_money(value), currency)
}

/// One-decimal percentage: `23.4%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567890), "1,234,567,890");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(1234.5), "1,234.50");
        assert_eq!(format_money(-98765.432), "-98,765.43");
        assert_eq!(format_money(-0.001), "0.00");
        assert_eq!(format_amount(12345.678, "USD"), "12,345.68 USD");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(23.44), "23.4%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
