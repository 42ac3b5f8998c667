//! Number formatting helpers for cards and tables

/// Currency sign used across the consoles (Bangladeshi taka)
pub const CURRENCY_SIGN: &str = "৳";

/// Formats a number with a thousands separator and the given number of decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2, ','), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8, separator: char) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals.min(6) as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Insert the separator every 3 digits from the right
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(separator);
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Money with the currency sign; decimals only when the value has a fraction
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_currency;
/// assert_eq!(format_currency(1450.0), "৳1,450");
/// assert_eq!(format_currency(99.5), "৳99.50");
/// ```
pub fn format_currency(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let decimals = if rounded.fract() == 0.0 { 0 } else { 2 };
    let body = format_number_with_decimals(rounded.abs(), decimals, ',');
    if rounded < 0.0 {
        format!("-{}{}", CURRENCY_SIGN, body)
    } else {
        format!("{}{}", CURRENCY_SIGN, body)
    }
}

/// Plain integer count with grouping
pub fn format_count(value: u64) -> String {
    format_number_with_decimals(value as f64, 0, ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1450.0), "৳1,450");
        assert_eq!(format_currency(0.0), "৳0");
        assert_eq!(format_currency(1234567.891), "৳1,234,567.89");
        assert_eq!(format_currency(-1200.0), "-৳1,200");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0, ','), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1, ','), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3, ' '), "1 234.567");
        assert_eq!(format_number_with_decimals(-1234.0, 0, ','), "-1,234");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(13), "13");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(9_876_543), "9,876,543");
    }
}
