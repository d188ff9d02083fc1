//! Display formatting helpers.
//!
//! Values are rounded here, at display time, never by the valuation engine.

/// Format a money amount without digit grouping, e.g. `₹1234.50`.
///
/// The sign goes before the symbol (`-₹12.00`). Values that round to zero
/// never show a sign.
pub fn format_currency(value: f64, symbol: &str, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{symbol}{value}");
    }

    let magnitude = format!("{:.*}", decimals, value.abs());
    if value < 0.0 && !rounds_to_zero(&magnitude) {
        format!("-{symbol}{magnitude}")
    } else {
        format!("{symbol}{magnitude}")
    }
}

/// Format a whole-number percent, e.g. `12.00%`.
pub fn format_percent(percent: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, percent);
    if rounds_to_zero(&formatted) {
        format!("{:.*}%", decimals, 0.0)
    } else {
        format!("{formatted}%")
    }
}

fn rounds_to_zero(formatted: &str) -> bool {
    formatted.chars().all(|c| matches!(c, '0' | '.' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(155.4113107028208, "₹155.41" ; "positive")]
    #[test_case(6.0, "₹6.00" ; "whole")]
    #[test_case(-30.0, "-₹30.00" ; "negative")]
    #[test_case(-0.001, "₹0.00" ; "negative rounding to zero")]
    #[test_case(66.666_666_666_666_67, "₹66.67" ; "repeating decimal")]
    fn test_format_currency(value: f64, expected: &str) {
        assert_eq!(format_currency(value, "₹", 2), expected);
    }

    #[test]
    fn test_format_currency_symbol_and_decimals() {
        assert_eq!(format_currency(1234.4, "$", 0), "$1234");
        assert_eq!(format_currency(0.125, "€", 3), "€0.125");
        assert_eq!(format_currency(f64::INFINITY, "₹", 2), "₹inf");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.0, 2), "12.00%");
        assert_eq!(format_percent(7.255, 1), "7.3%");
        assert_eq!(format_percent(-0.0001, 2), "0.00%");
    }
}
