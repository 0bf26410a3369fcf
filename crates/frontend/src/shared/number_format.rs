//! Number formatting for Indonesian Rupiah amounts

/// Formats a value with `.` as thousands separator and `,` as decimal separator.
///
/// Up to `max_decimals` fraction digits are kept; trailing zeros are dropped.
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_grouped;
/// assert_eq!(format_grouped(1234567.5, 2), "1.234.567,5");
/// ```
pub fn format_grouped(value: f64, max_decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{:.*}", max_decimals, value.abs());

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, d.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    // Insert a dot every 3 digits from the right
    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let is_zero = integer_part.chars().all(|c| c == '0') && decimal_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{},{}", sign, grouped, decimal_part)
    }
}

/// Formats an amount as Rupiah, e.g. `150000.0` -> `"Rp150.000"`.
///
/// Non-finite values are shown as `Rp0`.
pub fn format_rupiah(value: f64) -> String {
    let body = format_grouped(value, 2);
    match body.strip_prefix('-') {
        Some(abs) => format!("-Rp{}", abs),
        None => format!("Rp{}", body),
    }
}

/// Parses a numeric form field; blank or invalid input counts as 0.
pub fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Displays a quantity without a trailing `.0` for whole numbers.
pub fn format_quantity(value: f64) -> String {
    format_grouped(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(150000.0), "Rp150.000");
        assert_eq!(format_rupiah(0.0), "Rp0");
        assert_eq!(format_rupiah(999.0), "Rp999");
        assert_eq!(format_rupiah(1000.0), "Rp1.000");
        assert_eq!(format_rupiah(1234567.0), "Rp1.234.567");
        assert_eq!(format_rupiah(-2500.0), "-Rp2.500");
    }

    #[test]
    fn test_format_rupiah_fractions() {
        assert_eq!(format_rupiah(1234.5), "Rp1.234,5");
        assert_eq!(format_rupiah(10.256), "Rp10,26");
        assert_eq!(format_rupiah(10.001), "Rp10");
    }

    #[test]
    fn test_format_rupiah_non_finite() {
        assert_eq!(format_rupiah(f64::NAN), "Rp0");
        assert_eq!(format_rupiah(f64::INFINITY), "Rp0");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("3"), 3.0);
        assert_eq!(parse_number(" 2.5 "), 2.5);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
    }

    #[test]
    fn test_row_total_display() {
        let cases = [("2", "50000", "Rp100.000"), ("", "50000", "Rp0"), ("x", "y", "Rp0"), ("1.5", "1000", "Rp1.500")];
        for (q, p, expected) in cases {
            assert_eq!(format_rupiah(parse_number(q) * parse_number(p)), expected);
        }
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(1.5), "1,5");
        assert_eq!(format_quantity(1200.0), "1.200");
    }
}
