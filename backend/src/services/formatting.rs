//! Display formatting shared by chart and map labels.

/// Format a value with zero decimals and comma thousands separators,
/// e.g. `1234567.6` becomes `"1,234,568"`.
pub fn format_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value.is_sign_negative() && digits != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(150.0), "150");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(999_999.4), "999,999");
        assert_eq!(format_thousands(1_234_567.6), "1,234,568");
        assert_eq!(format_thousands(-12_345.0), "-12,345");
        assert_eq!(format_thousands(-0.2), "0");
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(33.333), 33.3);
        assert_eq!(round1(66.666), 66.7);
        assert_eq!(round1(0.0), 0.0);
    }
}
