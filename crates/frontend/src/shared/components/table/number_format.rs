//! Number formatting for table cells

/// Group the integer part in thousands with `,`.
fn group_thousands(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}

/// Fees are mostly whole dinars; fractions keep two decimals.
///
/// `2500.0 -> "2,500"`, `1234.5 -> "1,234.50"`
pub fn format_amount(value: f64) -> String {
    let formatted = if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    };

    match formatted.split_once('.') {
        Some((integer, fraction)) => format!("{}.{}", group_thousands(integer), fraction),
        None => group_thousands(&formatted),
    }
}

/// Whole counts (items, days pending); missing renders as "-"
pub fn format_count(value: Option<i64>) -> String {
    value
        .map(|count| group_thousands(&count.to_string()))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(2500.0), "2,500");
        assert_eq!(format_amount(1234567.0), "1,234,567");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(-1500.0), "-1,500");
        assert_eq!(format_amount(999.0), "999");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(12)), "12");
        assert_eq!(format_count(Some(12000)), "12,000");
        assert_eq!(format_count(None), "-");
    }
}
