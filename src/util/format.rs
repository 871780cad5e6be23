/// Formats an amount as Indian rupees, e.g. `₹ 1,234.56`.
pub fn format_rupees(value: f64) -> String {
    format!("₹ {}", format_number(value))
}

/// Two decimals with comma thousands separators.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // `-0.00` reads oddly in a total.
    if value < 0.0 && fixed != "0.00" {
        format!("-{grouped}.{fraction}")
    } else {
        format!("{grouped}.{fraction}")
    }
}

/// Quantities like kol that don't need grouping.
pub fn format_quantity(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_rupees(1234.56), "₹ 1,234.56");
        assert_eq!(format_rupees(3504.0), "₹ 3,504.00");
        assert_eq!(format_rupees(1_234_567.891), "₹ 1,234,567.89");
        assert_eq!(format_rupees(999.999), "₹ 1,000.00");
    }

    #[test]
    fn small_and_zero_amounts() {
        assert_eq!(format_rupees(0.0), "₹ 0.00");
        assert_eq!(format_rupees(12.5), "₹ 12.50");
        assert_eq!(format_number(100.0), "100.00");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_number(-1500.0), "-1,500.00");
        assert_eq!(format_number(-0.001), "0.00");
    }

    #[test]
    fn kol_quantities() {
        assert_eq!(format_quantity(9.75), "9.75");
        assert_eq!(format_quantity(10.0), "10.00");
    }
}
