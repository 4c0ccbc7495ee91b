//! Presentation formatting for rupee amounts. Aggregation outputs plain
//! numbers; the `"₨ "` prefix and thousands grouping are applied here only.

/// Formats an amount as whole rupees with thousands grouping, e.g.
/// `₨ 12,000`. Negative amounts keep their sign after the prefix.
pub fn format_rupees(amount: f64) -> String {
    format!("₨ {}", group_thousands(amount))
}

fn group_thousands(value: f64) -> String {
    let mut body = format!("{:.0}", value);
    if body == "-0" {
        body = "0".into();
    }
    let (sign, digits) = match body.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", body.as_str()),
    };
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
    }
    format!("{}{}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_rupees(12000.0), "₨ 12,000");
        assert_eq!(format_rupees(1234567.0), "₨ 1,234,567");
    }

    #[test]
    fn small_amounts_are_untouched() {
        assert_eq!(format_rupees(0.0), "₨ 0");
        assert_eq!(format_rupees(950.0), "₨ 950");
    }

    #[test]
    fn negative_amounts_keep_the_sign() {
        assert_eq!(format_rupees(-9500.0), "₨ -9,500");
    }

    #[test]
    fn fractions_round_to_whole_rupees() {
        assert_eq!(format_rupees(999.6), "₨ 1,000");
    }
}
