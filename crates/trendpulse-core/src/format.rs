//! Display formatting for counts and percentages.

/// K/M-suffixed interest formatting: 1,000 and 1,000,000 thresholds,
/// one decimal place. Below 1,000 the plain integer is shown.
pub fn format_interest(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Signed change percent: "+12%" / "-3%" / "+0%".
pub fn format_change(change: i32) -> String {
    if change >= 0 {
        format!("+{}%", change)
    } else {
        format!("{}%", change)
    }
}

/// Plain integer with comma thousands grouping, for the stats row where
/// exact counts matter more than brevity.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interest_thresholds() {
        assert_eq!(format_interest(0), "0");
        assert_eq!(format_interest(999), "999");
        assert_eq!(format_interest(1_000), "1.0K");
        assert_eq!(format_interest(1_500), "1.5K");
        assert_eq!(format_interest(999_999), "1000.0K");
        assert_eq!(format_interest(1_000_000), "1.0M");
        assert_eq!(format_interest(1_500_000), "1.5M");
    }

    #[test]
    fn change_carries_explicit_sign() {
        assert_eq!(format_change(42), "+42%");
        assert_eq!(format_change(0), "+0%");
        assert_eq!(format_change(-7), "-7%");
    }

    #[test]
    fn count_grouping() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
