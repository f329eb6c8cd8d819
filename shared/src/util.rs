//! Time and formatting helpers

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format a price in minor currency units as a display string
///
/// # Examples
///
/// ```
/// use shared::util::format_price;
///
/// assert_eq!(format_price(20000), "Rp20.000");
/// assert_eq!(format_price(500), "Rp500");
/// ```
pub fn format_price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-Rp{}", grouped)
    } else {
        format!("Rp{}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "Rp0");
        assert_eq!(format_price(500), "Rp500");
        assert_eq!(format_price(20000), "Rp20.000");
        assert_eq!(format_price(1250000), "Rp1.250.000");
        assert_eq!(format_price(-15000), "-Rp15.000");
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2024-01-01 UTC as a lower bound
        assert!(now_millis() > 1_704_067_200_000);
    }
}
