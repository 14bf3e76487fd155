//! Display formatting helpers

use chrono::{DateTime, Utc};

/// Format a listing price with thousands separators ("250000" -> "250,000").
/// The currency symbol is added at the render site.
pub fn format_price(value: u64) -> String {
    group_digits(value)
}

/// Format a view count with thousands separators
pub fn format_views(value: u64) -> String {
    group_digits(value)
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::new();

    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result.chars().rev().collect()
}

/// Format a listing timestamp as "DD Month, YYYY" ("05 August, 2026")
pub fn format_listed_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d %B, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_groups_thousands() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(1500), "1,500");
        assert_eq!(format_price(250_000), "250,000");
        assert_eq!(format_price(12_345_678), "12,345,678");
    }

    #[test]
    fn views_group_like_prices() {
        assert_eq!(format_views(7), "7");
        assert_eq!(format_views(1000), "1,000");
    }

    #[test]
    fn listed_date_uses_full_month_names() {
        let ts: DateTime<Utc> = "2026-08-05T10:30:00Z".parse().unwrap();
        assert_eq!(format_listed_date(&ts), "05 August, 2026");

        let ts: DateTime<Utc> = "2024-12-31T23:59:59Z".parse().unwrap();
        assert_eq!(format_listed_date(&ts), "31 December, 2024");
    }
}
