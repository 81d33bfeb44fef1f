//! Utilities for date formatting
//!
//! Acquisition dates are stored as ISO `YYYY-MM` or `YYYY-MM-DD`.

use chrono::NaiveDate;

/// Format an ISO month or date as "Mon YYYY".
/// Example: "2023-05" or "2023-05-17" -> "May 2023"
/// Anything else is returned unchanged.
pub fn format_month_year(date_str: &str) -> String {
    let trimmed = date_str.trim();
    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d"));
    match parsed {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_month_year() {
        assert_eq!(format_month_year("2023-05"), "May 2023");
        assert_eq!(format_month_year("2024-01-18"), "Jan 2024");
    }

    #[test]
    fn test_free_text_passes_through() {
        assert_eq!(format_month_year("Spring 2021"), "Spring 2021");
        assert_eq!(format_month_year("2023-13"), "2023-13");
    }
}
