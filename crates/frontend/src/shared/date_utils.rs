/// Date display helpers
///
/// Table data carries ISO dates (`YYYY-MM-DD`); the views show them in a
/// friendlier form.
use chrono::NaiveDate;

/// Format an ISO date as "Jan 15, 2024". Unparseable input is shown
/// unchanged.
pub fn format_friendly_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates() {
        assert_eq!(format_friendly_date("2024-01-15"), "Jan 15, 2024");
        assert_eq!(format_friendly_date("2024-12-01"), "Dec 1, 2024");
    }

    #[test]
    fn passes_through_invalid_input() {
        assert_eq!(format_friendly_date("tomorrow"), "tomorrow");
        assert_eq!(format_friendly_date(""), "");
    }
}
