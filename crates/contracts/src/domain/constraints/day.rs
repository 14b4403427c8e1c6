use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of days covered by the scheduling window.
pub const SCHEDULE_DAYS: usize = 7;

/// One column of the scheduling window.
///
/// `key` is the stable identifier used to index constraint maps; the
/// remaining fields are display labels precomputed for the grid header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlot {
    pub date: NaiveDate,
    /// ISO date (`YYYY-MM-DD`).
    pub key: String,
    /// Abbreviated weekday name ("Mon").
    pub day_name: String,
    pub day_number: u32,
    /// Abbreviated month name ("Jan").
    pub month: String,
}

impl DaySlot {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            key: date.format("%Y-%m-%d").to_string(),
            day_name: date.format("%a").to_string(),
            day_number: date.day(),
            month: date.format("%b").to_string(),
        }
    }
}

/// The next [`SCHEDULE_DAYS`] calendar days starting at `start`.
///
/// Generated once per editor session; the view passes "today", tests pass
/// a fixed date.
pub fn upcoming_week(start: NaiveDate) -> Vec<DaySlot> {
    (0..SCHEDULE_DAYS as i64)
        .map(|offset| DaySlot::from_date(start + Duration::days(offset)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_seven_consecutive_days() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let days = upcoming_week(start);

        assert_eq!(days.len(), SCHEDULE_DAYS);
        assert_eq!(days[0].key, "2024-01-15");
        assert_eq!(days[6].key, "2024-01-21");
        for pair in days.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn slot_labels_match_date() {
        let slot = DaySlot::from_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(slot.day_name, "Mon");
        assert_eq!(slot.day_number, 15);
        assert_eq!(slot.month, "Jan");
    }

    #[test]
    fn window_crosses_month_boundary() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 29).unwrap();
        let days = upcoming_week(start);

        assert_eq!(days[0].month, "Jan");
        assert_eq!(days[3].key, "2024-02-01");
        assert_eq!(days[3].month, "Feb");
        assert_eq!(days[3].day_number, 1);
    }
}
