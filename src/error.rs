//! Error types for the reservation calendar.

use chrono::NaiveDate;

/// Error type for all fallible calendar operations.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a date falls before week zero of its own year.
    #[error("{date} is before week zero of its reservation year (starts {week_zero})")]
    OutOfRangeDate {
        /// The queried date.
        date: NaiveDate,
        /// Sunday starting week zero of `date`'s year.
        week_zero: NaiveDate,
    },

    /// Returned when a projection targets a week the table does not hold.
    #[error("no calendar entry for year {year}, week {week}")]
    MissingCalendarEntry {
        /// Target year.
        year: i32,
        /// Target week number.
        week: u32,
    },

    /// Returned when the year cannot be represented as a calendar date.
    #[error("year {year} is out of the supported date range")]
    InvalidYear {
        /// The unrepresentable year.
        year: i32,
    },

    /// Returned when the JSON configuration override cannot be parsed.
    #[error("invalid calendar configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_out_of_range_date() {
        let e = CalendarError::OutOfRangeDate {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            week_zero: NaiveDate::from_ymd_opt(2024, 5, 19).unwrap(),
        };
        assert_eq!(
            e.to_string(),
            "2024-01-01 is before week zero of its reservation year (starts 2024-05-19)"
        );
    }

    #[test]
    fn error_missing_calendar_entry() {
        let e = CalendarError::MissingCalendarEntry { year: 2025, week: 14 };
        assert_eq!(e.to_string(), "no calendar entry for year 2025, week 14");
    }

    #[test]
    fn error_invalid_year() {
        let e = CalendarError::InvalidYear { year: 400_000 };
        assert_eq!(e.to_string(), "year 400000 is out of the supported date range");
    }

    #[test]
    fn error_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let e: CalendarError = json_err.into();
        assert!(matches!(e, CalendarError::Config(_)));
        assert!(e.to_string().starts_with("invalid calendar configuration: "));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
