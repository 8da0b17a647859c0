//! Reservation week calendar anchored to Memorial Day.
//!
//! Each year's reservation calendar starts with week zero, the Sunday to
//! Saturday week before Memorial Day, followed by thirteen more weeks. A
//! date is identified by its `(week, weekday)` position, which lets a
//! booking be projected onto the equivalent date of another year.
//!
//! ```
//! use chrono::NaiveDate;
//! use fvrc::ReservationCalendar;
//!
//! let mut cal = ReservationCalendar::with_range(2024, 2025).unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 5, 26).unwrap();
//! assert_eq!(cal.fvrc(date).unwrap(), (1, 0));
//! assert_eq!(
//!     cal.reservation_start_date(date, 2025).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 5, 25).unwrap()
//! );
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod reservation;

pub use calendar::{
    day_name, generate_table, memorial_day, sunday_weekday, week_zero_start, CalendarEntry,
    WEEKS_PER_YEAR,
};
pub use config::CalendarConfig;
pub use error::{CalendarError, Result};
pub use reservation::{FvrcPosition, ReservationCalendar};
