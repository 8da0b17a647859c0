use chrono::{Duration, NaiveDate};
use fvrc::{memorial_day, ReservationCalendar};
/// example to show each reservation day of a year and its projection into another year
use std::env::args;
fn main() {
    let args: Vec<String> = args().collect();
    let len = args.len();
    if len < 2 {
        panic!("Usage: {} year [future_year]", args[0]);
    }
    let year: i32 = (&args[1]).parse().unwrap();
    let future_year: i32 = if len > 2 {
        (&args[2]).parse().unwrap()
    } else {
        year + 1
    };
    let mut cal = ReservationCalendar::with_range(year, future_year).unwrap();
    println!("memorial day: {}", memorial_day(year).unwrap());
    let weeks = cal.entries(year).unwrap().to_vec();
    let mut date: NaiveDate = weeks[0].start_date;
    let last_date = weeks[weeks.len() - 1].start_date + Duration::days(6);
    while date <= last_date {
        let (week, weekday) = cal.fvrc(date).unwrap();
        let projected = cal.reservation_start_date(date, future_year).unwrap();
        println!(
            "{} week {:>2} day {} {:<9} -> {}",
            date,
            week,
            weekday,
            cal.fvrc_day_name(date),
            projected
        );
        date = date + Duration::days(1);
    }
}
