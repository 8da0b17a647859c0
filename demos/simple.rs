use fvrc::ReservationCalendar;
fn main() {
    let cal = ReservationCalendar::with_range(2024, 2026).unwrap();
    for year in cal.years() {
        println!("{} {:?}", year, cal.entries(year).unwrap()[0]);
    }
}
