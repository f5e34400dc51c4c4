use chrono::{Local, NaiveDate};

/// The current local day; the only clock read in the crate.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Turns day/month text into a date in `year`.
///
/// Returns `None` for non-numeric text, out-of-range values, or a day the
/// month does not have in `year`. Never rolls over into the next month.
pub fn resolve_date_in_year(day: &str, month: &str, year: i32) -> Option<NaiveDate> {
    let day: u32 = day.trim().parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}
