//! Business-day eligibility for appointments.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns true unless `date` falls on a Sunday.
///
/// Advance notice is not checked here; see
/// [`ScheduleConfig::is_bookable`](super::ScheduleConfig::is_bookable).
///
/// ```
/// use chrono::NaiveDate;
/// use minimerch_server::schedule::is_eligible_date;
///
/// let saturday = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
/// assert!(is_eligible_date(saturday));
/// assert!(!is_eligible_date(sunday));
/// ```
pub fn is_eligible_date(date: NaiveDate) -> bool {
    date.weekday() != Weekday::Sun
}
