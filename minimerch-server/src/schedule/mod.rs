//! Appointment scheduling.
//!
//! Pure calculations behind the booking form: which dates may be booked,
//! which half-hour slots a day offers, and how each day of a month is
//! shown on the booking calendar. Nothing here reads the clock; callers
//! pass "today" explicitly.

mod calendar;
mod config;
mod eligibility;
mod error;
mod slots;

use chrono::Weekday;

pub use calendar::{CalendarDay, DayStatus, MonthView, classify_month, month_name};
pub use config::ScheduleConfig;
pub use eligibility::is_eligible_date;
pub use error::ScheduleError;
pub use slots::{InvalidTimeSlot, OperatingHours, TimeSlot, weekday_from_index, weekday_index};

/// Generate the bookable slots for a weekday using the default opening hours.
///
/// Monday to Saturday run 8:00-19:30; Sunday runs 8:00-11:30.
///
/// ```
/// use chrono::Weekday;
/// use minimerch_server::schedule::generate_slots;
///
/// let slots = generate_slots(Weekday::Mon);
/// assert_eq!(slots.len(), 24);
/// assert_eq!(slots[0].to_string(), "8:00");
/// assert_eq!(slots[23].to_string(), "19:30");
/// ```
pub fn generate_slots(weekday: Weekday) -> Vec<TimeSlot> {
    ScheduleConfig::default().generate_slots(weekday)
}
