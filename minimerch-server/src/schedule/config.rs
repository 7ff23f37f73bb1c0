//! Booking configuration for the service desk.

use chrono::{Days, NaiveDate, Weekday};

use super::eligibility::is_eligible_date;
use super::slots::{OperatingHours, TimeSlot};

/// Configuration parameters for appointment booking.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Opening hours Monday to Saturday.
    pub weekday_hours: OperatingHours,

    /// Opening hours on Sunday.
    /// Sunday dates are never bookable, but the slot list is still defined.
    pub sunday_hours: OperatingHours,

    /// Minimum number of days between today and a bookable date.
    pub min_advance_days: u64,
}

impl ScheduleConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        weekday_hours: OperatingHours,
        sunday_hours: OperatingHours,
        min_advance_days: u64,
    ) -> Self {
        Self {
            weekday_hours,
            sunday_hours,
            min_advance_days,
        }
    }

    /// Returns the opening hours for a weekday.
    pub fn hours_for(&self, weekday: Weekday) -> OperatingHours {
        match weekday {
            Weekday::Sun => self.sunday_hours,
            _ => self.weekday_hours,
        }
    }

    /// Generate the bookable slots for a weekday, in ascending order.
    pub fn generate_slots(&self, weekday: Weekday) -> Vec<TimeSlot> {
        self.hours_for(weekday).slots()
    }

    /// Returns the earliest date that may be booked when today is `today`.
    ///
    /// Saturates at the latest representable date.
    pub fn earliest_booking_date(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(self.min_advance_days))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Returns true if `date` is eligible and far enough ahead of `today`.
    pub fn is_bookable(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= self.earliest_booking_date(today) && is_eligible_date(date)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            weekday_hours: OperatingHours::new(8, 20),
            sunday_hours: OperatingHours::new(8, 12),
            min_advance_days: 1, // tomorrow or later
        }
    }
}
