//! Bookable time slots.

use std::fmt;

use chrono::{NaiveTime, Weekday};

/// Error returned when parsing an invalid time slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time slot: {reason}")]
pub struct InvalidTimeSlot {
    reason: &'static str,
}

impl InvalidTimeSlot {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A half-hour-aligned time of day.
///
/// Slots display as `H:MM`: 24-hour clock, no leading zero on the hour,
/// two-digit minute.
///
/// # Examples
///
/// ```
/// use minimerch_server::schedule::TimeSlot;
///
/// let slot = TimeSlot::parse("9:30").unwrap();
/// assert_eq!(slot.to_string(), "9:30");
///
/// // A leading zero is tolerated on input
/// assert_eq!(TimeSlot::parse("09:30").unwrap(), slot);
///
/// // Only :00 and :30 are slots
/// assert!(TimeSlot::parse("9:15").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

impl TimeSlot {
    /// Create a slot from hour (0-23) and minute (0 or 30).
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTimeSlot> {
        if hour > 23 {
            return Err(InvalidTimeSlot::new("hour must be 0-23"));
        }
        if minute != 0 && minute != 30 {
            return Err(InvalidTimeSlot::new("minute must be 00 or 30"));
        }
        Ok(Self { hour, minute })
    }

    /// Parse a slot from `H:MM` or `HH:MM`.
    pub fn parse(s: &str) -> Result<Self, InvalidTimeSlot> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| InvalidTimeSlot::new("expected H:MM format"))?;

        if hour.is_empty() || hour.len() > 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidTimeSlot::new("invalid hour digits"));
        }
        if minute.len() != 2 || !minute.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidTimeSlot::new("invalid minute digits"));
        }

        let hour = hour
            .parse()
            .map_err(|_| InvalidTimeSlot::new("invalid hour digits"))?;
        let minute = minute
            .parse()
            .map_err(|_| InvalidTimeSlot::new("invalid minute digits"))?;

        Self::new(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0 or 30).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Converts to a NaiveTime.
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Debug for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeSlot({})", self)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// Opening hours for one day, as whole hours `[open, close)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingHours {
    /// First bookable hour.
    pub open: u8,

    /// Hour at which booking stops (exclusive).
    pub close: u8,
}

impl OperatingHours {
    /// Create opening hours for `[open, close)`.
    pub const fn new(open: u8, close: u8) -> Self {
        Self { open, close }
    }

    /// Generate every slot in these hours: `h:00` then `h:30` for each hour.
    ///
    /// Hours past 23 are ignored; `open >= close` yields no slots.
    pub fn slots(&self) -> Vec<TimeSlot> {
        let close = self.close.min(24);
        (self.open..close)
            .flat_map(|hour| [TimeSlot { hour, minute: 0 }, TimeSlot { hour, minute: 30 }])
            .collect()
    }
}

/// Returns the weekday as 0-6, with 0 = Sunday.
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// Returns the weekday for 0-6 (0 = Sunday), or `None` if out of range.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_slots() {
        assert!(TimeSlot::new(0, 0).is_ok());
        assert!(TimeSlot::new(8, 30).is_ok());
        assert!(TimeSlot::new(23, 30).is_ok());
    }

    #[test]
    fn new_rejects_bad_components() {
        assert!(TimeSlot::new(24, 0).is_err());
        assert!(TimeSlot::new(8, 15).is_err());
        assert!(TimeSlot::new(8, 60).is_err());
    }

    #[test]
    fn parse_valid() {
        assert_eq!(TimeSlot::parse("8:00").unwrap(), TimeSlot::new(8, 0).unwrap());
        assert_eq!(TimeSlot::parse("08:30").unwrap(), TimeSlot::new(8, 30).unwrap());
        assert_eq!(TimeSlot::parse("19:30").unwrap(), TimeSlot::new(19, 30).unwrap());
    }

    #[test]
    fn parse_invalid() {
        assert!(TimeSlot::parse("").is_err());
        assert!(TimeSlot::parse("800").is_err());
        assert!(TimeSlot::parse(":00").is_err());
        assert!(TimeSlot::parse("8:0").is_err());
        assert!(TimeSlot::parse("8:000").is_err());
        assert!(TimeSlot::parse("108:00").is_err());
        assert!(TimeSlot::parse("+8:00").is_err());
        assert!(TimeSlot::parse("8:45").is_err());
        assert!(TimeSlot::parse("24:00").is_err());
    }

    #[test]
    fn parse_error_message() {
        let err = TimeSlot::parse("8h").unwrap_err();
        assert_eq!(err.to_string(), "invalid time slot: expected H:MM format");
    }

    #[test]
    fn display_has_no_leading_zero() {
        assert_eq!(TimeSlot::new(8, 0).unwrap().to_string(), "8:00");
        assert_eq!(TimeSlot::new(13, 30).unwrap().to_string(), "13:30");
        assert_eq!(format!("{:?}", TimeSlot::new(9, 0).unwrap()), "TimeSlot(9:00)");
    }

    #[test]
    fn ordering() {
        let a = TimeSlot::new(8, 30).unwrap();
        let b = TimeSlot::new(9, 0).unwrap();
        assert!(a < b);
    }

    #[test]
    fn to_naive_time() {
        let slot = TimeSlot::new(14, 30).unwrap();
        assert_eq!(
            slot.to_naive_time(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );
    }

    #[test]
    fn single_hour_window() {
        let slots: Vec<String> = OperatingHours::new(8, 9)
            .slots()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(slots, vec!["8:00", "8:30"]);
    }

    #[test]
    fn empty_and_clamped_windows() {
        assert!(OperatingHours::new(12, 12).slots().is_empty());
        assert!(OperatingHours::new(20, 8).slots().is_empty());
        assert_eq!(OperatingHours::new(22, 30).slots().len(), 4);
    }

    #[test]
    fn weekday_index_roundtrip() {
        for i in 0..7 {
            let weekday = weekday_from_index(i).unwrap();
            assert_eq!(weekday_index(weekday), i);
        }
        assert_eq!(weekday_index(Weekday::Sun), 0);
        assert_eq!(weekday_index(Weekday::Sat), 6);
        assert!(weekday_from_index(7).is_none());
    }
}
