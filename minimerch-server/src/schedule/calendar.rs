//! Month view classification for the booking calendar.
//!
//! The site renders the current month as a grid and lets customers click
//! an available day to pick it. This module produces the data for that
//! grid; rendering is left to the caller.

use chrono::{Datelike, NaiveDate, Weekday};

use super::error::ScheduleError;
use super::slots::weekday_index;

/// Availability of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayStatus {
    /// Before today
    Past,
    /// Today, and not a Sunday
    Today,
    /// A Sunday on or after today
    Unavailable,
    /// A future bookable day
    Available,
}

impl DayStatus {
    /// Returns the lowercase label used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Past => "past",
            DayStatus::Today => "today",
            DayStatus::Unavailable => "unavailable",
            DayStatus::Available => "available",
        }
    }
}

/// One cell of a month view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    /// Day of month, starting at 1.
    pub day: u32,

    /// The date as `YYYY-MM-DD`.
    pub iso_date: String,

    /// Availability of the day.
    pub status: DayStatus,
}

impl CalendarDay {
    /// Classify `date` relative to `today`.
    ///
    /// Checks run in order: past, Sunday, today, otherwise available.
    /// A Sunday that is also today is therefore `Unavailable`.
    pub fn classify(date: NaiveDate, today: NaiveDate) -> Self {
        let status = if date < today {
            DayStatus::Past
        } else if date.weekday() == Weekday::Sun {
            DayStatus::Unavailable
        } else if date == today {
            DayStatus::Today
        } else {
            DayStatus::Available
        };

        Self {
            day: date.day(),
            iso_date: date.format("%Y-%m-%d").to_string(),
            status,
        }
    }
}

/// Every day of one month, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    /// Calendar year.
    pub year: i32,

    /// Month, 1-12.
    pub month: u32,

    /// Weekday of the 1st (0 = Sunday), i.e. the number of blank cells
    /// before it in the first row.
    pub first_weekday: u8,

    /// One entry per day, in order.
    pub days: Vec<CalendarDay>,
}

impl MonthView {
    /// Returns the Portuguese month name as shown on the site.
    pub fn month_name(&self) -> &'static str {
        month_name(self.month).unwrap_or_default()
    }

    /// Returns the cell classified as today, if any.
    pub fn today(&self) -> Option<&CalendarDay> {
        self.days.iter().find(|d| d.status == DayStatus::Today)
    }

    /// Returns the cells a customer may pick.
    pub fn available_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter().filter(|d| d.status == DayStatus::Available)
    }
}

/// Classify every day of `month` in `year` relative to `today`.
///
/// Days are compared to `today` as full dates, so months other than the
/// current one classify correctly: earlier months are entirely past, later
/// months have no past days.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use minimerch_server::schedule::{DayStatus, classify_month};
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let view = classify_month(2025, 3, today).unwrap();
///
/// assert_eq!(view.days.len(), 31);
/// assert_eq!(view.first_weekday, 6); // March 2025 starts on a Saturday
/// assert_eq!(view.days[8].status, DayStatus::Past);
/// assert_eq!(view.days[9].status, DayStatus::Today);
/// assert_eq!(view.days[15].status, DayStatus::Unavailable); // Sunday the 16th
/// assert_eq!(view.days[16].status, DayStatus::Available);
/// assert_eq!(view.days[16].iso_date, "2025-03-17");
///
/// assert!(classify_month(2025, 13, today).is_err());
/// ```
pub fn classify_month(
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Result<MonthView, ScheduleError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(ScheduleError::InvalidMonth { year, month })?;

    let days = first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|d| CalendarDay::classify(d, today))
        .collect();

    Ok(MonthView {
        year,
        month,
        first_weekday: weekday_index(first.weekday()),
        days,
    })
}

/// Returns the Portuguese name for month 1-12.
pub fn month_name(month: u32) -> Option<&'static str> {
    const NAMES: [&str; 12] = [
        "Janeiro",
        "Fevereiro",
        "Março",
        "Abril",
        "Maio",
        "Junho",
        "Julho",
        "Agosto",
        "Setembro",
        "Outubro",
        "Novembro",
        "Dezembro",
    ];

    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    NAMES.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_lengths() {
        let today = date(2024, 1, 1);
        assert_eq!(classify_month(2024, 1, today).unwrap().days.len(), 31);
        assert_eq!(classify_month(2024, 2, today).unwrap().days.len(), 29);
        assert_eq!(classify_month(2025, 2, today).unwrap().days.len(), 28);
        assert_eq!(classify_month(2024, 4, today).unwrap().days.len(), 30);
        assert_eq!(classify_month(2024, 12, today).unwrap().days.len(), 31);
    }

    #[test]
    fn first_weekday() {
        let today = date(2025, 1, 1);
        // June 2025 starts on a Sunday
        assert_eq!(classify_month(2025, 6, today).unwrap().first_weekday, 0);
        // March 2025 starts on a Saturday
        assert_eq!(classify_month(2025, 3, today).unwrap().first_weekday, 6);
        // January 2025 starts on a Wednesday
        assert_eq!(classify_month(2025, 1, today).unwrap().first_weekday, 3);
    }

    #[test]
    fn days_are_numbered_in_order() {
        let view = classify_month(2025, 3, date(2025, 3, 10)).unwrap();
        for (i, day) in view.days.iter().enumerate() {
            assert_eq!(day.day as usize, i + 1);
        }
        assert_eq!(view.days[0].iso_date, "2025-03-01");
        assert_eq!(view.days[30].iso_date, "2025-03-31");
    }

    #[test]
    fn classification_in_current_month() {
        // Monday 2025-03-10
        let view = classify_month(2025, 3, date(2025, 3, 10)).unwrap();

        for day in &view.days[..9] {
            assert_eq!(day.status, DayStatus::Past, "day {}", day.day);
        }
        assert_eq!(view.days[9].status, DayStatus::Today);
        for d in [16, 23, 30] {
            assert_eq!(view.days[d - 1].status, DayStatus::Unavailable);
        }
        assert_eq!(view.days[10].status, DayStatus::Available);
        assert_eq!(view.today().map(|d| d.day), Some(10));
        // 21 days from the 11th on, minus three Sundays
        assert_eq!(view.available_days().count(), 18);
    }

    #[test]
    fn past_sundays_are_past() {
        let view = classify_month(2025, 3, date(2025, 3, 10)).unwrap();
        // Sunday the 2nd and 9th
        assert_eq!(view.days[1].status, DayStatus::Past);
        assert_eq!(view.days[8].status, DayStatus::Past);
    }

    #[test]
    fn sunday_today_is_unavailable() {
        let view = classify_month(2025, 3, date(2025, 3, 16)).unwrap();
        assert_eq!(view.days[15].status, DayStatus::Unavailable);
        assert!(view.today().is_none());
    }

    #[test]
    fn earlier_month_is_entirely_past() {
        let view = classify_month(2025, 2, date(2025, 3, 10)).unwrap();
        assert!(view.days.iter().all(|d| d.status == DayStatus::Past));
    }

    #[test]
    fn later_month_has_no_past_days() {
        let view = classify_month(2025, 4, date(2025, 3, 31)).unwrap();
        assert!(view.days.iter().all(|d| d.status != DayStatus::Past));
        assert!(view.today().is_none());
    }

    #[test]
    fn invalid_month_is_error() {
        let today = date(2025, 3, 10);
        assert_eq!(
            classify_month(2025, 0, today),
            Err(ScheduleError::InvalidMonth {
                year: 2025,
                month: 0
            })
        );
        assert!(classify_month(2025, 13, today).is_err());
        assert!(classify_month(i32::MAX, 1, today).is_err());
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), Some("Janeiro"));
        assert_eq!(month_name(3), Some("Março"));
        assert_eq!(month_name(12), Some("Dezembro"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);

        let view = classify_month(2025, 10, date(2025, 10, 1)).unwrap();
        assert_eq!(view.month_name(), "Outubro");
    }

    #[test]
    fn status_labels() {
        assert_eq!(DayStatus::Past.as_str(), "past");
        assert_eq!(DayStatus::Today.as_str(), "today");
        assert_eq!(DayStatus::Unavailable.as_str(), "unavailable");
        assert_eq!(DayStatus::Available.as_str(), "available");
    }

    #[test]
    fn classification_is_idempotent() {
        let today = date(2025, 3, 10);
        assert_eq!(
            classify_month(2025, 3, today),
            classify_month(2025, 3, today)
        );
    }
}
