//! Scheduling error types.

/// Errors from scheduling calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// The year/month pair does not name a representable month
    #[error("invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
}
