//! Application state for the web layer.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::schedule::ScheduleConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Booking configuration
    pub config: Arc<ScheduleConfig>,

    /// Date to use as "today" instead of the local clock
    fixed_today: Option<NaiveDate>,
}

impl AppState {
    /// Create a new app state that reads today's date from the local clock.
    pub fn new(config: ScheduleConfig) -> Self {
        Self {
            config: Arc::new(config),
            fixed_today: None,
        }
    }

    /// Pin "today" to a fixed date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    /// Returns today's date.
    pub fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| Local::now().date_naive())
    }
}
