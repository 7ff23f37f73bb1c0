//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::forms::{AppointmentForm, FieldError, RegistrationForm};
use crate::schedule::{CalendarDay, MonthView, TimeSlot};

/// Query for CPF validation.
#[derive(Debug, Deserialize)]
pub struct CpfQuery {
    /// CPF as typed, with or without punctuation
    pub cpf: String,
}

/// Result of CPF validation.
#[derive(Debug, Serialize)]
pub struct CpfValidationResponse {
    /// The input, unchanged
    pub cpf: String,

    /// Whether the CPF is valid
    pub valid: bool,

    /// Canonical `000.000.000-00` form, for valid CPFs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

/// Query for the slots of one date.
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    /// Date in YYYY-MM-DD format
    pub date: String,
}

/// Bookable slots for a date.
#[derive(Debug, Serialize)]
pub struct SlotsResponse {
    /// The requested date, YYYY-MM-DD
    pub date: String,

    /// Whether the date can be booked (not Sunday, far enough ahead)
    pub eligible: bool,

    /// Earliest bookable date, YYYY-MM-DD
    pub earliest_date: String,

    /// Slots in ascending order, empty when not eligible
    pub slots: Vec<String>,
}

impl SlotsResponse {
    /// Format slots as `H:MM` strings.
    pub fn slot_labels(slots: &[TimeSlot]) -> Vec<String> {
        slots.iter().map(ToString::to_string).collect()
    }
}

/// Query for a month view. Missing fields default to the current month.
#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// One day of the booking calendar.
#[derive(Debug, Serialize)]
pub struct CalendarDayResult {
    /// Day of month
    pub day: u32,

    /// Date as YYYY-MM-DD
    pub iso_date: String,

    /// One of past, today, unavailable, available
    pub status: String,
}

impl From<&CalendarDay> for CalendarDayResult {
    fn from(day: &CalendarDay) -> Self {
        Self {
            day: day.day,
            iso_date: day.iso_date.clone(),
            status: day.status.as_str().to_owned(),
        }
    }
}

/// A month of the booking calendar.
#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,

    /// Display name of the month
    pub month_name: String,

    /// Weekday of the 1st, 0 = Sunday
    pub first_weekday: u8,

    /// Every day of the month, in order
    pub days: Vec<CalendarDayResult>,
}

impl From<&MonthView> for CalendarResponse {
    fn from(view: &MonthView) -> Self {
        Self {
            year: view.year,
            month: view.month,
            month_name: view.month_name().to_owned(),
            first_weekday: view.first_weekday,
            days: view.days.iter().map(CalendarDayResult::from).collect(),
        }
    }
}

/// Registration form submission.
#[derive(Debug, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub cpf: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl From<RegistrationRequest> for RegistrationForm {
    fn from(req: RegistrationRequest) -> Self {
        Self {
            name: req.name,
            cpf: req.cpf,
            email: req.email,
            phone: req.phone,
            address: req.address,
        }
    }
}

/// Appointment form submission.
#[derive(Debug, Deserialize)]
pub struct AppointmentRequest {
    /// Date in YYYY-MM-DD format
    pub date: String,

    /// Slot in H:MM format
    pub time: String,

    /// `pickup` or `delivery`
    pub service_type: String,

    #[serde(default)]
    pub delivery_address: Option<String>,

    #[serde(default)]
    pub use_registration_address: bool,

    #[serde(default)]
    pub registration_address: Option<String>,
}

impl From<AppointmentRequest> for AppointmentForm {
    fn from(req: AppointmentRequest) -> Self {
        Self {
            date: req.date,
            time: req.time,
            service_type: req.service_type,
            delivery_address: req.delivery_address,
            use_registration_address: req.use_registration_address,
            registration_address: req.registration_address,
        }
    }
}

/// Successful form submission.
#[derive(Debug, Serialize)]
pub struct ConfirmationResponse {
    /// Title for the notification
    pub title: String,

    /// Message for the customer
    pub message: String,
}

/// An invalid form field.
#[derive(Debug, Serialize)]
pub struct FieldErrorResult {
    pub field: String,
    pub message: String,
}

impl From<&FieldError> for FieldErrorResult {
    fn from(e: &FieldError) -> Self {
        Self {
            field: e.field.to_owned(),
            message: e.message.clone(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Invalid fields, for form submissions
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldErrorResult>,
}
