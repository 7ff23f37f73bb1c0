//! Validation for the registration and appointment forms.
//!
//! Forms arrive as raw strings. Validation turns them into typed values,
//! or reports every invalid field with a message for the customer.

mod appointment;
mod error;
mod registration;

pub use appointment::{Appointment, AppointmentForm, ServiceType};
pub use error::{FieldError, FormErrors};
pub use registration::{Registration, RegistrationForm};
