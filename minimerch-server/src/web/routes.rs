//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Datelike, NaiveDate};
use tracing::{info, warn};

use crate::domain::Cpf;
use crate::forms::{AppointmentForm, FormErrors, RegistrationForm};
use crate::schedule::{ScheduleError, classify_month};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/cpf/validate", get(validate_cpf))
        .route("/api/schedule/slots", get(schedule_slots))
        .route("/api/schedule/calendar", get(schedule_calendar))
        .route("/api/registrations", post(register))
        .route("/api/appointments", post(book_appointment))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check a CPF.
async fn validate_cpf(Query(req): Query<CpfQuery>) -> Json<CpfValidationResponse> {
    let parsed = Cpf::parse(&req.cpf).ok();

    Json(CpfValidationResponse {
        valid: parsed.is_some(),
        formatted: parsed.map(|cpf| cpf.to_string()),
        cpf: req.cpf,
    })
}

/// List the bookable slots for a date.
async fn schedule_slots(
    State(state): State<AppState>,
    Query(req): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let date = NaiveDate::parse_from_str(req.date.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest {
            message: format!("Invalid date: {}", req.date),
        }
    })?;

    let today = state.today();
    let eligible = state.config.is_bookable(date, today);
    let slots = if eligible {
        SlotsResponse::slot_labels(&state.config.generate_slots(date.weekday()))
    } else {
        Vec::new()
    };

    Ok(Json(SlotsResponse {
        date: date.format("%Y-%m-%d").to_string(),
        eligible,
        earliest_date: state
            .config
            .earliest_booking_date(today)
            .format("%Y-%m-%d")
            .to_string(),
        slots,
    }))
}

/// Month view for the booking calendar.
async fn schedule_calendar(
    State(state): State<AppState>,
    Query(req): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let today = state.today();
    let year = req.year.unwrap_or_else(|| today.year());
    let month = req.month.unwrap_or_else(|| today.month());

    let view = classify_month(year, month, today)?;
    Ok(Json(CalendarResponse::from(&view)))
}

/// Validate a registration.
async fn register(
    Json(req): Json<RegistrationRequest>,
) -> Result<Json<ConfirmationResponse>, AppError> {
    let registration = RegistrationForm::from(req).validate()?;
    info!(email_domain = registration.email.domain(), "registration accepted");

    Ok(Json(ConfirmationResponse {
        title: "Registration complete".to_owned(),
        message: registration.confirmation_message(),
    }))
}

/// Validate an appointment booking.
async fn book_appointment(
    State(state): State<AppState>,
    Json(req): Json<AppointmentRequest>,
) -> Result<Json<ConfirmationResponse>, AppError> {
    let appointment = AppointmentForm::from(req).validate(&state.config, state.today())?;
    info!(
        date = %appointment.date,
        slot = %appointment.slot,
        service = %appointment.service_type,
        "appointment confirmed"
    );

    Ok(Json(ConfirmationResponse {
        title: "Appointment confirmed".to_owned(),
        message: appointment.confirmation_message(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    InvalidForm(FormErrors),
}

impl From<ScheduleError> for AppError {
    fn from(e: ScheduleError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<FormErrors> for AppError {
    fn from(e: FormErrors) -> Self {
        AppError::InvalidForm(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: message,
                    fields: Vec::new(),
                },
            ),
            AppError::InvalidForm(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error: errors.to_string(),
                    fields: errors.fields().iter().map(FieldErrorResult::from).collect(),
                },
            ),
        };

        warn!(%status, error = %body.error, "request rejected");

        (status, Json(body)).into_response()
    }
}
