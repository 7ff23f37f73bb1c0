//! Service appointment booking form.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::error::FormErrors;
use super::registration::non_blank;
use crate::schedule::{ScheduleConfig, TimeSlot, is_eligible_date};

/// How the customer receives their order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    /// Customer collects at the store
    Pickup,
    /// Store delivers to an address
    Delivery,
}

impl ServiceType {
    /// Parse from the form value, `pickup` or `delivery`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pickup" => Some(ServiceType::Pickup),
            "delivery" => Some(ServiceType::Delivery),
            _ => None,
        }
    }

    /// Returns the form value for this service type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Pickup => "pickup",
            ServiceType::Delivery => "delivery",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw booking input as submitted by the customer.
#[derive(Debug, Clone, Default)]
pub struct AppointmentForm {
    /// Requested date, `YYYY-MM-DD`
    pub date: String,

    /// Requested slot, `H:MM`
    pub time: String,

    /// `pickup` or `delivery`
    pub service_type: String,

    /// Address typed into the delivery field
    pub delivery_address: Option<String>,

    /// Whether to reuse the address given at registration
    pub use_registration_address: bool,

    /// Address given at registration, if known
    pub registration_address: Option<String>,
}

/// A booking whose date, slot and service details have been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub date: NaiveDate,
    pub slot: TimeSlot,
    pub service_type: ServiceType,

    /// Present exactly when `service_type` is `Delivery`
    pub delivery_address: Option<String>,
}

impl Appointment {
    /// Message shown once the booking is confirmed.
    pub fn confirmation_message(&self) -> String {
        format!(
            "Your appointment for {} is confirmed for {:02}/{:02}/{} at {}h.",
            self.service_type,
            self.date.day(),
            self.date.month(),
            self.date.year(),
            self.slot
        )
    }
}

impl AppointmentForm {
    /// Validate the booking against `config` as of `today`.
    ///
    /// The date must be eligible and at least `min_advance_days` ahead,
    /// and the time must be one of the slots generated for that date.
    pub fn validate(
        &self,
        config: &ScheduleConfig,
        today: NaiveDate,
    ) -> Result<Appointment, FormErrors> {
        let mut errors = FormErrors::new();

        let service_type = ServiceType::parse(&self.service_type);
        if service_type.is_none() {
            errors.push("service_type", "Please choose pickup or delivery.");
        }

        let date = match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(e) => {
                debug!(error = %e, date = %self.date, "rejected appointment date");
                errors.push("date", "Please choose a valid date.");
                None
            }
        };

        let slots = date.and_then(|date| {
            let earliest = config.earliest_booking_date(today);
            if date < earliest {
                errors.push(
                    "date",
                    format!(
                        "Appointments must be booked from {} onwards.",
                        earliest.format("%d/%m/%Y")
                    ),
                );
                None
            } else if !is_eligible_date(date) {
                errors.push(
                    "date",
                    "We do not book appointments on Sundays. Please choose another date.",
                );
                None
            } else {
                Some(config.generate_slots(date.weekday()))
            }
        });

        let slot = match TimeSlot::parse(self.time.trim()) {
            Ok(slot) if slots.as_ref().is_none_or(|s| s.contains(&slot)) => Some(slot),
            Ok(slot) => {
                debug!(%slot, "requested slot outside opening hours");
                errors.push("time", "Please choose an available time.");
                None
            }
            Err(e) => {
                debug!(error = %e, "rejected appointment time");
                errors.push("time", "Please choose an available time.");
                None
            }
        };

        let delivery_address = if self.use_registration_address {
            non_blank(self.registration_address.as_deref())
        } else {
            non_blank(self.delivery_address.as_deref())
        };
        if service_type == Some(ServiceType::Delivery) && delivery_address.is_none() {
            errors.push("delivery_address", "Please enter the delivery address.");
        }

        match (date, slot, service_type) {
            (Some(date), Some(slot), Some(service_type)) if errors.is_empty() => Ok(Appointment {
                date,
                slot,
                service_type,
                delivery_address: match service_type {
                    ServiceType::Delivery => delivery_address.map(str::to_owned),
                    ServiceType::Pickup => None,
                },
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Monday
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn pickup(date: &str, time: &str) -> AppointmentForm {
        AppointmentForm {
            date: date.into(),
            time: time.into(),
            service_type: "pickup".into(),
            ..Default::default()
        }
    }

    fn validate(form: &AppointmentForm) -> Result<Appointment, FormErrors> {
        form.validate(&ScheduleConfig::default(), today())
    }

    fn message<'a>(errors: &'a FormErrors, field: &str) -> Option<&'a str> {
        errors.get(field).map(|e| e.message.as_str())
    }

    #[test]
    fn valid_pickup() {
        let appt = validate(&pickup("2025-03-11", "9:30")).unwrap();

        assert_eq!(appt.date, NaiveDate::from_ymd_opt(2025, 3, 11).unwrap());
        assert_eq!(appt.slot, TimeSlot::new(9, 30).unwrap());
        assert_eq!(appt.service_type, ServiceType::Pickup);
        assert!(appt.delivery_address.is_none());
    }

    #[test]
    fn confirmation_message() {
        let appt = validate(&pickup("2025-03-15", "19:30")).unwrap();
        assert_eq!(
            appt.confirmation_message(),
            "Your appointment for pickup is confirmed for 15/03/2025 at 19:30h."
        );
    }

    #[test]
    fn reject_sunday() {
        let errors = validate(&pickup("2025-03-16", "9:00")).unwrap_err();
        assert_eq!(
            message(&errors, "date"),
            Some("We do not book appointments on Sundays. Please choose another date.")
        );
    }

    #[test]
    fn reject_today_and_past() {
        let errors = validate(&pickup("2025-03-10", "9:00")).unwrap_err();
        assert_eq!(
            message(&errors, "date"),
            Some("Appointments must be booked from 11/03/2025 onwards.")
        );

        assert!(validate(&pickup("2024-12-01", "9:00")).is_err());
    }

    #[test]
    fn reject_malformed_date() {
        let errors = validate(&pickup("11/03/2025", "9:00")).unwrap_err();
        assert_eq!(message(&errors, "date"), Some("Please choose a valid date."));

        assert!(validate(&pickup("2025-02-30", "9:00")).is_err());
    }

    #[test]
    fn reject_time_outside_hours() {
        for time in ["7:30", "20:00", "9:15", "nine"] {
            let errors = validate(&pickup("2025-03-11", time)).unwrap_err();
            assert_eq!(
                message(&errors, "time"),
                Some("Please choose an available time."),
                "{time}"
            );
        }
    }

    #[test]
    fn boundary_slots_accepted() {
        assert!(validate(&pickup("2025-03-11", "8:00")).is_ok());
        assert!(validate(&pickup("2025-03-11", "08:00")).is_ok());
        assert!(validate(&pickup("2025-03-11", "19:30")).is_ok());
    }

    #[test]
    fn reject_unknown_service_type() {
        let mut form = pickup("2025-03-11", "9:00");
        form.service_type = "teleport".into();

        let errors = validate(&form).unwrap_err();
        assert!(errors.get("service_type").is_some());
    }

    #[test]
    fn service_type_parse() {
        assert_eq!(ServiceType::parse("pickup"), Some(ServiceType::Pickup));
        assert_eq!(ServiceType::parse(" Delivery "), Some(ServiceType::Delivery));
        assert_eq!(ServiceType::parse(""), None);
        assert_eq!(ServiceType::Delivery.to_string(), "delivery");
    }

    #[test]
    fn delivery_requires_address() {
        let mut form = pickup("2025-03-11", "9:00");
        form.service_type = "delivery".into();

        let errors = validate(&form).unwrap_err();
        assert_eq!(
            message(&errors, "delivery_address"),
            Some("Please enter the delivery address.")
        );

        form.delivery_address = Some("Rua A, 1".into());
        let appt = validate(&form).unwrap();
        assert_eq!(appt.delivery_address.as_deref(), Some("Rua A, 1"));
    }

    #[test]
    fn delivery_uses_registration_address() {
        let mut form = pickup("2025-03-11", "9:00");
        form.service_type = "delivery".into();
        form.delivery_address = Some("ignored".into());
        form.use_registration_address = true;
        form.registration_address = Some("Rua das Flores, 100".into());

        let appt = validate(&form).unwrap();
        assert_eq!(appt.delivery_address.as_deref(), Some("Rua das Flores, 100"));

        form.registration_address = None;
        assert!(validate(&form).is_err());
    }

    #[test]
    fn pickup_drops_address() {
        let mut form = pickup("2025-03-11", "9:00");
        form.delivery_address = Some("Rua A, 1".into());

        assert!(validate(&form).unwrap().delivery_address.is_none());
    }

    #[test]
    fn custom_hours_apply() {
        let config = ScheduleConfig {
            weekday_hours: crate::schedule::OperatingHours::new(10, 12),
            ..Default::default()
        };
        let form = pickup("2025-03-11", "9:00");
        assert!(form.validate(&config, today()).is_err());

        let form = pickup("2025-03-11", "11:30");
        assert!(form.validate(&config, today()).is_ok());
    }

    #[test]
    fn reports_every_invalid_field() {
        let errors = validate(&AppointmentForm::default()).unwrap_err();
        let fields: Vec<_> = errors.fields().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["service_type", "date", "time"]);
    }
}
