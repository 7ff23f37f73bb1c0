//! Customer registration form.

use tracing::debug;

use super::error::FormErrors;
use crate::domain::{Cpf, Email, Phone};

/// Raw registration input as typed by the customer.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// A registration whose fields have all been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub cpf: Cpf,
    pub email: Email,
    pub phone: Option<Phone>,
    pub address: Option<String>,
}

impl Registration {
    /// Message shown once the registration is accepted.
    pub fn confirmation_message(&self) -> String {
        format!("{}, your registration was completed successfully!", self.name)
    }
}

impl RegistrationForm {
    /// Validate every field, reporting all invalid ones together.
    ///
    /// Blank optional fields are treated as absent.
    pub fn validate(&self) -> Result<Registration, FormErrors> {
        let mut errors = FormErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("name", "Please enter your name.");
        }

        let cpf = Cpf::parse(&self.cpf)
            .inspect_err(|e| debug!(error = %e, "rejected CPF"))
            .ok();
        if cpf.is_none() {
            errors.push("cpf", "Invalid CPF. Please enter a valid CPF.");
        }

        let email = Email::parse(self.email.trim())
            .inspect_err(|e| debug!(error = %e, "rejected e-mail"))
            .ok();
        if email.is_none() {
            errors.push("email", "Invalid e-mail. Please enter a valid e-mail.");
        }

        let phone = match non_blank(self.phone.as_deref()) {
            Some(raw) => match Phone::parse(raw) {
                Ok(phone) => Some(phone),
                Err(_) => {
                    errors.push(
                        "phone",
                        "Invalid phone number. Use the format (00) 00000-0000.",
                    );
                    None
                }
            },
            None => None,
        };

        match (cpf, email) {
            (Some(cpf), Some(email)) if errors.is_empty() => Ok(Registration {
                name: name.to_owned(),
                cpf,
                email,
                phone,
                address: non_blank(self.address.as_deref()).map(str::to_owned),
            }),
            _ => Err(errors),
        }
    }
}

/// Returns the trimmed value, or `None` if it is missing or blank.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
