//! Form validation errors.

/// A single invalid field and the message to show next to it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Name of the form field
    pub field: &'static str,

    /// Message for the customer
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every invalid field found while validating a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} invalid field(s)", .0.len())]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an invalid field.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    /// Returns true if no field was invalid.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the invalid fields in the order they were checked.
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns the error for a field, if it was invalid.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// Consumes the set and returns the field errors.
    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}
