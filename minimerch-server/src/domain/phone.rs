//! Brazilian phone number type.

use std::fmt;

/// Error returned when parsing an invalid phone number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid phone number: {reason}")]
pub struct InvalidPhone {
    reason: &'static str,
}

/// A phone number with area code: 10 digits (landline) or 11 (mobile).
///
/// Mask punctuation such as `(11) 98765-4321` is ignored when parsing.
///
/// # Examples
///
/// ```
/// use minimerch_server::domain::Phone;
///
/// let phone = Phone::parse("(11) 98765-4321").unwrap();
/// assert_eq!(phone.area_code(), "11");
/// assert_eq!(phone.to_string(), "(11) 98765-4321");
///
/// assert!(Phone::parse("98765-4321").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Parse a phone number, ignoring every non-digit character.
    pub fn parse(s: &str) -> Result<Self, InvalidPhone> {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();

        if digits.len() != 10 && digits.len() != 11 {
            return Err(InvalidPhone {
                reason: "must have 10 or 11 digits including area code",
            });
        }

        Ok(Phone(digits))
    }

    /// Returns the two-digit area code.
    pub fn area_code(&self) -> &str {
        &self.0[..2]
    }

    /// Returns the subscriber number without the area code.
    pub fn number(&self) -> &str {
        &self.0[2..]
    }

    /// Returns true for 11-digit (mobile) numbers.
    pub fn is_mobile(&self) -> bool {
        self.0.len() == 11
    }
}

impl fmt::Debug for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone({})", self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = self.number();
        let split = number.len() - 4;
        write!(
            f,
            "({}) {}-{}",
            self.area_code(),
            &number[..split],
            &number[split..]
        )
    }
}
