//! E-mail address type.

use std::fmt;

/// Error returned when parsing an invalid e-mail address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid e-mail: {reason}")]
pub struct InvalidEmail {
    reason: &'static str,
}

/// A syntactically plausible e-mail address.
///
/// The check is deliberately shallow: one `@`, no whitespace, a non-empty
/// local part, and a domain with a dot that has text on both sides.
///
/// # Examples
///
/// ```
/// use minimerch_server::domain::Email;
///
/// assert!(Email::parse("ana@example.com").is_ok());
/// assert!(Email::parse("ana@localhost").is_err());
/// assert!(Email::parse("ana maria@example.com").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Parse an e-mail address.
    pub fn parse(s: &str) -> Result<Self, InvalidEmail> {
        if s.chars().any(char::is_whitespace) {
            return Err(InvalidEmail {
                reason: "must not contain whitespace",
            });
        }

        let (local, domain) = s.split_once('@').ok_or(InvalidEmail {
            reason: "must contain '@'",
        })?;

        if domain.contains('@') {
            return Err(InvalidEmail {
                reason: "must contain exactly one '@'",
            });
        }

        if local.is_empty() {
            return Err(InvalidEmail {
                reason: "local part must not be empty",
            });
        }

        let has_inner_dot = domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
        if !has_inner_dot {
            return Err(InvalidEmail {
                reason: "domain must contain a dot between two labels",
            });
        }

        Ok(Email(s.to_owned()))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the part after the `@`.
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, d)| d)
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
