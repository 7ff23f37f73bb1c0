//! CPF (Brazilian individual taxpayer number) type.

use std::fmt;

/// Number of digits in a CPF, check digits included.
const CPF_LEN: usize = 11;

/// Error returned when parsing an invalid CPF.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid CPF: {reason}")]
pub struct InvalidCpf {
    reason: &'static str,
}

impl InvalidCpf {
    /// Returns a short description of why the CPF was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A validated CPF.
///
/// A CPF is 11 decimal digits: a 9-digit base followed by two check digits.
/// Formatting punctuation (`529.982.247-25`) is ignored when parsing, so any
/// `Cpf` value holds exactly 11 digits whose check digits are correct.
///
/// Sequences of one repeated digit (`000.000.000-00`, `111.111.111-11`, ...)
/// satisfy the checksum arithmetic but are placeholder values, and are rejected.
///
/// # Examples
///
/// ```
/// use minimerch_server::domain::Cpf;
///
/// let cpf = Cpf::parse("529.982.247-25").unwrap();
/// assert_eq!(cpf.to_string(), "529.982.247-25");
///
/// // Unformatted input is accepted too
/// assert_eq!(Cpf::parse("52998224725").unwrap(), cpf);
///
/// // Repeated digits are rejected
/// assert!(Cpf::parse("111.111.111-11").is_err());
///
/// // Wrong check digits are rejected
/// assert!(Cpf::parse("123.456.789-00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cpf([u8; CPF_LEN]);

impl Cpf {
    /// Parse a CPF, ignoring every non-digit character.
    pub fn parse(s: &str) -> Result<Self, InvalidCpf> {
        let mut digits = [0u8; CPF_LEN];
        let mut len = 0;

        for b in s.bytes().filter(u8::is_ascii_digit) {
            if len == CPF_LEN {
                return Err(InvalidCpf {
                    reason: "must have exactly 11 digits",
                });
            }
            digits[len] = b - b'0';
            len += 1;
        }

        if len != CPF_LEN {
            return Err(InvalidCpf {
                reason: "must have exactly 11 digits",
            });
        }

        if digits.iter().all(|&d| d == digits[0]) {
            return Err(InvalidCpf {
                reason: "digits must not all be the same",
            });
        }

        if check_digit(&digits[..9]) != digits[9] {
            return Err(InvalidCpf {
                reason: "first check digit does not match",
            });
        }

        if check_digit(&digits[..10]) != digits[10] {
            return Err(InvalidCpf {
                reason: "second check digit does not match",
            });
        }

        Ok(Cpf(digits))
    }

    /// Returns the 11 digits as values 0-9.
    pub fn digits(&self) -> &[u8; CPF_LEN] {
        &self.0
    }

    /// Returns the first check digit (10th digit).
    pub fn first_check_digit(&self) -> u8 {
        self.0[9]
    }

    /// Returns the second check digit (11th digit).
    pub fn second_check_digit(&self) -> u8 {
        self.0[10]
    }

    /// Returns the digits without punctuation, e.g. "52998224725".
    pub fn to_digit_string(&self) -> String {
        self.0.iter().map(|&d| char::from(b'0' + d)).collect()
    }
}

/// Returns true if `s` is a valid CPF once non-digits are stripped.
///
/// Malformed input of any kind is simply invalid.
///
/// ```
/// use minimerch_server::domain::is_valid_cpf;
///
/// assert!(is_valid_cpf("529.982.247-25"));
/// assert!(!is_valid_cpf("529.982.247"));
/// assert!(!is_valid_cpf(""));
/// ```
pub fn is_valid_cpf(s: &str) -> bool {
    Cpf::parse(s).is_ok()
}

/// Computes the check digit for the given prefix.
///
/// Weights run from `prefix.len() + 1` down to 2. A remainder of 10 maps to 0.
fn check_digit(prefix: &[u8]) -> u8 {
    let top = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .zip((2..=top).rev())
        .map(|(&d, weight)| u32::from(d) * weight)
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        r => r as u8,
    }
}

impl fmt::Debug for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cpf({})", self)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_digit_string();
        write!(f, "{}.{}.{}-{}", &s[0..3], &s[3..6], &s[6..9], &s[9..11])
    }
}
