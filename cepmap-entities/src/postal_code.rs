use std::{fmt, str::FromStr};
use thiserror::Error;

/// Canonical digit length of a Brazilian postal code (CEP).
pub const POSTAL_CODE_DIGITS: usize = 8;

/// A normalized postal code: exactly eight digits, all separators stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// The bare digits without any separator.
    pub fn as_digits(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[derive(Debug, Error)]
#[error("Invalid postal code")]
pub struct PostalCodeParseError;

impl FromStr for PostalCode {
    type Err = PostalCodeParseError;
    fn from_str(s: &str) -> Result<PostalCode, Self::Err> {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != POSTAL_CODE_DIGITS {
            return Err(PostalCodeParseError);
        }
        Ok(Self(digits))
    }
}

impl fmt::Display for PostalCode {
    /// Renders the common `01310-100` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", &self.0[..5], &self.0[5..])
    }
}
