//! Email address value object

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref ADDRESS_REGEX: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// An error that can occur when parsing an email address
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailAddressError {
    /// The address is empty
    #[error("email address is empty")]
    Empty,

    /// The address is not of the form `local@domain.tld`
    #[error("email address {0:?} is invalid")]
    Invalid(String),
}

/// A validated email address
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and validates an address, trimming surrounding whitespace.
    pub fn new(raw: &str) -> Result<Self, EmailAddressError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(EmailAddressError::Empty);
        }

        if !ADDRESS_REGEX.is_match(trimmed) {
            return Err(EmailAddressError::Invalid(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Wraps a string without validating it.
    ///
    /// For fixtures and data already validated elsewhere.
    pub fn new_unchecked(raw: &str) -> Self {
        Self(raw.to_string())
    }

    /// The address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EmailAddress {
    type Err = EmailAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(address: EmailAddress) -> Self {
        address.0
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_valid_address_parses_and_displays() -> TestResult {
        let address: EmailAddress = "no-reply@mysite.com".parse()?;

        assert_eq!(address.as_str(), "no-reply@mysite.com");
        assert_eq!(address.to_string(), "no-reply@mysite.com");

        Ok(())
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() -> TestResult {
        let address = EmailAddress::new("  user@example.com  ")?;

        assert_eq!(address.as_str(), "user@example.com");

        Ok(())
    }

    #[test]
    fn test_empty_address_is_rejected() {
        assert_eq!(EmailAddress::new("   "), Err(EmailAddressError::Empty));
    }

    #[test]
    fn test_address_without_domain_is_rejected() {
        let result = EmailAddress::new("user");

        assert!(matches!(result, Err(EmailAddressError::Invalid(_))));
    }

    #[test]
    fn test_address_with_two_at_signs_is_rejected() {
        let result = EmailAddress::new("user@host@example.com");

        assert!(matches!(result, Err(EmailAddressError::Invalid(_))));
    }
}
