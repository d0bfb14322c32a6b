//! Strongly-typed value objects shared by domain entities.
//!
//! These wrappers enforce basic invariants (normalized email, E.164 phone,
//! sanitized HTML) so that once a value reaches the domain layer it can be
//! treated as trusted.

use std::fmt::{Display, Formatter};

use phonenumber::{Mode, parse};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when constructing a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    #[error("invalid email address")]
    InvalidEmail,
    #[error("value cannot be empty")]
    EmptyString,
    #[error("invalid phone number")]
    InvalidPhone,
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Lower-cased and validated email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = email.into().trim().to_lowercase();
        if normalized.validate_email() {
            Ok(Self(normalized))
        } else {
            Err(TypeConstraintError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for EmailAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Phone number normalized to E.164.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        let parsed = parse(None, trimmed).map_err(|_| TypeConstraintError::InvalidPhone)?;
        Ok(Self(parsed.format().mode(Mode::E164).to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User-supplied HTML run through `ammonia` before it reaches storage.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SanitizedHtml(String);

impl SanitizedHtml {
    pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let cleaned = ammonia::clean(value.as_ref());
        if cleaned.trim().is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Trims an optional string, dropping it entirely when empty.
pub(crate) fn normalize_opt(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Canonicalizes an optional email through [`EmailAddress`]; values that do
/// not parse are kept trimmed and lower-cased (lead lists come from messy
/// CSVs, so a bad address must not drop the row).
pub(crate) fn normalize_opt_email(value: Option<String>) -> Option<String> {
    normalize_opt(value).map(|s| match EmailAddress::new(s.as_str()) {
        Ok(email) => email.into_inner(),
        Err(_) => s.to_lowercase(),
    })
}

/// Canonicalizes an optional phone to E.164 through [`PhoneNumber`]; values
/// that do not parse are kept trimmed.
pub(crate) fn normalize_opt_phone(value: Option<String>) -> Option<String> {
    normalize_opt(value).map(|s| match PhoneNumber::new(s.as_str()) {
        Ok(phone) => phone.into_inner(),
        Err(_) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_normalized() {
        let email = EmailAddress::new("  Alice@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn bad_email_is_rejected() {
        assert_eq!(
            EmailAddress::new("not-an-email"),
            Err(TypeConstraintError::InvalidEmail)
        );
    }

    #[test]
    fn phone_normalizes_to_e164() {
        let phone = PhoneNumber::new("+1 415 555 2671").unwrap();
        assert_eq!(phone.as_str(), "+14155552671");
    }

    #[test]
    fn sanitized_html_strips_scripts() {
        let html = SanitizedHtml::new("<p>hi</p><script>alert(1)</script>").unwrap();
        assert_eq!(html.as_str(), "<p>hi</p>");
    }
}
