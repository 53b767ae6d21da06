use crate::constant::EMAIL_PATTERN;
use crate::error::LoginError;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// An email address accepted by the login form: `local@domain.tld`, with no
/// whitespace and a single `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginEmail(String);

impl LoginEmail {
    pub fn parse(email: String) -> Result<Self, LoginError> {
        Self::validate(&email)?;
        Ok(Self(email))
    }

    /// Checks `email` without taking ownership of it.
    pub fn validate(email: &str) -> Result<(), LoginError> {
        if email.is_empty() {
            return Err(LoginError::MissingFields);
        }
        if !EMAIL_REGEX.is_match(email) {
            return Err(LoginError::InvalidEmailFormat);
        }
        Ok(())
    }
}

impl From<LoginEmail> for String {
    fn from(value: LoginEmail) -> Self {
        value.0
    }
}
