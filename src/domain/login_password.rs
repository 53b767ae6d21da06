use crate::constant::MIN_PASSWORD_LENGTH;
use crate::error::LoginError;
use secrecy::{ExposeSecret, Secret};

/// A password long enough to be submitted.
#[derive(Debug, Clone)]
pub struct LoginPassword(Secret<String>);

impl LoginPassword {
    pub fn parse(password: Secret<String>) -> Result<Self, LoginError> {
        Self::validate(password.expose_secret())?;
        Ok(Self(password))
    }

    /// Length is counted in UTF-16 code units, the unit the mobile text input
    /// reports: `👍` counts as two.
    pub fn validate(password: &str) -> Result<(), LoginError> {
        if password.is_empty() {
            return Err(LoginError::MissingFields);
        }
        if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
            return Err(LoginError::PasswordTooShort);
        }
        Ok(())
    }
}

impl From<LoginPassword> for Secret<String> {
    fn from(value: LoginPassword) -> Self {
        value.0
    }
}
