use crate::constant::{INVALID_EMAIL_FORMAT_MSG, PASSWORD_TOO_SHORT_MSG};
use crate::error::VerifierError;
use std::fmt::{Debug, Formatter};

/// Why a submission of the login form did not succeed.
///
/// Exactly one of these is reported per attempt. `MissingFields` is checked
/// before the format and length rules.
#[derive(thiserror::Error)]
pub enum LoginError {
    #[error("Please fill all fields.")]
    MissingFields,

    #[error("{}", INVALID_EMAIL_FORMAT_MSG)]
    InvalidEmailFormat,

    #[error("{}", PASSWORD_TOO_SHORT_MSG)]
    PasswordTooShort,

    #[error("Incorrect email or password.")]
    IncorrectCredentials,

    #[error("Unable to verify credentials, please try again.")]
    VerificationFailed(#[from] VerifierError),
}

impl LoginError {
    /// The field-scoped message for errors that belong to a single input.
    pub fn field_message(&self) -> Option<&'static str> {
        match self {
            LoginError::InvalidEmailFormat => Some(INVALID_EMAIL_FORMAT_MSG),
            LoginError::PasswordTooShort => Some(PASSWORD_TOO_SHORT_MSG),
            _ => None,
        }
    }
}

impl Debug for LoginError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
