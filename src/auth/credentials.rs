use crate::domain::{LoginEmail, LoginPassword};
use secrecy::Secret;
use serde::Deserialize;

/// An email/password pair, either submitted by the form or expected by a verifier.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: Secret<String>,
}

impl Credentials {
    pub fn new(email: LoginEmail, password: LoginPassword) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
