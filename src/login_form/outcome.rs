use crate::auth::Credentials;
use crate::error::LoginError;
use secrecy::Secret;

/// What a submission attempt reports back to whoever renders the form.
#[derive(Debug)]
pub enum LoginOutcome {
    Success(LoginSuccess),
    Failure(LoginError),
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success(_))
    }
}

/// The submitted pair, echoed back for display only.
#[derive(Debug, Clone)]
pub struct LoginSuccess {
    pub email: String,
    pub password: Secret<String>,
}

impl From<Credentials> for LoginSuccess {
    fn from(value: Credentials) -> Self {
        Self {
            email: value.email,
            password: value.password,
        }
    }
}
