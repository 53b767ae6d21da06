use crate::domain::{LoginEmail, LoginPassword};

/// Field-scoped messages derived from the current form values.
///
/// An empty field never carries an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub email_error: Option<&'static str>,
    pub password_error: Option<&'static str>,
}

impl ValidationErrors {
    pub fn check_email(&mut self, email: &str) {
        self.email_error = LoginEmail::validate(email)
            .err()
            .and_then(|e| e.field_message());
    }

    pub fn check_password(&mut self, password: &str) {
        self.password_error = LoginPassword::validate(password)
            .err()
            .and_then(|e| e.field_message());
    }
}
