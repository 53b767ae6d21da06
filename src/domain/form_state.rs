use std::fmt::{Debug, Formatter};

/// Raw field values of the login form.
///
/// `secure_text_entry` only decides whether the password is rendered masked;
/// it never takes part in validation.
#[derive(Clone, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub secure_text_entry: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            secure_text_entry: true,
        }
    }
}

impl FormState {
    pub fn has_empty_field(&self) -> bool {
        self.email.is_empty() || self.password.is_empty()
    }
}

impl Debug for FormState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("secure_text_entry", &self.secure_text_entry)
            .finish()
    }
}
