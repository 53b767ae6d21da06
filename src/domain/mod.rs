mod form_state;
mod login_email;
mod login_password;
mod submission_state;
mod validation_errors;

pub use form_state::FormState;
pub use login_email::LoginEmail;
pub use login_password::LoginPassword;
pub use submission_state::SubmissionState;
pub use validation_errors::ValidationErrors;
