use crate::auth::{CredentialVerifier, Credentials};
use crate::domain::{FormState, LoginEmail, LoginPassword, SubmissionState, ValidationErrors};
use crate::error::{LoginError, VerifierError};
use crate::login_form::{LoginOutcome, LoginSuccess};
use parking_lot::Mutex;
use secrecy::Secret;
use std::time::Duration;

#[derive(Debug, Default)]
struct FormInner {
    form: FormState,
    errors: ValidationErrors,
    state: SubmissionState,
}

/// Owns the login form: field values, the errors derived from them and the
/// lifecycle of the current submission.
///
/// All intents take `&self`. The lock is never held across an `.await`, so a
/// `submit` issued while another one is suspended on the verifier sees
/// [`SubmissionState::Pending`] and is suppressed.
pub struct LoginFormController<V> {
    verifier: V,
    timeout: Option<Duration>,
    inner: Mutex<FormInner>,
}

impl<V> LoginFormController<V>
where
    V: CredentialVerifier,
{
    pub fn new(verifier: V) -> Self {
        Self {
            verifier,
            timeout: None,
            inner: Mutex::new(FormInner::default()),
        }
    }

    /// Give up on the verifier after `timeout`; expiry is reported as
    /// [`LoginError::VerificationFailed`].
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn form_state(&self) -> FormState {
        self.inner.lock().form.clone()
    }

    pub fn validation_errors(&self) -> ValidationErrors {
        self.inner.lock().errors.clone()
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.inner.lock().state
    }

    pub fn on_email_changed(&self, text: impl Into<String>) {
        let mut inner = self.inner.lock();
        inner.form.email = text.into();
        let FormInner { form, errors, .. } = &mut *inner;
        errors.check_email(&form.email);
        inner.reopen_after_failure();
    }

    pub fn on_password_changed(&self, text: impl Into<String>) {
        let mut inner = self.inner.lock();
        inner.form.password = text.into();
        let FormInner { form, errors, .. } = &mut *inner;
        errors.check_password(&form.password);
        inner.reopen_after_failure();
    }

    pub fn toggle_secret_visibility(&self) {
        let mut inner = self.inner.lock();
        inner.form.secure_text_entry = !inner.form.secure_text_entry;
    }

    /// Validate the form and, if it passes, ask the verifier.
    ///
    /// Returns `None` when a submission is already in flight. The future must be
    /// driven to completion: dropping it while pending leaves the form pending.
    #[tracing::instrument(
        name = "Submit login form",
        skip(self),
        fields(email = tracing::field::Empty)
    )]
    pub async fn submit(&self) -> Option<LoginOutcome> {
        let credentials = match self.begin_submission() {
            Ok(Some(credentials)) => credentials,
            Ok(None) => {
                tracing::debug!("A submission is already pending, ignoring");
                return None;
            }
            Err(e) => {
                tracing::info!("Login form rejected: {}", e);
                return Some(LoginOutcome::Failure(e));
            }
        };
        tracing::Span::current().record("email", &tracing::field::display(&credentials.email));

        let verdict = self.verify(&credentials).await;
        Some(self.finish_submission(credentials, verdict))
    }

    /// Run the local checks and move to `Pending` if they pass.
    fn begin_submission(&self) -> Result<Option<Credentials>, LoginError> {
        let mut inner = self.inner.lock();
        if !inner.state.accepts_submission() {
            return Ok(None);
        }
        if inner.form.has_empty_field() {
            return Err(LoginError::MissingFields);
        }

        let email = LoginEmail::parse(inner.form.email.clone()).map_err(|e| {
            inner.errors.email_error = e.field_message();
            e
        })?;
        let password = LoginPassword::parse(Secret::new(inner.form.password.clone()))
            .map_err(|e| {
                inner.errors.password_error = e.field_message();
                e
            })?;

        inner.state = SubmissionState::Pending;
        Ok(Some(Credentials::new(email, password)))
    }

    async fn verify(&self, credentials: &Credentials) -> Result<bool, VerifierError> {
        match self.timeout {
            Some(timeout) => {
                tokio::time::timeout(timeout, self.verifier.verify(credentials))
                    .await
                    .unwrap_or(Err(VerifierError::TimedOut(timeout)))
            }
            None => self.verifier.verify(credentials).await,
        }
    }

    fn finish_submission(
        &self,
        credentials: Credentials,
        verdict: Result<bool, VerifierError>,
    ) -> LoginOutcome {
        let mut inner = self.inner.lock();
        match verdict {
            Ok(true) => {
                tracing::info!("Login succeeded");
                inner.state = SubmissionState::Succeeded;
                inner.form = FormState::default();
                inner.errors = ValidationErrors::default();
                LoginOutcome::Success(LoginSuccess::from(credentials))
            }
            Ok(false) => {
                tracing::info!("Login failed: credentials do not match");
                inner.state = SubmissionState::Failed;
                LoginOutcome::Failure(LoginError::IncorrectCredentials)
            }
            Err(e) => {
                tracing::warn!("Credential verification failed: {:?}", e);
                inner.state = SubmissionState::Failed;
                LoginOutcome::Failure(LoginError::VerificationFailed(e))
            }
        }
    }
}

impl FormInner {
    /// Editing a field after a failed attempt allows submitting again.
    fn reopen_after_failure(&mut self) {
        if self.state == SubmissionState::Failed {
            self.state = SubmissionState::Idle;
        }
    }
}
