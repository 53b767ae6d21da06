use crate::helpers::TestApp;
use claims::{assert_matches, assert_some};
use entry_point::domain::{FormState, SubmissionState};
use entry_point::error::LoginError;
use entry_point::login_form::LoginOutcome;
use secrecy::ExposeSecret;

#[tokio::test]
async fn configured_credentials_log_in_and_reset_the_form() {
    // Arrange
    let app = TestApp::spawn_app();
    app.fill_with_valid_credentials();

    // Act
    let outcome = assert_some!(app.controller.submit().await);

    // Assert
    match outcome {
        LoginOutcome::Success(success) => {
            assert_eq!(success.email, app.credentials.email);
            assert_eq!(
                success.password.expose_secret(),
                app.credentials.password.expose_secret()
            );
        }
        LoginOutcome::Failure(e) => panic!("expected success, got {:?}", e),
    }
    assert_eq!(
        app.controller.submission_state(),
        SubmissionState::Succeeded
    );
    assert_eq!(app.controller.form_state(), FormState::default());
}

#[tokio::test]
async fn wrong_password_fails_and_can_be_corrected() {
    // Arrange
    let app = TestApp::spawn_app();
    app.fill(&app.credentials.email, "not-the-password");

    // Act - Part 1 - Wrong password
    let outcome = assert_some!(app.controller.submit().await);

    // Assert
    assert_matches!(outcome, LoginOutcome::Failure(LoginError::IncorrectCredentials));
    assert_eq!(app.controller.submission_state(), SubmissionState::Failed);
    assert_eq!(app.controller.form_state().password, "not-the-password");

    // Act - Part 2 - Correct the password and resubmit
    app.controller
        .on_password_changed(app.credentials.password.expose_secret().as_str());
    assert_eq!(app.controller.submission_state(), SubmissionState::Idle);
    let outcome = assert_some!(app.controller.submit().await);

    // Assert
    assert!(outcome.is_success());
}

#[tokio::test]
async fn unknown_email_is_rejected() {
    let app = TestApp::spawn_app();
    app.fill(
        "someone-else@entrypoint.dev",
        app.credentials.password.expose_secret(),
    );

    let outcome = assert_some!(app.controller.submit().await);

    assert_matches!(outcome, LoginOutcome::Failure(LoginError::IncorrectCredentials));
}

#[tokio::test]
async fn validation_failures_leave_the_form_idle() {
    let app = TestApp::spawn_app();
    let cases = [
        ("", "earthsea", "missing email"),
        ("ursula@le-guin.com", "", "missing password"),
        ("ursula", "earthsea", "malformed email"),
        ("ursula@le-guin.com", "abc", "short password"),
    ];

    for (email, password, description) in cases {
        app.fill(email, password);
        let outcome = assert_some!(app.controller.submit().await);
        assert!(
            !outcome.is_success(),
            "The form was accepted when the payload was {}.",
            description
        );
        assert_eq!(
            app.controller.submission_state(),
            SubmissionState::Idle,
            "The state changed when the payload was {}.",
            description
        );
    }
}

#[tokio::test]
async fn missing_fields_take_precedence_over_format_errors() {
    let app = TestApp::spawn_app();
    app.fill("ursula", "");

    let outcome = assert_some!(app.controller.submit().await);

    assert_matches!(outcome, LoginOutcome::Failure(LoginError::MissingFields));
}
