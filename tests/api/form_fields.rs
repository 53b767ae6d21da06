use crate::helpers::TestApp;
use entry_point::domain::SubmissionState;
use quickcheck::TestResult;

#[quickcheck_macros::quickcheck]
fn emails_without_a_dot_after_the_at_are_flagged(local: String, domain: String) -> TestResult {
    if local.is_empty() || domain.contains('.') {
        return TestResult::discard();
    }
    let app = TestApp::spawn_app();
    app.controller.on_email_changed(format!("{}@{}", local, domain));
    TestResult::from_bool(
        app.controller.validation_errors().email_error == Some("Invalid email format"),
    )
}

#[quickcheck_macros::quickcheck]
fn well_shaped_emails_are_not_flagged(local: u32, domain: u32, tld: u32) -> bool {
    let app = TestApp::spawn_app();
    app.controller
        .on_email_changed(format!("u{}@d{}.t{}", local, domain, tld));
    app.controller.validation_errors().email_error.is_none()
}

#[quickcheck_macros::quickcheck]
fn password_error_tracks_length(password: String) -> TestResult {
    if password.is_empty() {
        return TestResult::discard();
    }
    let app = TestApp::spawn_app();
    app.controller.on_password_changed(password.as_str());
    let flagged = app.controller.validation_errors().password_error.is_some();
    TestResult::from_bool(flagged == (password.encode_utf16().count() < 5))
}

#[quickcheck_macros::quickcheck]
fn toggling_visibility_leaves_everything_else_alone(email: String, password: String) -> bool {
    let app = TestApp::spawn_app();
    app.fill(&email, &password);
    let errors = app.controller.validation_errors();
    let form = app.controller.form_state();

    app.controller.toggle_secret_visibility();

    let toggled = app.controller.form_state();
    app.controller.validation_errors() == errors
        && app.controller.submission_state() == SubmissionState::Idle
        && toggled.email == form.email
        && toggled.password == form.password
        && toggled.secure_text_entry != form.secure_text_entry
}
