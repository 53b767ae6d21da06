use entry_point::auth::{Credentials, StaticCredentialVerifier};
use entry_point::configuration;
use entry_point::login_form::LoginFormController;
use entry_point::telemetry;
use once_cell::sync::Lazy;
use secrecy::ExposeSecret;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        let _ = telemetry::init_subscriber(subscriber);
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        let _ = telemetry::init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub controller: LoginFormController<StaticCredentialVerifier>,
    /// The pair the verifier accepts.
    pub credentials: Credentials,
}

impl TestApp {
    /// Build a controller wired the way the binary wires it, minus the
    /// artificial latency.
    pub fn spawn_app() -> TestApp {
        Lazy::force(&TRACING);

        let mut config = configuration::get_configuration().expect("Failed to read configuration");
        config.verifier.delay_milliseconds = 0;
        let verifier = StaticCredentialVerifier::from_settings(&config.verifier)
            .expect("Failed to load the credential file");
        let controller = LoginFormController::new(verifier).with_timeout(config.verifier.timeout());

        let content = std::fs::read_to_string(&config.verifier.credentials_file)
            .expect("Failed to read the credential file");
        let credentials: Credentials =
            serde_json::from_str(&content).expect("Failed to parse the credential file");

        TestApp {
            controller,
            credentials,
        }
    }

    pub fn fill(&self, email: &str, password: &str) {
        self.controller.on_email_changed(email);
        self.controller.on_password_changed(password);
    }

    pub fn fill_with_valid_credentials(&self) {
        self.fill(
            &self.credentials.email,
            self.credentials.password.expose_secret(),
        );
    }
}
