use entry_point::auth::{CredentialVerifier, StaticCredentialVerifier};
use entry_point::configuration;
use entry_point::domain::SubmissionState;
use entry_point::error::BizErrorEnum;
use entry_point::login_form::{LoginFormController, LoginOutcome};
use entry_point::telemetry;
use secrecy::ExposeSecret;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  email <text>      set the email field
  password <text>   set the password field
  toggle            show or hide the password
  submit            log in
  show              print the form
  help              print this message
  quit              exit";

#[tokio::main]
async fn main() -> Result<(), BizErrorEnum> {
    let config = configuration::get_configuration()?;

    // Logs go to stderr, the form is rendered on stdout
    let subscriber =
        telemetry::get_subscriber(config.application.name.clone(), "warn".into(), std::io::stderr);
    telemetry::init_subscriber(subscriber)?;

    let verifier = StaticCredentialVerifier::from_settings(&config.verifier)?;
    let controller = LoginFormController::new(verifier).with_timeout(config.verifier.timeout());

    println!("EntryPoint\nWelcome Back! Let's get started.\n\n{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(BizErrorEnum::ReadStdinError)?
    {
        let (command, argument) = line.split_once(' ').unwrap_or((line.as_str(), ""));
        match command {
            "email" => {
                controller.on_email_changed(argument);
                render(&controller);
            }
            "password" => {
                controller.on_password_changed(argument);
                render(&controller);
            }
            "toggle" => {
                controller.toggle_secret_visibility();
                render(&controller);
            }
            "submit" => {
                println!("Logging in...");
                if let Some(outcome) = controller.submit().await {
                    report(&outcome);
                }
                render(&controller);
            }
            "show" => render(&controller),
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            "" => {}
            other => println!("Unknown command '{}', type 'help'.", other),
        }
    }

    Ok(())
}

fn render<V: CredentialVerifier>(controller: &LoginFormController<V>) {
    let form = controller.form_state();
    let errors = controller.validation_errors();
    let password = if form.secure_text_entry {
        "*".repeat(form.password.chars().count())
    } else {
        form.password.clone()
    };

    println!("Email:    {}", form.email);
    if let Some(error) = errors.email_error {
        println!("          {}", error);
    }
    println!("Password: {}", password);
    if let Some(error) = errors.password_error {
        println!("          {}", error);
    }
    if controller.submission_state() == SubmissionState::Pending {
        println!("[ ... ]");
    } else {
        println!("[ Login ]");
    }
}

fn report(outcome: &LoginOutcome) {
    match outcome {
        LoginOutcome::Success(success) => println!(
            "Login Success\nValidation successful!\n\nEmail: {}\nPassword: {}",
            success.email,
            success.password.expose_secret()
        ),
        LoginOutcome::Failure(e) => println!("Login Failed\n{}", e),
    }
}
