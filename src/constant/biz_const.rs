/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// validate login form
pub const MIN_PASSWORD_LENGTH: usize = 5;
/// `\s` in `regex` leaves out U+FEFF, so it is listed explicitly
pub const EMAIL_PATTERN: &str = r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$";

/// field-scoped error messages
pub const INVALID_EMAIL_FORMAT_MSG: &str = "Invalid email format";
pub const PASSWORD_TOO_SHORT_MSG: &str = "Password must be at least 5 characters";
