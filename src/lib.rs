pub mod auth;
pub mod configuration;
pub mod constant;
pub mod domain;
pub mod error;
pub mod login_form;
pub mod telemetry;
