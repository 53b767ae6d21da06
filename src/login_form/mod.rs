mod controller;
mod outcome;

pub use controller::LoginFormController;
pub use outcome::*;
