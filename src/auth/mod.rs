mod credentials;
mod static_verifier;
mod verifier;

pub use credentials::*;
pub use static_verifier::*;
pub use verifier::*;
