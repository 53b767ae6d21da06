use std::fmt::{Debug, Formatter};
use std::time::Duration;

/// Failures of the credential verifier itself, as opposed to a verdict of
/// "these credentials do not match".
#[derive(thiserror::Error)]
pub enum VerifierError {
    #[error("Credential verification timed out after {0:?}.")]
    TimedOut(Duration),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl Debug for VerifierError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
