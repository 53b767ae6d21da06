use crate::auth::Credentials;
use crate::error::VerifierError;
use async_trait::async_trait;

/// Decides whether a credential pair is authentic.
///
/// `Ok(false)` means the pair is well formed but does not match; `Err` means
/// the verifier could not reach a verdict.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, credentials: &Credentials) -> Result<bool, VerifierError>;
}

#[async_trait]
impl<T> CredentialVerifier for std::sync::Arc<T>
where
    T: CredentialVerifier + ?Sized,
{
    async fn verify(&self, credentials: &Credentials) -> Result<bool, VerifierError> {
        (**self).verify(credentials).await
    }
}
