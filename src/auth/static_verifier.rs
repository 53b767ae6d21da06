use crate::auth::{CredentialVerifier, Credentials};
use crate::configuration::VerifierSettings;
use crate::error::{BizErrorEnum, VerifierError};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::path::Path;
use std::time::Duration;

/// Compares submitted credentials against a single configured pair, after an
/// artificial delay that stands in for network latency.
#[derive(Debug, Clone)]
pub struct StaticCredentialVerifier {
    expected: Credentials,
    delay: Duration,
}

impl StaticCredentialVerifier {
    pub fn new(expected: Credentials, delay: Duration) -> Self {
        Self { expected, delay }
    }

    /// Load the expected pair from a JSON file shaped like
    /// `{"email": "...", "password": "..."}`.
    #[tracing::instrument(name = "Load credential file", skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>, delay: Duration) -> Result<Self, BizErrorEnum> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            tracing::error!("Failed to read credential file: {:?}", e);
            BizErrorEnum::ReadCredentialFileError(e)
        })?;
        let expected: Credentials = serde_json::from_str(&content).map_err(|e| {
            tracing::error!("Failed to parse credential file: {:?}", e);
            BizErrorEnum::ParseCredentialFileError(e)
        })?;
        Ok(Self::new(expected, delay))
    }

    pub fn from_settings(settings: &VerifierSettings) -> Result<Self, BizErrorEnum> {
        Self::from_file(&settings.credentials_file, settings.delay())
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    #[tracing::instrument(name = "Verify static credentials", skip(self, credentials))]
    async fn verify(&self, credentials: &Credentials) -> Result<bool, VerifierError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(credentials.email == self.expected.email
            && credentials.password.expose_secret() == self.expected.password.expose_secret())
    }
}
