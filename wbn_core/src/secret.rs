//! Retrieval of credentials from AWS Systems Manager Parameter Store.

use async_trait::async_trait;
use aws_sdk_ssm::{error::DisplayErrorContext, Client as SsmClient};

use crate::Error;

#[async_trait]
/// A store holding named secrets.
pub trait SecretStore: Send + Sync {
    /// Get the plaintext value of a secret.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the store cannot be reached or has no such secret.
    async fn secret(&self, name: &str) -> Result<String, Error>;
}

/// Reads `SecureString` parameters, decrypting them on retrieval.
#[derive(Debug, Clone)]
pub struct SsmSecretStore {
    client: SsmClient,
}

impl SsmSecretStore {
    pub fn new(client: SsmClient) -> Self {
        Self { client }
    }

    /// Build a client from the ambient AWS configuration.
    pub async fn from_env() -> Self {
        let shared = aws_config::from_env().load().await;
        Self::new(SsmClient::new(&shared))
    }
}

#[async_trait]
impl SecretStore for SsmSecretStore {
    async fn secret(&self, name: &str) -> Result<String, Error> {
        tracing::info!(name, "retrieving secret");
        let response = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|err| match err.as_service_error() {
                Some(service_err) if service_err.is_parameter_not_found() => {
                    Error::MissingSecret(name.to_string())
                }
                _ => Error::SecretStore(format!(
                    "ssm get_parameter: {}",
                    DisplayErrorContext(&err)
                )),
            })?;
        let value = response
            .parameter()
            .and_then(|parameter| parameter.value())
            .ok_or_else(|| Error::MissingSecret(name.to_string()))?;
        tracing::info!(name, "retrieved secret");
        Ok(value.to_string())
    }
}
