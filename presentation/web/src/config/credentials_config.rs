use business::domain::configuration::errors::ConfigurationError;
use business::domain::configuration::model::CredentialPair;

use super::source::ConfigSource;

pub const SERVICE_KEY_VAR: &str = "OPENAI_API_KEY";
pub const TRACING_KEY_VAR: &str = "LANGCHAIN_API_KEY";

/// Loads the credential pair required before any request can be made.
pub struct CredentialsConfig;

impl CredentialsConfig {
    /// Environment variables:
    /// - OPENAI_API_KEY: service key (required)
    /// - LANGCHAIN_API_KEY: tracing key (required)
    ///
    /// # Errors
    /// Returns `MissingServiceKey` or `MissingTracingKey`, checked in that order.
    pub fn from_source(source: &ConfigSource) -> Result<CredentialPair, ConfigurationError> {
        let service_key = source
            .get(SERVICE_KEY_VAR)
            .ok_or(ConfigurationError::MissingServiceKey)?;
        let tracing_key = source
            .get(TRACING_KEY_VAR)
            .ok_or(ConfigurationError::MissingTracingKey)?;

        CredentialPair::new(service_key, tracing_key)
    }
}
