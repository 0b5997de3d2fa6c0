use std::sync::Arc;

use business::domain::configuration::errors::ConfigurationError;
use business::domain::configuration::model::CredentialPair;
use poem::middleware::Cors;

use super::{
    cors_config, credentials_config::CredentialsConfig, openai_config::OpenAIConfig,
    server_config::ServerConfig, source::ConfigSource,
};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub openai: OpenAIConfig,
    pub credentials: Arc<CredentialPair>,
}

impl AppConfig {
    /// Reads `.env` and the process environment once at startup.
    ///
    /// # Errors
    /// Any `ConfigurationError` is fatal: the caller must not start serving.
    pub fn load() -> Result<Self, ConfigurationError> {
        let source = ConfigSource::load()?;
        Self::from_source(&source)
    }

    pub fn from_source(source: &ConfigSource) -> Result<Self, ConfigurationError> {
        let credentials = CredentialsConfig::from_source(source)?;

        Ok(Self {
            server: ServerConfig::from_source(source),
            cors: cors_config::init_cors(source),
            openai: OpenAIConfig::from_source(source),
            credentials: Arc::new(credentials),
        })
    }
}
