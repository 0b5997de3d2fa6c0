/// Startup configuration failures. All of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("configuration.invalid_encoding: error reading {path}, make sure it's UTF-8 encoded")]
    InvalidEncoding { path: String },
    #[error("configuration.unreadable: {0}")]
    Unreadable(String),
    #[error("configuration.missing_service_key: OPENAI_API_KEY not found in the .env file")]
    MissingServiceKey,
    #[error("configuration.missing_tracing_key: LANGCHAIN_API_KEY not found in the .env file")]
    MissingTracingKey,
}
