use super::errors::ConfigurationError;

/// Request tracing is always on for this service.
pub const TRACING_ENABLED: bool = true;

/// Service key and tracing key, both required and non-empty.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialPair {
    service_key: String,
    tracing_key: String,
}

impl CredentialPair {
    pub fn new(
        service_key: impl Into<String>,
        tracing_key: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let service_key = service_key.into();
        let tracing_key = tracing_key.into();

        if service_key.is_empty() {
            return Err(ConfigurationError::MissingServiceKey);
        }
        if tracing_key.is_empty() {
            return Err(ConfigurationError::MissingTracingKey);
        }

        Ok(Self {
            service_key,
            tracing_key,
        })
    }

    pub fn service_key(&self) -> &str {
        &self.service_key
    }

    pub fn tracing_key(&self) -> &str {
        &self.tracing_key
    }

    pub fn tracing(&self) -> TracingSettings {
        TracingSettings::new(self.tracing_key.clone())
    }
}

impl std::fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialPair")
            .field("service_key", &"***")
            .field("tracing_key", &"***")
            .finish()
    }
}

/// Tracing key plus the fixed switch for request tracing.
#[derive(Clone, PartialEq, Eq)]
pub struct TracingSettings {
    key: String,
    pub enabled: bool,
}

impl TracingSettings {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            enabled: TRACING_ENABLED,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Debug for TracingSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TracingSettings")
            .field("key", &"***")
            .field("enabled", &self.enabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_pair_when_both_keys_present() {
        let pair = CredentialPair::new("sk-test", "ls-test").unwrap();

        assert_eq!(pair.service_key(), "sk-test");
        assert_eq!(pair.tracing_key(), "ls-test");
    }

    #[test]
    fn should_reject_empty_service_key() {
        let result = CredentialPair::new("", "ls-test");

        assert_eq!(result.unwrap_err(), ConfigurationError::MissingServiceKey);
    }

    #[test]
    fn should_reject_empty_tracing_key() {
        let result = CredentialPair::new("sk-test", "");

        assert_eq!(result.unwrap_err(), ConfigurationError::MissingTracingKey);
    }

    #[test]
    fn should_check_service_key_before_tracing_key() {
        let result = CredentialPair::new("", "");

        assert_eq!(result.unwrap_err(), ConfigurationError::MissingServiceKey);
    }

    #[test]
    fn should_hide_secrets_in_debug_output() {
        let pair = CredentialPair::new("sk-secret-value", "ls-secret-value").unwrap();

        let debug = format!("{:?}", pair);

        assert!(!debug.contains("sk-secret-value"));
        assert!(!debug.contains("ls-secret-value"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn should_carry_tracing_key_with_tracing_enabled() {
        let pair = CredentialPair::new("sk-test", "ls-test").unwrap();

        let tracing = pair.tracing();

        assert!(tracing.enabled);
        assert_eq!(tracing.key(), "ls-test");
    }

    #[test]
    fn should_hide_tracing_key_in_debug_output() {
        let tracing = TracingSettings::new("ls-secret-value");

        let debug = format!("{:?}", tracing);

        assert!(!debug.contains("ls-secret-value"));
        assert!(debug.contains("enabled: true"));
    }
}
