use super::source::ConfigSource;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Load server configuration
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8501")
    pub fn from_source(source: &ConfigSource) -> Self {
        Self {
            ip: source.get_or("SERVICE_IP", "127.0.0.1"),
            port: source.get_or("SERVICE_PORT", "8501"),
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
