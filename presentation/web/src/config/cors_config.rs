use poem::middleware::Cors;

use super::source::ConfigSource;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:8501,http://127.0.0.1:8501";

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:8501,http://127.0.0.1:8501")
pub fn init_cors(source: &ConfigSource) -> Cors {
    let allowed_origins = source.get_or("CORS_ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS);

    let origins: Vec<String> = allowed_origins
        .split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();

    Cors::new()
        .allow_origins(origins)
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"])
}
