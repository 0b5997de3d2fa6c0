use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use business::domain::configuration::errors::ConfigurationError;

/// Overrides the location of the `.env` file.
pub const ENV_FILE_VAR: &str = "QUICKASK_ENV_FILE";
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Key/value configuration read from a `.env` file, layered under the
/// process environment.
///
/// Values are never written back into the process environment. A variable
/// set in the environment wins over the file, and empty values count as absent.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    file: HashMap<String, String>,
    env: HashMap<String, String>,
}

impl ConfigSource {
    /// Reads the `.env` file and snapshots the process environment.
    ///
    /// # Errors
    /// Returns `InvalidEncoding` when the file is not UTF-8 and `Unreadable`
    /// for any other read or parse failure. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigurationError> {
        let env: HashMap<String, String> = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();

        let path = env_file_path(&env);

        Ok(Self::from_parts(read_env_file(&path)?, env))
    }

    pub fn from_parts(file: HashMap<String, String>, env: HashMap<String, String>) -> Self {
        Self { file, env }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.env
            .get(key)
            .filter(|v| !v.is_empty())
            .or_else(|| self.file.get(key).filter(|v| !v.is_empty()))
            .cloned()
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

/// `QUICKASK_ENV_FILE` when set and non-empty, `.env` otherwise.
pub fn env_file_path(env: &HashMap<String, String>) -> PathBuf {
    env.get(ENV_FILE_VAR)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE))
}

/// Parses a `.env` file without touching the process environment.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigurationError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(err) if err.not_found() => return Ok(HashMap::new()),
        Err(err) => return Err(classify(err, path)),
    };

    iter.map(|item| item.map_err(|err| classify(err, path)))
        .collect()
}

fn classify(err: dotenvy::Error, path: &Path) -> ConfigurationError {
    match err {
        dotenvy::Error::Io(io) if io.kind() == ErrorKind::InvalidData => {
            ConfigurationError::InvalidEncoding {
                path: path.display().to_string(),
            }
        }
        other => ConfigurationError::Unreadable(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn env_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn should_read_key_value_pairs() {
        let file = env_file(b"OPENAI_API_KEY=sk-file\n# comment\nLANGCHAIN_API_KEY=\"ls-file\"\n");

        let entries = read_env_file(file.path()).unwrap();

        assert_eq!(entries.get("OPENAI_API_KEY").unwrap(), "sk-file");
        assert_eq!(entries.get("LANGCHAIN_API_KEY").unwrap(), "ls-file");
    }

    #[test]
    fn should_treat_missing_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();

        let entries = read_env_file(&dir.path().join("absent.env")).unwrap();

        assert!(entries.is_empty());
    }

    #[test]
    fn should_reject_non_utf8_file() {
        let file = env_file(&[0xff, 0xfe, b'K', 0x00, b'=', 0x00, 0xc3, 0x28, b'\n']);

        let result = read_env_file(file.path());

        assert!(matches!(
            result.unwrap_err(),
            ConfigurationError::InvalidEncoding { .. }
        ));
    }

    #[test]
    fn should_reject_non_utf8_value_after_valid_lines() {
        let file = env_file(b"OPENAI_API_KEY=sk-file\nLANGCHAIN_API_KEY=caf\xe9\n");

        let result = read_env_file(file.path());

        assert!(matches!(
            result.unwrap_err(),
            ConfigurationError::InvalidEncoding { .. }
        ));
    }

    #[test]
    fn should_report_unreadable_for_malformed_line() {
        let file = env_file(b"OPENAI_API_KEY sk\n");

        let result = read_env_file(file.path());

        assert!(matches!(
            result.unwrap_err(),
            ConfigurationError::Unreadable(_)
        ));
    }

    #[test]
    fn should_default_env_file_path_when_override_missing() {
        assert_eq!(env_file_path(&HashMap::new()), PathBuf::from(".env"));
        assert_eq!(
            env_file_path(&vars(&[("QUICKASK_ENV_FILE", "")])),
            PathBuf::from(".env")
        );
    }

    #[test]
    fn should_use_env_file_override() {
        let env = vars(&[("QUICKASK_ENV_FILE", "/etc/quickask/prod.env")]);

        assert_eq!(
            env_file_path(&env),
            PathBuf::from("/etc/quickask/prod.env")
        );
    }

    #[test]
    fn should_prefer_process_environment_over_file() {
        let source = ConfigSource::from_parts(
            vars(&[("OPENAI_API_KEY", "sk-file")]),
            vars(&[("OPENAI_API_KEY", "sk-env")]),
        );

        assert_eq!(source.get("OPENAI_API_KEY").unwrap(), "sk-env");
    }

    #[test]
    fn should_fall_back_to_file_when_env_value_is_empty() {
        let source = ConfigSource::from_parts(
            vars(&[("OPENAI_API_KEY", "sk-file")]),
            vars(&[("OPENAI_API_KEY", "")]),
        );

        assert_eq!(source.get("OPENAI_API_KEY").unwrap(), "sk-file");
    }

    #[test]
    fn should_treat_empty_values_as_absent() {
        let source = ConfigSource::from_parts(vars(&[("SERVICE_PORT", "")]), HashMap::new());

        assert!(source.get("SERVICE_PORT").is_none());
        assert_eq!(source.get_or("SERVICE_PORT", "8501"), "8501");
    }
}
