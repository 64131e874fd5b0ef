//! Configuration loading from disk and environment.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::schema::SiteConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Overrides the API base URL. An empty value disables the remote API.
pub const ENV_API_URL: &str = "COURSE_SITE_API_URL";
/// Overrides the snapshot directory.
pub const ENV_SNAPSHOTS: &str = "COURSE_SITE_SNAPSHOTS";
/// Overrides the credential file path.
pub const ENV_TOKEN_FILE: &str = "COURSE_SITE_TOKEN_FILE";
/// Overrides the log filter.
pub const ENV_LOG: &str = "COURSE_SITE_LOG";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read and deserialize a TOML file without semantic checks.
fn read_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Resolve the effective configuration: file (if given) or defaults, then
/// `COURSE_SITE_*` overrides from `lookup`, then validation.
///
/// `lookup` is usually `std::env::var`, layered under command-line flags.
pub fn resolve_config<F>(path: Option<&Path>, lookup: F) -> Result<SiteConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => SiteConfig::default(),
    };

    apply_overrides(&mut config, lookup);
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(
        api = config.api.base_url.as_deref().unwrap_or("<static only>"),
        snapshots = %config.snapshots.root.display(),
        "Configuration resolved"
    );

    Ok(config)
}

/// Apply environment-style overrides from a lookup function.
pub fn apply_overrides<F>(config: &mut SiteConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL) {
        let url = url.trim();
        config.api.base_url = if url.is_empty() { None } else { Some(url.to_string()) };
    }
    if let Some(root) = lookup(ENV_SNAPSHOTS) {
        config.snapshots.root = PathBuf::from(root);
    }
    if let Some(path) = lookup(ENV_TOKEN_FILE) {
        config.credentials.path = Some(PathBuf::from(path));
    }
    if let Some(level) = lookup(ENV_LOG) {
        config.observability.log_level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_resolve_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [api]
            base_url = "https://es117.example.org"

            [snapshots]
            root = "site/data"
            "#
        )
        .unwrap();

        let config = resolve_config(Some(file.path()), |_| None).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://es117.example.org"));
        assert_eq!(config.snapshots.root, PathBuf::from("site/data"));
    }

    #[test]
    fn test_resolve_config_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\ntimeout_ms = 0").unwrap();

        let err = resolve_config(Some(file.path()), |_| None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("api.timeout_ms"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = resolve_config(Some(Path::new("definitely/not/here.toml")), |_| None).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_API_URL, "http://127.0.0.1:8000"),
            (ENV_TOKEN_FILE, "/tmp/token.json"),
        ]
        .into_iter()
        .collect();

        let mut config = SiteConfig::default();
        apply_overrides(&mut config, |k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.api.base_url.as_deref(), Some("http://127.0.0.1:8000"));
        assert_eq!(config.credentials.path, Some(PathBuf::from("/tmp/token.json")));
        assert_eq!(config.snapshots.root, PathBuf::from("data"));
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let err = resolve_config(None, |k| (k == ENV_API_URL).then(|| "not a url".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = resolve_config(None, |k| (k == ENV_API_URL).then(|| "ftp://files.example.org".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_empty_api_override_disables_remote() {
        let mut config = SiteConfig::default();
        config.api.base_url = Some("http://127.0.0.1:8000".into());

        apply_overrides(&mut config, |k| (k == ENV_API_URL).then(|| " ".to_string()));
        assert!(config.api.base_url.is_none());
    }
}
