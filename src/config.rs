//! Configuration loader and validator.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Fixed default endpoint used when no webhook URL is configured.
pub const DEFAULT_WEBHOOK_URL: &str = "https://hooks.zapier.com/hooks/catch/25470556/uzws3gf/";

const DEFAULT_CONFIG_PATH: &str = "herald.yaml";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Root configuration struct mirroring the YAML schema exactly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub webhook: Webhook,
    #[serde(default)]
    pub log: Log,
}

/// Webhook delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Webhook {
    #[serde(default = "default_webhook_url")]
    pub url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Log acquisition settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Log {
    /// Path to the captured job log, if one was written.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_webhook_url() -> String {
    DEFAULT_WEBHOOK_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for Webhook {
    fn default() -> Self {
        Self {
            url: default_webhook_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Load configuration from a YAML file and validate it.
/// - If `path` is None, uses `herald.yaml` in the current working directory
///   and falls back to defaults when that file does not exist. An explicitly
///   given path must be readable.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let cfg = match path {
        Some(path) => parse(&fs::read_to_string(path)?)?,
        None => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            if path.exists() {
                parse(&fs::read_to_string(path)?)?
            } else {
                Config::default()
            }
        }
    };
    validate(&cfg)?;
    Ok(cfg)
}

fn parse(content: &str) -> Result<Config, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Validate a configuration instance.
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.webhook.url.trim().is_empty() {
        return Err(ConfigError::Invalid("webhook.url must be non-empty"));
    }
    if !cfg.webhook.url.starts_with("http://") && !cfg.webhook.url.starts_with("https://") {
        return Err(ConfigError::Invalid("webhook.url must be an http(s) URL"));
    }
    if cfg.webhook.timeout_seconds == 0 {
        return Err(ConfigError::Invalid("webhook.timeout_seconds must be > 0"));
    }
    Ok(())
}

/// Example YAML document matching the schema.
pub fn example() -> &'static str {
    r#"webhook:
  url: "https://hooks.zapier.com/hooks/catch/25470556/uzws3gf/"
  timeout_seconds: 30

log:
  file: "ci-output.log"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_example_ok() {
        let cfg: Config = serde_yaml::from_str(example()).unwrap();
        validate(&cfg).unwrap();
        assert_eq!(cfg.webhook.url, DEFAULT_WEBHOOK_URL);
        assert_eq!(cfg.log.file.as_deref(), Some("ci-output.log"));
    }

    #[test]
    fn empty_sections_get_defaults() {
        let cfg: Config = serde_yaml::from_str("webhook: {}\nlog: {}\n").unwrap();
        assert_eq!(cfg.webhook.url, DEFAULT_WEBHOOK_URL);
        assert_eq!(cfg.webhook.timeout_seconds, 30);
        assert!(cfg.log.file.is_none());
    }

    #[test]
    fn invalid_webhook_url() {
        let mut cfg: Config = serde_yaml::from_str(example()).unwrap();
        cfg.webhook.url = "".into();
        let err = validate(&cfg).unwrap_err();
        match err {
            ConfigError::Invalid(msg) => assert!(msg.contains("webhook.url")),
            _ => panic!("wrong error"),
        }

        cfg.webhook.url = "ftp://example.com".into();
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn invalid_timeout() {
        let mut cfg: Config = serde_yaml::from_str(example()).unwrap();
        cfg.webhook.timeout_seconds = 0;
        let err = validate(&cfg).unwrap_err();
        match err {
            ConfigError::Invalid(msg) => assert!(msg.contains("timeout_seconds")),
            _ => panic!("wrong error"),
        }
    }

    #[test]
    fn load_from_file_ok() {
        let td = tempdir().unwrap();
        let p = td.path().join("herald.yaml");
        fs::write(&p, example()).unwrap();
        let cfg = load(Some(&p)).unwrap();
        assert_eq!(cfg.webhook.timeout_seconds, 30);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let td = tempdir().unwrap();
        let p = td.path().join("nope.yaml");
        assert!(matches!(load(Some(&p)), Err(ConfigError::Io(_))));
    }
}
