//! Startup configuration.
//!
//! Values come from built-in defaults, then an optional TOML file in the
//! platform config directory, then `SUPERHERO_API_TOKEN` / `SUPERHERO_API_URL`.

use crate::theme::{Locale, PaletteName, Theme};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://www.superheroapi.com/api.php";
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const CONFIG_DIR_NAME: &str = "superhero-explorer";
const CONFIG_FILE_NAME: &str = "config.toml";

pub const TOKEN_ENV: &str = "SUPERHERO_API_TOKEN";
pub const BASE_URL_ENV: &str = "SUPERHERO_API_URL";

/// Which stat bars a result card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStats {
    /// Intelligence, strength and speed.
    #[default]
    Summary,
    Full,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub access_token: String,
    pub request_timeout: Duration,
    pub palette: PaletteName,
    pub locale: Locale,
    pub card_stats: CardStats,
}

/// On-disk shape; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    api_base_url: Option<String>,
    access_token: Option<String>,
    request_timeout_secs: Option<u64>,
    palette: Option<PaletteName>,
    locale: Option<Locale>,
    card_stats: Option<CardStats>,
}

impl Config {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        Self::load_from(&path, |key| std::env::var(key).ok())
    }

    /// Reads `path` if it exists and layers `env` lookups on top.
    pub fn load_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let file = if path.exists() {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let parsed: FileConfig = toml::from_str(&text)
                .with_context(|| format!("invalid config file {}", path.display()))?;
            log::debug!("loaded config from {}", path.display());
            parsed
        } else {
            FileConfig::default()
        };

        let env_value = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let access_token = env_value(TOKEN_ENV)
            .or(file.access_token)
            .map(|t| t.trim().to_string())
            .unwrap_or_default();
        if access_token.is_empty() {
            bail!(
                "no API access token configured; set {} or access_token in {}",
                TOKEN_ENV,
                path.display()
            );
        }

        let timeout_secs = file.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            bail!(
                "request_timeout_secs in {} must be greater than zero",
                path.display()
            );
        }

        let api_base_url = env_value(BASE_URL_ENV)
            .or(file.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Self {
            api_base_url,
            access_token,
            request_timeout: Duration::from_secs(timeout_secs),
            palette: file.palette.unwrap_or_default(),
            locale: file.locale.unwrap_or_default(),
            card_stats: file.card_stats.unwrap_or_default(),
        })
    }

    pub fn theme(&self) -> Theme {
        Theme::new(self.palette, self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn env_token_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");

        let config = Config::load_from(&missing, env_of(&[(TOKEN_ENV, "abc123")])).unwrap();
        assert_eq!(config.access_token, "abc123");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.palette, PaletteName::Dark);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.card_stats, CardStats::Summary);
    }

    #[test]
    fn missing_token_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");

        let err = Config::load_from(&missing, env_of(&[(TOKEN_ENV, "   ")])).unwrap_err();
        assert!(err.to_string().contains(TOKEN_ENV));
    }

    #[test]
    fn file_values_are_read() {
        let file = write_config(
            r#"
access_token = "from-file"
api_base_url = "http://localhost:8080/api.php"
request_timeout_secs = 3
palette = "light"
locale = "es"
card_stats = "full"
"#,
        );

        let config = Config::load_from(file.path(), env_of(&[])).unwrap();
        assert_eq!(config.access_token, "from-file");
        assert_eq!(config.api_base_url, "http://localhost:8080/api.php");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.palette, PaletteName::Light);
        assert_eq!(config.locale, Locale::Es);
        assert_eq!(config.card_stats, CardStats::Full);
        assert_eq!(config.theme().strings.close, "Cerrar");
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_config("access_token = \"from-file\"\napi_base_url = \"http://file\"\n");

        let config = Config::load_from(
            file.path(),
            env_of(&[(TOKEN_ENV, "from-env"), (BASE_URL_ENV, "http://env")]),
        )
        .unwrap();
        assert_eq!(config.access_token, "from-env");
        assert_eq!(config.api_base_url, "http://env");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let file = write_config("request_timeout_secs = 0\n");

        let err = Config::load_from(file.path(), env_of(&[(TOKEN_ENV, "t")])).unwrap_err();
        assert!(err.to_string().contains("request_timeout_secs"));
    }

    #[test]
    fn malformed_file_reports_path() {
        let file = write_config("palette = \"neon\"\n");

        let err = Config::load_from(file.path(), env_of(&[(TOKEN_ENV, "t")])).unwrap_err();
        assert!(err.to_string().contains("invalid config file"));
    }
}
