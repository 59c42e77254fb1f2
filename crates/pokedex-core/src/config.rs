//! Configuration loading and typed config structures for the Pokedex site.
//!
//! The configuration lives in `pokedex.yaml` at the project root. This
//! module defines strongly-typed structs that mirror the YAML structure and
//! provides a loader that reads, overrides, and validates the file. Every
//! field has a default, so an absent file yields a working configuration.

use std::path::Path;

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::pagination::PAGE_SIZES;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is out of its allowed range.
    #[error("invalid configuration: {source}")]
    Invalid {
        /// The collected validation failures.
        #[from]
        source: validator::ValidationErrors,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from the YAML file.
    File,
    /// The file was absent; built-in defaults were used.
    Defaults,
}

/// Top-level site configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct PokedexConfig {
    /// Upstream API settings.
    #[validate(nested)]
    pub api: ApiConfig,

    /// Batch fetching parameters.
    #[validate(nested)]
    pub fetch: FetchConfig,

    /// Static output settings.
    #[validate(nested)]
    pub site: SiteConfig,

    /// Preview server settings.
    #[validate(nested)]
    pub preview: PreviewConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl PokedexConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `POKEAPI_BASE_URL` overrides `api.base_url`
    /// - `POKEDEX_OUTPUT_DIR` overrides `site.output_dir`
    /// - `POKEDEX_PORT` overrides `preview.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Load the file at `path` if it exists, otherwise start from defaults.
    ///
    /// Environment overrides and validation apply either way. The returned
    /// [`ConfigSource`] tells the caller which one happened, so it can be
    /// logged once the subscriber is installed.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            return Ok((Self::from_file(path)?, ConfigSource::File));
        }
        let mut config = Self::default();
        config.apply_env_overrides();
        config.check()?;
        Ok((config, ConfigSource::Defaults))
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.apply_env_overrides();
        config.check()?;
        Ok(config)
    }

    /// Validate every section, including the offered page sizes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] listing every out-of-range value.
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate()?;
        if !PAGE_SIZES.contains(&self.site.page_size) {
            let mut errors = ValidationErrors::new();
            errors.add("page_size", ValidationError::new("page_size_not_offered"));
            return Err(errors.into());
        }
        Ok(())
    }

    /// Override values with environment variables when set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override values from an arbitrary key lookup.
    ///
    /// Unparseable port values are ignored and the configured port kept.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("POKEAPI_BASE_URL") {
            self.api.base_url = val;
        }
        if let Some(val) = lookup("POKEDEX_OUTPUT_DIR") {
            self.site.output_dir = val;
        }
        if let Some(port) = lookup("POKEDEX_PORT").and_then(|val| val.parse().ok()) {
            self.preview.port = port;
        }
    }
}

/// Upstream API settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct ApiConfig {
    /// Base URL without trailing slash (e.g. `https://pokeapi.co/api/v2`).
    #[serde(default = "default_base_url")]
    #[validate(url)]
    pub base_url: String,

    /// Upper bound on catalog size passed as the listing `limit`.
    #[serde(default = "default_catalog_limit")]
    #[validate(range(min = 1))]
    pub catalog_limit: u32,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    #[validate(range(min = 1))]
    pub request_timeout_ms: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            catalog_limit: default_catalog_limit(),
            request_timeout_ms: default_request_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

/// Batch fetching parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct FetchConfig {
    /// Number of requests issued concurrently per batch.
    #[serde(default = "default_batch_size")]
    #[validate(range(min = 1))]
    pub batch_size: usize,

    /// Pause between batches in milliseconds.
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,

    /// Moves kept per entry on the bulk path.
    #[serde(default = "default_move_limit")]
    pub move_limit: usize,

    /// Language code of the description text (`en`).
    #[serde(default = "default_description_language")]
    #[validate(length(min = 1))]
    pub description_language: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            batch_delay_ms: default_batch_delay_ms(),
            move_limit: default_move_limit(),
            description_language: default_description_language(),
        }
    }
}

/// Static output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct SiteConfig {
    /// Heading shown on every page.
    #[serde(default = "default_title")]
    pub title: String,

    /// Directory the generated site is written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Directory holding the page templates.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// Entries per page of the pre-rendered list.
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1))]
    pub page_size: usize,

    /// Highest id that gets a "next" link on the detail page.
    #[serde(default = "default_max_known_id")]
    pub max_known_id: u32,

    /// Moves listed on the detail page before "+N more".
    #[serde(default = "default_detail_move_preview")]
    pub detail_move_preview: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            output_dir: default_output_dir(),
            templates_dir: default_templates_dir(),
            page_size: default_page_size(),
            max_known_id: default_max_known_id(),
            detail_move_preview: default_detail_move_preview(),
        }
    }
}

/// Preview server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct PreviewConfig {
    /// Host address to bind.
    #[serde(default = "default_preview_host")]
    #[validate(length(min = 1))]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_preview_port")]
    pub port: u16,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            host: default_preview_host(),
            port: default_preview_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_owned()
}

const fn default_catalog_limit() -> u32 {
    2000
}

const fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_user_agent() -> String {
    format!("pokedex-site/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_batch_size() -> usize {
    50
}

const fn default_batch_delay_ms() -> u64 {
    100
}

const fn default_move_limit() -> usize {
    20
}

fn default_description_language() -> String {
    "en".to_owned()
}

fn default_title() -> String {
    "Pokédex".to_owned()
}

fn default_output_dir() -> String {
    "dist".to_owned()
}

fn default_templates_dir() -> String {
    "templates".to_owned()
}

const fn default_page_size() -> usize {
    20
}

const fn default_max_known_id() -> u32 {
    1010
}

const fn default_detail_move_preview() -> usize {
    15
}

fn default_preview_host() -> String {
    "127.0.0.1".to_owned()
}

const fn default_preview_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn parse_without_env(yaml: &str) -> Result<PokedexConfig, ConfigError> {
        let mut config: PokedexConfig = serde_yml::from_str(yaml)?;
        config.apply_overrides(no_env);
        config.check()?;
        Ok(config)
    }

    #[test]
    fn default_config_is_valid() {
        let config = PokedexConfig::default();
        assert!(config.check().is_ok());
        assert_eq!(config.api.catalog_limit, 2000);
        assert_eq!(config.fetch.batch_size, 50);
        assert_eq!(config.fetch.batch_delay_ms, 100);
        assert_eq!(config.fetch.move_limit, 20);
        assert_eq!(config.site.page_size, 20);
        assert_eq!(config.site.max_known_id, 1010);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
api:
  base_url: "http://localhost:9000/api/v2"
  catalog_limit: 151
  request_timeout_ms: 5000
  user_agent: "test-agent"

fetch:
  batch_size: 10
  batch_delay_ms: 0
  move_limit: 5
  description_language: "de"

site:
  title: "Kanto Dex"
  output_dir: "public"
  templates_dir: "tpl"
  page_size: 50
  max_known_id: 151
  detail_move_preview: 10

preview:
  host: "0.0.0.0"
  port: 3000

logging:
  level: "debug"
  format: json
"#;

        let config = parse_without_env(yaml);
        assert!(config.is_ok(), "parse failed: {config:?}");
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.api.base_url, "http://localhost:9000/api/v2");
        assert_eq!(config.api.catalog_limit, 151);
        assert_eq!(config.fetch.batch_size, 10);
        assert_eq!(config.fetch.description_language, "de");
        assert_eq!(config.site.title, "Kanto Dex");
        assert_eq!(config.site.page_size, 50);
        assert_eq!(config.preview.port, 3000);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn parse_minimal_yaml() {
        let config = parse_without_env("fetch:\n  batch_size: 5\n");
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.fetch.batch_size, 5);
        // Everything else uses defaults
        assert_eq!(config.fetch.batch_delay_ms, 100);
        assert_eq!(config.site.output_dir, "dist");
    }

    #[test]
    fn parse_empty_yaml() {
        assert!(PokedexConfig::parse("").is_ok());
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let result = parse_without_env("fetch:\n  batch_size: 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn unoffered_page_size_is_rejected() {
        let result = parse_without_env("site:\n  page_size: 7\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        let result = parse_without_env("api:\n  base_url: \"not a url\"\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn overrides_replace_yaml_values() {
        let mut config = PokedexConfig::default();
        config.apply_overrides(|key| match key {
            "POKEAPI_BASE_URL" => Some("http://mirror.local/api/v2".to_owned()),
            "POKEDEX_OUTPUT_DIR" => Some("out".to_owned()),
            "POKEDEX_PORT" => Some("9999".to_owned()),
            _ => None,
        });
        assert_eq!(config.api.base_url, "http://mirror.local/api/v2");
        assert_eq!(config.site.output_dir, "out");
        assert_eq!(config.preview.port, 9999);
    }

    #[test]
    fn bad_port_override_is_ignored() {
        let mut config = PokedexConfig::default();
        config.apply_overrides(|key| (key == "POKEDEX_PORT").then(|| "eighty".to_owned()));
        assert_eq!(config.preview.port, 8080);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir();
        assert!(dir.is_ok());
        let Ok(dir) = dir else { return };
        let loaded = PokedexConfig::load_or_default(&dir.path().join("absent.yaml"));
        assert!(loaded.is_ok(), "defaults should load: {loaded:?}");
        let Ok((config, source)) = loaded else { return };
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config.site.page_size, 20);
    }

    #[test]
    fn present_file_reports_file_source() {
        let dir = tempfile::tempdir();
        assert!(dir.is_ok());
        let Ok(dir) = dir else { return };
        let path = dir.path().join("pokedex.yaml");
        assert!(std::fs::write(&path, "site:\n  page_size: 12\n").is_ok());
        let loaded = PokedexConfig::load_or_default(&path);
        assert!(loaded.is_ok(), "file should load: {loaded:?}");
        let Ok((config, source)) = loaded else { return };
        assert_eq!(source, ConfigSource::File);
        assert_eq!(config.site.page_size, 12);
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("pokedex.yaml");
        if path.exists() {
            let config = PokedexConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
