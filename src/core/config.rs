//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.ratelist/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::rates::{DEFAULT_ENDPOINT, PageSize, SortOrder};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RatelistConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub page_size: Option<PageSize>,
    pub sort: Option<SortOrder>,
}

/// Values given on the command line. `None` means the flag was not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub page_size: Option<PageSize>,
    pub sort: Option<SortOrder>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub page_size: PageSize,
    pub sort: SortOrder,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.ratelist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".ratelist").join("config.toml"))
}

/// Load config from `~/.ratelist/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RatelistConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<RatelistConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(RatelistConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`] for an explicit path.
pub fn load_config_from(path: &Path) -> Result<RatelistConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(RatelistConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RatelistConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Ratelist Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [source]
# endpoint = "https://api.exchangerate-api.com/v4/latest/USD"   # Or RATELIST_ENDPOINT

# [display]
# page_size = 10        # 10, 20, 50 or 100. Or RATELIST_PAGE_SIZE
# sort = "provider"     # "provider" (response order) or "currency" (A-Z)
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &RatelistConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Resolution with an injectable environment lookup.
pub fn resolve_with_env<F>(config: &RatelistConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Endpoint: CLI → env → config → default
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| env("RATELIST_ENDPOINT"))
        .or_else(|| config.source.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    // Page size: CLI → env → config → default. A bad env value is ignored.
    let env_page_size = env("RATELIST_PAGE_SIZE").and_then(|raw| {
        raw.parse::<PageSize>()
            .map_err(|e| warn!("Ignoring RATELIST_PAGE_SIZE: {}", e))
            .ok()
    });
    let page_size = cli
        .page_size
        .or(env_page_size)
        .or(config.display.page_size)
        .unwrap_or_default();

    // Sort: CLI → config → default
    let sort = cli.sort.or(config.display.sort).unwrap_or_default();

    ResolvedConfig {
        endpoint,
        page_size,
        sort,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&RatelistConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.page_size, PageSize::Ten);
        assert_eq!(resolved.sort, SortOrder::Provider);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = RatelistConfig {
            source: SourceConfig {
                endpoint: Some("http://rates.local/latest".to_string()),
            },
            display: DisplayConfig {
                page_size: Some(PageSize::Fifty),
                sort: Some(SortOrder::Currency),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.endpoint, "http://rates.local/latest");
        assert_eq!(resolved.page_size, PageSize::Fifty);
        assert_eq!(resolved.sort, SortOrder::Currency);
    }

    #[test]
    fn test_resolve_env_beats_config() {
        let config = RatelistConfig {
            source: SourceConfig {
                endpoint: Some("http://from-config".to_string()),
            },
            display: DisplayConfig {
                page_size: Some(PageSize::Fifty),
                sort: None,
            },
        };
        let env = |key: &str| match key {
            "RATELIST_ENDPOINT" => Some("http://from-env".to_string()),
            "RATELIST_PAGE_SIZE" => Some("20".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.endpoint, "http://from-env");
        assert_eq!(resolved.page_size, PageSize::Twenty);
    }

    #[test]
    fn test_resolve_invalid_env_page_size_is_ignored() {
        let config = RatelistConfig {
            display: DisplayConfig {
                page_size: Some(PageSize::Hundred),
                sort: None,
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "RATELIST_PAGE_SIZE").then(|| "25".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.page_size, PageSize::Hundred);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let env = |key: &str| match key {
            "RATELIST_ENDPOINT" => Some("http://from-env".to_string()),
            "RATELIST_PAGE_SIZE" => Some("20".to_string()),
            _ => None,
        };
        let cli = CliOverrides {
            endpoint: Some("http://from-cli".to_string()),
            page_size: Some(PageSize::Hundred),
            sort: Some(SortOrder::Currency),
        };
        let resolved = resolve_with_env(&RatelistConfig::default(), &cli, env);
        assert_eq!(resolved.endpoint, "http://from-cli");
        assert_eq!(resolved.page_size, PageSize::Hundred);
        assert_eq!(resolved.sort, SortOrder::Currency);
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[source]
endpoint = "https://api.exchangerate-api.com/v4/latest/EUR"

[display]
page_size = 20
sort = "currency"
"#;
        let config: RatelistConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.source.endpoint.as_deref(),
            Some("https://api.exchangerate-api.com/v4/latest/EUR")
        );
        assert_eq!(config.display.page_size, Some(PageSize::Twenty));
        assert_eq!(config.display.sort, Some(SortOrder::Currency));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[display]
sort = "provider"
"#;
        let config: RatelistConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.sort, Some(SortOrder::Provider));
        assert!(config.display.page_size.is_none());
        assert!(config.source.endpoint.is_none());
    }

    #[test]
    fn test_toml_rejects_page_size_outside_set() {
        let result = toml::from_str::<RatelistConfig>("[display]\npage_size = 30\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_template_parses_as_empty() {
        let config: RatelistConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.source.endpoint.is_none());
        assert!(config.display.page_size.is_none());
    }

    #[test]
    fn test_load_config_from_missing_path_generates_default() {
        let dir = std::env::temp_dir().join(format!("ratelist-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.source.endpoint.is_none());
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_config_from_malformed_file() {
        let dir = std::env::temp_dir().join(format!("ratelist-bad-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[display\npage_size = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
