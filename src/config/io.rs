use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// Load configuration from `path`, falling back to defaults if the file is
/// missing or malformed. Never fails the launch.
pub fn load_config(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(raw) => match parse_config(&raw) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), "Ignoring malformed config: {err:#}");
                AppConfig::default()
            }
        },
        Err(err) => {
            info!(
                path = %path.display(),
                "No config file ({err}); using defaults"
            );
            AppConfig::default()
        }
    }
}

/// Parse a TOML document into an [`AppConfig`]. Missing tables and fields
/// take their defaults; unknown keys are ignored.
pub fn parse_config(raw: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(raw).context("Invalid TOML in config")?;
    Ok(tables.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("").expect("empty config should parse");
        let defaults = AppConfig::default();
        assert_eq!(config.window_width, defaults.window_width);
        assert_eq!(config.ember_count, defaults.ember_count);
        assert_eq!(config.log_level, defaults.log_level);
        assert!(config.ambient_effects);
    }

    #[test]
    fn partial_tables_merge_with_defaults() {
        let raw = r#"
            [effects]
            ember_count = 80

            [logging]
            log_level = "debug"
        "#;
        let config = parse_config(raw).expect("partial config should parse");
        assert_eq!(config.ember_count, 80);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.window_width, AppConfig::default().window_width);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse_config("[window\nwidth = ").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config(Path::new("/nonexistent/landing-config.toml"));
        assert_eq!(config.ember_count, AppConfig::default().ember_count);
    }
}
