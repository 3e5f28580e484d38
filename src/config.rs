//! Optional TOML configuration for the `route` binary

use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::CliError;
use directions_core::routing::report::to_text::DEFAULT_COLUMN_WIDTH;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    pub report: ReportConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Width of the route column before the total
    pub column_width: usize,
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl RouteConfig {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: RouteConfig = toml::from_str("").unwrap();
        assert_eq!(config, RouteConfig::default());
        assert_eq!(config.report.column_width, 60);
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: RouteConfig = toml::from_str("[report]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.report.format, OutputFormat::Json);
        assert_eq!(config.report.column_width, 60);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn unreadable_and_invalid_files_fail() {
        let dir = tempfile::tempdir().unwrap();
        let missing = RouteConfig::load(&dir.path().join("route.toml")).unwrap_err();
        assert!(matches!(missing, CliError::ConfigRead { .. }));
        assert_eq!(missing.exit_code(), 1);

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[report]\ncolumn_width = \"wide\"\n").unwrap();
        let invalid = RouteConfig::load(&path).unwrap_err();
        assert!(matches!(invalid, CliError::ConfigParse { .. }));
        assert_eq!(invalid.exit_code(), 1);
    }
}
