//! Configuration types for the logging system

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default log level (can be overridden by RUST_LOG)
    pub default_level: String,

    /// Console output configuration
    pub console: ConsoleConfig,

    /// File output configuration
    pub file: Option<FileConfig>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            console: ConsoleConfig::default(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Verbose, human-readable console output
    pub fn development() -> Self {
        Self {
            default_level: "debug".to_string(),
            console: ConsoleConfig {
                enabled: true,
                pretty: true,
                ansi: true,
                level: Some("debug".to_string()),
            },
            file: None,
        }
    }

    /// Minimal output for test runs
    pub fn testing() -> Self {
        Self {
            default_level: "warn".to_string(),
            console: ConsoleConfig {
                enabled: true,
                pretty: false,
                ansi: false,
                level: Some("warn".to_string()),
            },
            file: None,
        }
    }

    /// Pretty console at `level`, plus a JSON file per run when `log_dir` is set
    pub fn desktop(level: impl Into<String>, log_dir: Option<PathBuf>) -> Self {
        Self {
            default_level: level.into(),
            console: ConsoleConfig {
                enabled: true,
                pretty: true,
                ansi: true,
                level: None,
            },
            file: log_dir.map(|directory| FileConfig {
                directory,
                prefix: "folio".to_string(),
                rotation: RotationStrategy::Never,
                max_files: None,
            }),
        }
    }
}

/// Console output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Enable console output
    pub enabled: bool,
    /// Use pretty (human-readable) format instead of JSON lines
    pub pretty: bool,
    /// Include ANSI colors
    pub ansi: bool,
    /// Level for console output (can be different from file)
    pub level: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pretty: true,
            ansi: true,
            level: None,
        }
    }
}

/// File output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    /// Directory for log files
    pub directory: PathBuf,
    /// File name prefix
    pub prefix: String,
    /// Rotation strategy
    pub rotation: RotationStrategy,
    /// Maximum files to retain (rotating strategies only)
    pub max_files: Option<usize>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./logs"),
            prefix: "folio".to_string(),
            rotation: RotationStrategy::Daily,
            max_files: Some(7),
        }
    }
}

/// File rotation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RotationStrategy {
    /// Rotate daily
    #[default]
    Daily,
    /// Rotate hourly
    Hourly,
    /// Never rotate (single file, truncated on start)
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.default_level, "info");
        assert!(config.console.enabled);
        assert!(config.console.pretty);
        assert!(config.file.is_none());
    }

    #[test]
    fn test_development_config() {
        let config = LogConfig::development();
        assert_eq!(config.default_level, "debug");
        assert!(config.console.pretty);
        assert!(config.console.ansi);
    }

    #[test]
    fn test_desktop_config_with_log_dir() {
        let config = LogConfig::desktop("trace", Some(PathBuf::from("/tmp/folio-logs")));
        assert_eq!(config.default_level, "trace");
        assert_eq!(config.console.level, None);
        let file = config.file.unwrap();
        assert_eq!(file.prefix, "folio");
        assert_eq!(file.rotation, RotationStrategy::Never);
    }

    #[test]
    fn test_config_from_json() {
        let config: LogConfig = serde_json::from_str(
            r#"{
                "default_level": "debug",
                "console": { "enabled": false, "pretty": false, "ansi": false, "level": null },
                "file": { "directory": "logs", "prefix": "site", "rotation": "hourly", "max_files": 3 }
            }"#,
        )
        .unwrap();
        assert!(!config.console.enabled);
        let file = config.file.unwrap();
        assert_eq!(file.rotation, RotationStrategy::Hourly);
        assert_eq!(file.max_files, Some(3));
    }
}
