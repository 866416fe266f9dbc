// server/src/cli/config.rs

use anyhow::{anyhow, Result};
use log::LevelFilter;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

pub fn default_max_login_attempts() -> u32 {
    3
}

pub fn default_banner() -> String {
    "Welcome to Enhanced Hospital System".to_string()
}

pub fn default_pause_after_action() -> bool {
    true
}

pub fn default_log_level() -> String {
    "error".to_string()
}

/// Represents the `[shell]` section of the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShellConfig {
    /// Login attempts before the shell gives up and exits.
    #[serde(default = "default_max_login_attempts")]
    pub max_login_attempts: u32,
    /// Heading printed above the login prompt.
    #[serde(default = "default_banner")]
    pub banner: String,
    /// Wait for Enter after each menu action.
    #[serde(default = "default_pause_after_action")]
    pub pause_after_action: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            max_login_attempts: default_max_login_attempts(),
            banner: default_banner(),
            pause_after_action: default_pause_after_action(),
        }
    }
}

/// Represents the `[logging]` section of the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is not set (`off`, `error`, ..., `trace`).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { level: default_log_level() }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(self.level.trim()).map_err(|_| {
            anyhow!(
                "Unsupported log level: {}. Available: off, error, warn, info, debug, trace",
                self.level
            )
        })
    }
}

/// Represents the entire structure of the config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Parses and checks TOML config content.
pub fn parse_cli_config(content: &str) -> Result<CliConfig> {
    let config: CliConfig = toml::from_str(content)
        .map_err(|e| anyhow!("Failed to parse config: {}", e))?;
    if config.shell.max_login_attempts == 0 {
        return Err(anyhow!("shell.max_login_attempts must be at least 1"));
    }
    config.logging.level_filter()?;
    Ok(config)
}

/// Loads the CLI configuration. Without a path the built-in defaults are used;
/// a path that cannot be read or parsed is an error.
pub fn load_cli_config(path: Option<&Path>) -> Result<CliConfig> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
    parse_cli_config(&content)
        .map_err(|e| anyhow!("Invalid config file {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file() {
        let config = load_cli_config(None).unwrap();
        assert_eq!(config.shell.max_login_attempts, 3);
        assert!(config.shell.pause_after_action);
        assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Error);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = parse_cli_config("[shell]\nmax_login_attempts = 5\n").unwrap();
        assert_eq!(config.shell.max_login_attempts, 5);
        assert_eq!(config.shell.banner, default_banner());
        assert_eq!(config.logging, LoggingConfig::default());
        assert_eq!(parse_cli_config("").unwrap(), CliConfig::default());
    }

    #[test]
    fn rejects_zero_attempts_and_unknown_levels() {
        assert!(parse_cli_config("[shell]\nmax_login_attempts = 0\n").is_err());
        assert!(parse_cli_config("[logging]\nlevel = \"loud\"\n").is_err());
        assert!(parse_cli_config("[shell]\nmax_login_attempts = \"three\"\n").is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let content = r#"
[shell]
banner = "Riverside Clinic"
pause_after_action = false

[logging]
level = "debug"
"#;
        file.write_all(content.as_bytes()).unwrap();
        let config = load_cli_config(Some(file.path())).unwrap();
        assert_eq!(config.shell.banner, "Riverside Clinic");
        assert!(!config.shell.pause_after_action);
        assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load_cli_config(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
