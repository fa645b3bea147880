use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Shortest event poll timeout; zero would spin the event loop
const MIN_TICK_RATE_MS: u64 = 10;

/// Command line options
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Booking summary and slide-to-pay checkout in the terminal",
    long_about = None
)]
pub struct Cli {
    /// Path to a config file (defaults to ~/.booking-summary/config.json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Where to write the log
    #[arg(long, value_name = "FILE", env = "LOG_TARGET", default_value = "booking-summary.log")]
    pub log_file: PathBuf,
}

/// Slide-to-pay geometry, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Use this track width instead of measuring the rendered track
    pub fixed_track_width: Option<u16>,
    pub thumb_width: u16,
    pub track_padding: u16,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            fixed_track_width: None,
            thumb_width: 5,
            track_padding: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
    pub slider: SliderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            slider: SliderConfig::default(),
        }
    }
}

impl Config {
    /// Event poll timeout, never shorter than `MIN_TICK_RATE_MS`
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }

    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".booking-summary"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config from the default location, if one exists
    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Load the config from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the config for this run: explicit file, default file, or defaults
    pub fn resolve(cli: &Cli) -> anyhow::Result<Config> {
        match &cli.config {
            Some(path) => Self::load_from(path),
            None => Ok(Self::load().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.slider.fixed_track_width, None);
        assert_eq!(config.slider.thumb_width, 5);
    }

    #[test]
    fn test_tick_rate_has_a_floor() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(MIN_TICK_RATE_MS));
        assert_eq!(Config::default().tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"slider": {{"fixed_track_width": 40}}}}"#).unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.slider.fixed_track_width, Some(40));
        assert_eq!(config.slider.track_padding, 1);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config file"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            config: Some(dir.path().join("absent.json")),
            log_file: PathBuf::from("test.log"),
        };
        assert!(Config::resolve(&cli).is_err());
    }

    #[test]
    fn test_cli_parses_config_flag() {
        let cli = Cli::try_parse_from(["booking-summary", "--config", "/tmp/c.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.json")));
    }
}
