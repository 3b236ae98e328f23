// CLI configuration loaded from TOML.
//
// Example `fizzbuzz.toml`:
//
//     log_level = "debug"
//
//     [range]
//     start = 1
//     end = 100
//     max_len = 1000000
//
//     [output]
//     format = "json"
//     style = "phrase"
//     summary = true

use crate::error::ConfigError;
use crate::report::{range_len, LabelStyle, OutputFormat, DEFAULT_MAX_RANGE_LEN};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "fizzbuzz.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangeConfig {
    pub start: i64,
    pub end: i64,
    /// Longest range the CLI will classify in one run.
    pub max_len: u64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        RangeConfig {
            start: 1,
            end: 15,
            max_len: DEFAULT_MAX_RANGE_LEN,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub style: LabelStyle,
    pub summary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub range: RangeConfig,
    pub output: OutputConfig,
    /// `tracing` filter directive, e.g. `"info"` or `"fizzbuzz_testing=trace"`.
    pub log_level: Option<String>,
}

impl Config {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Self::from_toml_str(&content, path)
    }

    /// Load `explicit` if given, else `fizzbuzz.toml` from `dir` if it exists,
    /// else defaults. A missing explicit file is an error.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            debug!("no config file found, using defaults");
            Ok(Config::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let RangeConfig { start, end, max_len } = self.range;
        if max_len == 0 {
            return Err(ConfigError::invalid_value("range.max_len", "must be at least 1"));
        }
        match range_len(start, end) {
            None => {
                return Err(ConfigError::invalid_value(
                    "range",
                    format!("start ({start}) must not exceed end ({end})"),
                ))
            }
            Some(len) if len > u128::from(max_len) => {
                return Err(ConfigError::invalid_value(
                    "range",
                    format!("{start}..={end} holds {len} numbers, more than max_len ({max_len})"),
                ))
            }
            Some(_) => {}
        }
        if let Some(level) = &self.log_level {
            if level.trim().is_empty() {
                return Err(ConfigError::invalid_value("log_level", "must not be empty"));
            }
        }
        Ok(())
    }
}
