//! Generation configuration
//!
//! Loads the `KEY,VALUE` config file that drives a generation run. The
//! file itself is required and generation never proceeds on a missing
//! source, while individual keys fall back to documented defaults.
//! Present-but-malformed values are errors, not silent defaults.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors from loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration not found at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("line {line} is not a KEY,VALUE pair: {content:?}")]
    Malformed { line: usize, content: String },
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
    #[error("{key} out of range: {reason}")]
    OutOfRange { key: &'static str, reason: String },
}

/// Parameters consumed by the generation core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    /// Grid dimension; the grid is `size × size`
    pub size: i32,
    /// Obstacle density as a percentage of the grid area
    pub obstacle_probability: u32,
    /// Exact grade sum the critical path must reach
    pub target_grade: u32,
    /// Per-cell grade cap for the grade field
    pub max_grade: u32,
    /// Chance, in percent, that a decoy room sprouts per neighbor
    pub fake_room_probability: u32,
    /// Retry cap for the generation loop
    pub max_attempts: u32,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            size: 10,
            obstacle_probability: 20,
            target_grade: 20,
            max_grade: 5,
            fake_room_probability: 20,
            max_attempts: 1000,
            seed: None,
        }
    }
}

impl GenConfig {
    /// Load configuration from a `KEY,VALUE`-per-line file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_str_content(&content)
    }

    /// Parse configuration from already-read file content.
    pub fn from_str_content(content: &str) -> Result<Self, ConfigError> {
        let mut pairs = HashMap::new();
        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once(',') else {
                return Err(ConfigError::Malformed {
                    line: index + 1,
                    content: raw.to_string(),
                });
            };
            let _ = pairs.insert(key.trim().to_string(), value.trim().to_string());
        }

        let defaults = Self::default();
        let config = Self {
            size: parse_or(&pairs, "SIZE", defaults.size)?,
            obstacle_probability: parse_or(
                &pairs,
                "OBSTACLE_PROBABILITY",
                defaults.obstacle_probability,
            )?,
            target_grade: parse_or(&pairs, "TARGET_GRADE", defaults.target_grade)?,
            max_grade: parse_or(&pairs, "MAX_GRADE", defaults.max_grade)?,
            fake_room_probability: parse_or(
                &pairs,
                "FAKE_ROOM_PROBABILITY",
                defaults.fake_room_probability,
            )?,
            max_attempts: parse_or(&pairs, "MAX_ATTEMPTS", defaults.max_attempts)?,
            seed: match pairs.get("SEED") {
                Some(value) => Some(parse_value("SEED", value)?),
                None => None,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Range-sanity checks on the loaded values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 2 {
            return Err(ConfigError::OutOfRange {
                key: "SIZE",
                reason: format!("{} (needs at least 2 rooms for entrance and exit)", self.size),
            });
        }
        if self.max_grade < 1 {
            return Err(ConfigError::OutOfRange {
                key: "MAX_GRADE",
                reason: "0 (grades are floored at 1)".to_string(),
            });
        }
        for (key, value) in [
            ("OBSTACLE_PROBABILITY", self.obstacle_probability),
            ("FAKE_ROOM_PROBABILITY", self.fake_room_probability),
        ] {
            if value > 100 {
                return Err(ConfigError::OutOfRange {
                    key,
                    reason: format!("{} (percentage)", value),
                });
            }
        }
        Ok(())
    }
}

fn parse_or<T: std::str::FromStr>(
    pairs: &HashMap<String, String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match pairs.get(key) {
        Some(value) => parse_value(key, value),
        None => Ok(default),
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
