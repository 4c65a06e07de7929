use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::validation::is_valid_percent;

/// Default k-mer length used to seed the index
pub const DEFAULT_MIN_SEARCH_LENGTH: usize = 10;

/// Default chunk length for relatedness estimation
pub const DEFAULT_FRAGMENT_MATCH_LENGTH: usize = 20;

/// Default minimum percentage for reporting a related genome
pub const DEFAULT_MATCH_PERCENT_THRESHOLD: f64 = 20.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Parameters for building a matcher and running queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Length of the indexed k-mers
    pub min_search_length: usize,
    /// Chunk length for relatedness estimation
    pub fragment_match_length: usize,
    /// Minimum percentage of matching chunks for a related genome
    pub match_percent_threshold: f64,
    /// Disallow the single tolerated substitution
    pub exact_match_only: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_search_length: DEFAULT_MIN_SEARCH_LENGTH,
            fragment_match_length: DEFAULT_FRAGMENT_MATCH_LENGTH,
            match_percent_threshold: DEFAULT_MATCH_PERCENT_THRESHOLD,
            exact_match_only: false,
        }
    }
}

impl MatcherConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read,
    /// `ConfigError::ParseError` for malformed JSON, or
    /// `ConfigError::Invalid` if the values fail [`Self::validate`].
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a config from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for malformed JSON or
    /// `ConfigError::Invalid` if the values fail [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the parameters are usable together
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_search_length == 0 {
            return Err(ConfigError::Invalid(
                "min_search_length must be at least 1".to_string(),
            ));
        }
        if self.fragment_match_length < self.min_search_length {
            return Err(ConfigError::Invalid(format!(
                "fragment_match_length ({}) must be at least min_search_length ({})",
                self.fragment_match_length, self.min_search_length
            )));
        }
        if !is_valid_percent(self.match_percent_threshold) {
            return Err(ConfigError::Invalid(format!(
                "match_percent_threshold ({}) must be between 0 and 100",
                self.match_percent_threshold
            )));
        }
        Ok(())
    }
}
