//! Configuration file handling for the CLI.
//!
//! Settings that affect seeding strength live next to plain output
//! defaults so operators can pin both in one reviewed file.

use crate::generator::{Alphabet, AlphabetError};
use crate::seeding::OS_REQUEST_BYTES;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Smallest accepted OS entropy request.
pub const MIN_OS_REQUEST_BYTES: usize = 32;

/// Configuration validation errors.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Entropy request below the accepted minimum.
    #[error("os_request_bytes must be at least 32")]
    RequestTooSmall,
    /// The configured alphabet failed validation.
    #[error(transparent)]
    Alphabet(#[from] AlphabetError),
    /// Reading the file failed.
    #[error("failed to read config file: {0}")]
    FileRead(String),
    /// Parsing the file failed.
    #[error("failed to parse config file: {0}")]
    Parse(String),
}

/// Seeding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedingConfig {
    /// Bytes requested from the OS entropy source when no seed is given.
    pub os_request_bytes: usize,
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self {
            os_request_bytes: OS_REQUEST_BYTES,
        }
    }
}

/// Output format for byte-oriented commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lowercase hex on one line.
    #[default]
    Hex,
    /// Raw bytes on stdout.
    Raw,
}

/// Output defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output length (bytes or characters, per command).
    pub length: usize,
    /// Default alphabet for string output.
    pub alphabet: String,
    /// Default byte output format.
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            length: 32,
            alphabet: ('a'..='z').chain('A'..='Z').chain('0'..='9').collect(),
            format: OutputFormat::Hex,
        }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Seeding settings.
    #[serde(default)]
    pub seeding: SeedingConfig,
    /// Output defaults.
    #[serde(default)]
    pub output: OutputConfig,
}

impl FileConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileRead(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seeding.os_request_bytes < MIN_OS_REQUEST_BYTES {
            return Err(ConfigError::RequestTooSmall);
        }
        Alphabet::new(&self.output.alphabet)?;
        Ok(())
    }

    /// The configured alphabet as a validated type.
    pub fn alphabet(&self) -> Result<Alphabet, ConfigError> {
        Ok(Alphabet::new(&self.output.alphabet)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.seeding.os_request_bytes, OS_REQUEST_BYTES);
        assert_eq!(config.output.format, OutputFormat::Hex);
    }

    #[test]
    fn test_parse_full_document() {
        let config: FileConfig = toml::from_str(
            r#"
            [seeding]
            os_request_bytes = 256

            [output]
            length = 16
            alphabet = "0123456789"
            format = "raw"
            "#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.seeding.os_request_bytes, 256);
        assert_eq!(config.output.length, 16);
        assert_eq!(config.output.format, OutputFormat::Raw);
        assert_eq!(config.alphabet().unwrap().len(), 10);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.length, 32);
    }

    #[test]
    fn test_small_entropy_request_rejected() {
        let mut config = FileConfig::default();
        config.seeding.os_request_bytes = 8;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RequestTooSmall)
        ));
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        let mut config = FileConfig::default();
        config.output.alphabet.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Alphabet(_))));
    }
}
