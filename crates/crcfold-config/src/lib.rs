//! Configuration management for crcfold
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the binary)
//! 2. Environment variables (CRCFOLD_* prefix, `__` between keys)
//! 3. crcfold.local.toml (gitignored, local overrides)
//! 4. crcfold.toml (git-tracked, project config)
//! 5. ~/.config/crcfold/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)
//!
//! ```toml
//! [checksum]
//! polynomial = 0xEDB88320
//! seed = 0xFFFFFFFF
//!
//! [input]
//! chunk_size = 65536
//!
//! [output]
//! format = "text"
//! ```

use anyhow::Result;
use crcfold::{Crc32, DEFAULT_CHUNK_SIZE, DEFAULT_POLYNOMIAL, DEFAULT_SEED};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod paths;
mod value;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::{LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE, Paths};
pub use value::parse_u32;

/// Main crcfold configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrcfoldConfig {
    pub checksum: ChecksumConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Parameters of the CRC itself.
///
/// Both fields also accept `"0x..."` strings, the form they take when set
/// through `CRCFOLD_CHECKSUM__*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksumConfig {
    #[serde(deserialize_with = "value::deserialize_u32")]
    pub polynomial: u32,
    #[serde(deserialize_with = "value::deserialize_u32")]
    pub seed: u32,
}

impl Default for ChecksumConfig {
    fn default() -> Self {
        Self {
            polynomial: DEFAULT_POLYNOMIAL,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Bytes requested per read from a file or stdin.
    pub chunk_size: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `<hex>  <path>` per line
    #[default]
    Text,
    Json,
}

impl CrcfoldConfig {
    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Reject values no command can run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.chunk_size == 0 {
            return Err(ConfigError::ValidationError(
                "input.chunk_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Engine for the configured polynomial and seed
    pub fn engine(&self) -> Crc32 {
        Crc32::new(self.checksum.polynomial, self.checksum.seed)
    }

    /// Render as TOML, the same shape the loader reads
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CrcfoldConfig::default();
        assert_eq!(config.checksum.polynomial, 0xEDB8_8320);
        assert_eq!(config.checksum.seed, 0xFFFF_FFFF);
        assert_eq!(config.input.chunk_size, 64 * 1024);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let mut config = CrcfoldConfig::default();
        config.input.chunk_size = 0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("chunk_size"));
    }

    #[test]
    fn test_engine_uses_checksum_section() {
        let mut config = CrcfoldConfig::default();
        config.checksum.polynomial = 0x82F6_3B78;
        config.checksum.seed = 0;

        let engine = config.engine();
        assert_eq!(engine.polynomial(), 0x82F6_3B78);
        assert_eq!(engine.seed(), 0);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = CrcfoldConfig::default();
        config.output.format = OutputFormat::Json;

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("format = \"json\""));

        let parsed: CrcfoldConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let parsed: CrcfoldConfig = toml::from_str("[checksum]\nseed = 0x0\n").unwrap();
        assert_eq!(parsed.checksum.seed, 0);
        assert_eq!(parsed.checksum.polynomial, DEFAULT_POLYNOMIAL);
        assert_eq!(parsed.input.chunk_size, DEFAULT_CHUNK_SIZE);
    }
}
