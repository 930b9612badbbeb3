//! CLI command implementations.

pub mod config;
pub mod sum;
pub mod table;
pub mod verify;
pub mod version;

use std::path::Path;

use anyhow::{Context, Result};
use crcfold_config::{ConfigLoader, CrcfoldConfig};

use crate::args::CrcArgs;

/// Loads the layered config for `project` and applies flag overrides.
pub fn load_config(project: &Path, crc: &CrcArgs) -> Result<CrcfoldConfig> {
    let mut config = ConfigLoader::new()
        .with_project_dir(project)
        .load()
        .context("Failed to load configuration")?;

    if let Some(polynomial) = crc.polynomial {
        config.checksum.polynomial = polynomial;
    }
    if let Some(seed) = crc.seed {
        config.checksum.seed = seed;
    }

    tracing::debug!(
        polynomial = format_args!("{:#010x}", config.checksum.polynomial),
        seed = format_args!("{:#010x}", config.checksum.seed),
        chunk_size = config.input.chunk_size,
        "resolved configuration"
    );

    Ok(config)
}
