//! Verify command - compares a file against an expected checksum.

use std::path::Path;

use anyhow::{Context, Result};
use crcfold::Digest;
use crcfold_config::CrcfoldConfig;

use super::sum::checksum_source;
use crate::style::{print_error, print_success};

pub fn run(config: &CrcfoldConfig, expected: &str, file: &Path) -> Result<()> {
    let expected: Digest = expected
        .parse()
        .context("Expected checksum is not a CRC32")?;

    let mut engine = config.engine();
    let actual = Digest::from(checksum_source(&mut engine, file, config.input.chunk_size)?.output);

    if actual == expected {
        tracing::info!(path = %file.display(), %actual, "checksum verified");
        print_success(&format!("OK  {}", file.display()));
        Ok(())
    } else {
        tracing::warn!(path = %file.display(), %expected, %actual, "checksum mismatch");
        print_error(&format!("FAILED  {}", file.display()));
        anyhow::bail!(
            "checksum mismatch for {}: expected {expected}, got {actual}",
            file.display()
        )
    }
}
