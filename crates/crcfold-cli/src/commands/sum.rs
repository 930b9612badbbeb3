//! Sum command - checksums files or stdin.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crcfold::{Crc32, Digest, Digested, digest_file, digest_reader};
use crcfold_config::{CrcfoldConfig, OutputFormat};
use serde::Serialize;

use crate::style::print_error;

/// One line of `--format json` output.
#[derive(Debug, Serialize)]
struct SumEntry {
    path: String,
    crc32: Digest,
    bytes: u64,
}

pub fn run(config: &CrcfoldConfig, files: &[PathBuf]) -> Result<()> {
    let stdin_only = [PathBuf::from("-")];
    let sources = if files.is_empty() { &stdin_only[..] } else { files };

    // Clones share the prototype's table, so a custom polynomial is built once.
    let prototype = config.engine();
    let mut entries = Vec::with_capacity(sources.len());
    let mut failures = 0usize;

    for path in sources {
        let mut engine = prototype.clone();
        match checksum_source(&mut engine, path, config.input.chunk_size) {
            Ok(digested) => {
                let crc32 = Digest::from(digested.output);
                tracing::debug!(path = %path.display(), %crc32, bytes = digested.bytes, "checksummed");

                match config.output.format {
                    OutputFormat::Text => println!("{crc32}  {}", path.display()),
                    OutputFormat::Json => entries.push(SumEntry {
                        path: path.display().to_string(),
                        crc32,
                        bytes: digested.bytes,
                    }),
                }
            }
            Err(e) => {
                failures += 1;
                print_error(&format!("{e:#}"));
            }
        }
    }

    if config.output.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} input(s) could not be read", sources.len());
    }
    Ok(())
}

/// Streams `path` (or stdin for `-`) through `engine`.
pub fn checksum_source(
    engine: &mut Crc32,
    path: &Path,
    chunk_size: usize,
) -> Result<Digested<[u8; 4]>> {
    if path == Path::new("-") {
        digest_reader(engine, io::stdin().lock(), chunk_size).context("Failed to read stdin")
    } else {
        digest_file(engine, path, chunk_size)
            .with_context(|| format!("Failed to checksum {}", path.display()))
    }
}
