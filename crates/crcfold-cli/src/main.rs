//! crcfold command line.
//!
//! Table-driven CRC32 checksums with a configurable polynomial and seed.
//!
//! # Quick Start
//!
//! ```bash
//! # Checksum files (stdin when none are given)
//! crcfold sum archive.tar notes.txt
//!
//! # Check a file against a known value
//! crcfold verify cbf43926 check.txt
//!
//! # Use a different reflected polynomial
//! crcfold sum --polynomial 0x82F63B78 archive.tar
//! ```

mod args;
mod commands;
mod style;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::args::{CrcArgs, FormatArg, ShowFormat};

/// crcfold - CRC32 checksums with a configurable polynomial and seed.
#[derive(Parser)]
#[command(name = "crcfold")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory searched for crcfold.toml and crcfold.local.toml.
    #[arg(long, global = true, default_value = ".")]
    project: PathBuf,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Print the CRC32 of each file (stdin when none are given).
    Sum {
        /// Files to checksum; `-` reads stdin.
        files: Vec<PathBuf>,

        #[command(flatten)]
        crc: CrcArgs,

        /// Bytes per read.
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Output format.
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Check a file against an expected CRC32.
    Verify {
        /// Expected checksum as 8 hex digits (optionally 0x-prefixed).
        expected: String,

        /// File to check; `-` reads stdin.
        file: PathBuf,

        #[command(flatten)]
        crc: CrcArgs,
    },

    /// Print the 256-entry lookup table for a polynomial.
    Table {
        /// Reflected polynomial (hex with 0x prefix, or decimal).
        #[arg(long, value_parser = args::parse_u32)]
        polynomial: Option<u32>,
    },

    /// Show the effective configuration.
    Config {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "text")]
        format: ShowFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    style::set_no_color(
        cli.no_color || std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal(),
    );

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Sum {
            files,
            crc,
            chunk_size,
            format,
        } => {
            let mut config = commands::load_config(&cli.project, &crc)?;
            if let Some(chunk_size) = chunk_size {
                config.input.chunk_size = chunk_size;
            }
            if let Some(format) = format {
                config.output.format = format.into();
            }
            config.validate()?;
            commands::sum::run(&config, &files)
        }
        Commands::Verify {
            expected,
            file,
            crc,
        } => {
            let config = commands::load_config(&cli.project, &crc)?;
            commands::verify::run(&config, &expected, &file)
        }
        Commands::Table { polynomial } => {
            let crc = CrcArgs {
                polynomial,
                seed: None,
            };
            let config = commands::load_config(&cli.project, &crc)?;
            commands::table::run(config.checksum.polynomial);
            Ok(())
        }
        Commands::Config { format } => commands::config::show(&cli.project, format),
    }
}
