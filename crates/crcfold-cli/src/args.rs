//! Shared argument types and parsers.

use clap::{Args, ValueEnum};
pub use crcfold_config::parse_u32;
use crcfold_config::OutputFormat;

/// Overrides for the CRC parameters loaded from config.
#[derive(Debug, Clone, Default, Args)]
pub struct CrcArgs {
    /// Reflected polynomial (hex with 0x prefix, or decimal).
    #[arg(long, value_parser = parse_u32)]
    pub polynomial: Option<u32>,

    /// Initial accumulator value (hex with 0x prefix, or decimal).
    #[arg(long, value_parser = parse_u32)]
    pub seed: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    Text,
    Json,
    Toml,
}
