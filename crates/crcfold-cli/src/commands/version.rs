//! Version command implementation.

use crcfold::{DEFAULT_POLYNOMIAL, DEFAULT_SEED};

/// Version information for the CLI.
const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() {
    println!("crcfold {VERSION}");
    println!();
    println!("Table-driven CRC32 with configurable polynomial and seed.");
    println!();
    println!("Defaults:");
    println!("  Polynomial:   {DEFAULT_POLYNOMIAL:#010x}");
    println!("  Seed:         {DEFAULT_SEED:#010x}");
    println!();
    println!("Build info:");
    println!("  Target:       {}", std::env::consts::ARCH);
    println!("  OS:           {}", std::env::consts::OS);
}
