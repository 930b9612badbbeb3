//! # crcfold: table-driven CRC32 with configurable polynomial and seed
//!
//! This crate computes CRC32 checksums for integrity checking of files,
//! archives and framed network data. CRC32 detects accidental corruption; it
//! is not collision resistant and must not be used where an adversary
//! controls the input.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`table`] | 256-entry lookup tables, compile-time default table |
//! | [`crc32`] | The [`Crc32`] engine and one-shot [`compute`] functions |
//! | [`checksum`] | The [`Checksum`] capability trait |
//! | [`digest`] | The [`Digest`] value and its hex rendering |
//! | [`io`] | Streaming readers and files through a checksum |
//!
//! ## Quick Start
//!
//! ```
//! use crcfold::{Crc32, Digest, compute, compute_with};
//!
//! // One-shot, IEEE defaults
//! assert_eq!(compute(b"123456789"), 0xCBF4_3926);
//!
//! // Incremental, chunks fed in order
//! let mut engine = Crc32::default();
//! engine.update(b"12345");
//! engine.update(b"6789");
//! assert_eq!(engine.finalize(), [0xCB, 0xF4, 0x39, 0x26]);
//! assert_eq!(engine.digest().to_string(), "cbf43926");
//!
//! // Any reflected polynomial and seed
//! let castagnoli = compute_with(0x82F6_3B78, 0xFFFF_FFFF, b"123456789");
//! assert_eq!(Digest::from(castagnoli).to_string(), "e3069283");
//! ```

pub mod checksum;
pub mod crc32;
pub mod digest;
pub mod error;
pub mod io;
pub mod table;

// Re-export primary types at crate root for convenience
pub use checksum::Checksum;
pub use crc32::{Crc32, DEFAULT_SEED, compute, compute_with, compute_with_seed};
pub use digest::{DIGEST_SIZE, Digest};
pub use error::ChecksumError;
pub use io::{DEFAULT_CHUNK_SIZE, Digested, digest_file, digest_reader};
pub use table::{CrcTable, DEFAULT_POLYNOMIAL, DEFAULT_TABLE, TableRef, build_table};

#[cfg(test)]
mod tests;
