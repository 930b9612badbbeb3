//! Table-driven CRC32 engine.
//!
//! Provides one-shot functions over an in-memory buffer and an incremental
//! [`Crc32`] engine for streaming or chunked data. The polynomial and seed are
//! both configurable; the defaults give the IEEE 802.3 checksum used by zlib,
//! PNG and gzip.
//!
//! ## Usage
//!
//! ```
//! use crcfold::{Crc32, compute};
//!
//! // One-shot calculation
//! let checksum = compute(b"hello world");
//!
//! // Incremental calculation for streaming data
//! let mut hasher = Crc32::default();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize(), checksum.to_be_bytes());
//! ```

use crate::checksum::Checksum;
use crate::digest::{DIGEST_SIZE, Digest};
use crate::table::{CrcTable, DEFAULT_TABLE, TableRef};

/// Conventional initial accumulator value (all bits set).
pub const DEFAULT_SEED: u32 = 0xFFFF_FFFF;

/// Folds `data` into `crc` one byte at a time.
///
/// Returns the accumulator before the final complement.
#[inline]
pub(crate) fn fold(table: &CrcTable, mut crc: u32, data: &[u8]) -> u32 {
    for &byte in data {
        let index = ((crc ^ u32::from(byte)) & 0xFF) as u8;
        crc = (crc >> 8) ^ table.lookup(index);
    }
    crc
}

/// Computes the CRC32 of `buffer` with the default polynomial and seed.
///
/// # Examples
///
/// ```
/// assert_eq!(crcfold::compute(b"123456789"), 0xCBF4_3926);
/// ```
pub fn compute(buffer: &[u8]) -> u32 {
    !fold(&DEFAULT_TABLE, DEFAULT_SEED, buffer)
}

/// Computes the CRC32 of `buffer` with the default polynomial and `seed`.
pub fn compute_with_seed(seed: u32, buffer: &[u8]) -> u32 {
    !fold(&DEFAULT_TABLE, seed, buffer)
}

/// Computes the CRC32 of `buffer` with an arbitrary polynomial and seed.
pub fn compute_with(polynomial: u32, seed: u32, buffer: &[u8]) -> u32 {
    !fold(&CrcTable::shared(polynomial), seed, buffer)
}

/// Incremental CRC32 engine.
///
/// Holds a shared table, the seed it was built with, and the running
/// accumulator. `finalize` only reads the accumulator, so it can be called
/// any number of times; start a new computation with [`Crc32::reset`].
///
/// An engine is not internally synchronized. Give each thread its own
/// (cloning shares the table, not the state).
#[derive(Debug, Clone)]
pub struct Crc32 {
    table: TableRef,
    seed: u32,
    state: u32,
}

impl Crc32 {
    /// Creates an engine for `polynomial`, starting from `seed`.
    #[must_use]
    pub fn new(polynomial: u32, seed: u32) -> Self {
        Self::with_table(CrcTable::shared(polynomial), seed)
    }

    /// IEEE 802.3 engine: default polynomial, default seed.
    #[must_use]
    pub fn ieee() -> Self {
        Self::with_table(&DEFAULT_TABLE, DEFAULT_SEED)
    }

    /// Default polynomial with a caller-chosen seed.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self::with_table(&DEFAULT_TABLE, seed)
    }

    /// Creates an engine over an already built table.
    #[must_use]
    pub fn with_table(table: impl Into<TableRef>, seed: u32) -> Self {
        Self {
            table: table.into(),
            seed,
            state: seed,
        }
    }

    /// Restarts the computation from the seed.
    pub fn reset(&mut self) {
        self.state = self.seed;
    }

    /// Folds `data` into the running accumulator.
    pub fn update(&mut self, data: &[u8]) {
        self.state = fold(&self.table, self.state, data);
    }

    /// Folds `length` bytes of `buffer` beginning at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is past the end of `buffer`, or if fewer than
    /// `length` bytes follow it.
    pub fn update_range(&mut self, buffer: &[u8], start: usize, length: usize) {
        self.update(&buffer[start..][..length]);
    }

    /// Complemented accumulator, most significant byte first.
    #[must_use]
    pub fn finalize(&self) -> [u8; DIGEST_SIZE] {
        self.checksum().to_be_bytes()
    }

    /// Complemented accumulator as an integer.
    pub fn checksum(&self) -> u32 {
        !self.state
    }

    pub fn digest(&self) -> Digest {
        Digest::from_u32(self.checksum())
    }

    /// Raw accumulator, before the final complement.
    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn polynomial(&self) -> u32 {
        self.table.polynomial()
    }

    pub fn table(&self) -> &CrcTable {
        &self.table
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::ieee()
    }
}

impl Checksum for Crc32 {
    type Output = [u8; DIGEST_SIZE];

    fn reset(&mut self) {
        Crc32::reset(self);
    }

    fn update(&mut self, data: &[u8]) {
        Crc32::update(self, data);
    }

    fn finalize(&self) -> Self::Output {
        Crc32::finalize(self)
    }
}
