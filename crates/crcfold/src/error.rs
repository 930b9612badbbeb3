//! Error types for the checksum collaborators.
//!
//! The CRC core itself cannot fail; these errors come from byte sources and
//! from parsing digests supplied by a caller.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ChecksumError {
    /// The byte source failed mid-stream.
    #[error("I/O error while reading checksum input: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A textual digest could not be parsed.
    #[error("invalid digest {input:?}: {reason}")]
    InvalidDigest { input: String, reason: &'static str },

    /// Streaming was requested with a zero-length read buffer.
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,
}
