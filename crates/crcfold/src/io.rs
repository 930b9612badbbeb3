//! Byte-source glue: feeding readers and files into a [`Checksum`].
//!
//! The engine never performs I/O. These helpers own the read loop so the
//! caller only chooses a source and a chunk size; read failures surface as
//! [`ChecksumError`] and never touch the engine's contract.

use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;

use crate::checksum::Checksum;
use crate::crc32::Crc32;
use crate::error::ChecksumError;

/// Default read size for streaming sources (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Result of streaming a source through a checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digested<T> {
    pub output: T,
    /// Number of bytes read from the source.
    pub bytes: u64,
}

/// Streams `reader` to exhaustion through `checksum` and finalizes it.
///
/// The checksum is not reset first, so a partially fed engine continues
/// where it left off.
pub fn digest_reader<C, R>(
    checksum: &mut C,
    mut reader: R,
    chunk_size: usize,
) -> Result<Digested<C::Output>, ChecksumError>
where
    C: Checksum + ?Sized,
    R: Read,
{
    if chunk_size == 0 {
        return Err(ChecksumError::InvalidChunkSize);
    }

    let mut buf = vec![0u8; chunk_size];
    let mut bytes: u64 = 0;
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                checksum.update(&buf[..n]);
                bytes += n as u64;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }

    tracing::debug!(bytes, chunk_size, "checksum source exhausted");

    Ok(Digested {
        output: checksum.finalize(),
        bytes,
    })
}

/// Opens `path` and streams it through `checksum`.
pub fn digest_file<C>(
    checksum: &mut C,
    path: impl AsRef<Path>,
    chunk_size: usize,
) -> Result<Digested<C::Output>, ChecksumError>
where
    C: Checksum + ?Sized,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ChecksumError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "streaming file");
    digest_reader(checksum, file, chunk_size)
}

/// Lets `io::copy` and friends feed an engine directly.
impl Write for Crc32 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
