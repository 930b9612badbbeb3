//! Lookup table generation for reflected CRC32.
//!
//! A table is a pure function of its polynomial: entry `i` is `i` reduced
//! through eight rounds of shift-and-conditional-XOR. The table for
//! [`DEFAULT_POLYNOMIAL`] is built at compile time and lives in a `static`;
//! tables for any other polynomial are built on demand and shared by `Arc`.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// IEEE 802.3 CRC32 polynomial (reversed): 0xEDB88320
pub const DEFAULT_POLYNOMIAL: u32 = 0xEDB8_8320;

/// Number of entries in a lookup table, one per byte value.
pub const TABLE_LEN: usize = 256;

/// Precomputed table for [`DEFAULT_POLYNOMIAL`].
/// Generated at compile time using const evaluation.
pub static DEFAULT_TABLE: CrcTable = CrcTable::new(DEFAULT_POLYNOMIAL);

/// Generates the 256-entry lookup table for `polynomial`.
///
/// Total for every `u32`; usable in const context.
pub const fn build_table(polynomial: u32) -> [u32; TABLE_LEN] {
    let mut table = [0u32; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        let mut crc = i as u32;
        let mut j = 0;
        while j < 8 {
            if crc & 1 == 1 {
                crc = (crc >> 1) ^ polynomial;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// An immutable lookup table together with the polynomial it was built from.
#[derive(Clone, PartialEq, Eq)]
pub struct CrcTable {
    polynomial: u32,
    entries: [u32; TABLE_LEN],
}

impl CrcTable {
    /// Builds the table for `polynomial`.
    pub const fn new(polynomial: u32) -> Self {
        Self {
            polynomial,
            entries: build_table(polynomial),
        }
    }

    /// Returns a shareable handle to the table for `polynomial`.
    ///
    /// The default polynomial resolves to [`DEFAULT_TABLE`] without
    /// allocating. Any other polynomial builds a fresh table; callers that
    /// need it for many engines should keep the returned handle and clone it.
    pub fn shared(polynomial: u32) -> TableRef {
        if polynomial == DEFAULT_POLYNOMIAL {
            return TableRef::Static(&DEFAULT_TABLE);
        }

        tracing::debug!(
            polynomial = format_args!("{polynomial:#010x}"),
            "building crc table"
        );
        TableRef::Shared(Arc::new(Self::new(polynomial)))
    }

    pub const fn polynomial(&self) -> u32 {
        self.polynomial
    }

    pub const fn entries(&self) -> &[u32; TABLE_LEN] {
        &self.entries
    }

    /// Table entry for a byte value.
    #[inline]
    pub const fn lookup(&self, index: u8) -> u32 {
        self.entries[index as usize]
    }
}

impl fmt::Debug for CrcTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrcTable")
            .field("polynomial", &format_args!("{:#010x}", self.polynomial))
            .finish_non_exhaustive()
    }
}

/// Shared, read-only reference to a [`CrcTable`].
///
/// Cloning never copies the table itself.
#[derive(Clone)]
pub enum TableRef {
    /// A table with `'static` lifetime, such as [`DEFAULT_TABLE`].
    Static(&'static CrcTable),
    /// A table built at runtime and reference counted.
    Shared(Arc<CrcTable>),
}

impl Deref for TableRef {
    type Target = CrcTable;

    fn deref(&self) -> &CrcTable {
        match self {
            TableRef::Static(table) => *table,
            TableRef::Shared(table) => table.as_ref(),
        }
    }
}

impl fmt::Debug for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl From<&'static CrcTable> for TableRef {
    fn from(table: &'static CrcTable) -> Self {
        TableRef::Static(table)
    }
}

impl From<Arc<CrcTable>> for TableRef {
    fn from(table: Arc<CrcTable>) -> Self {
        TableRef::Shared(table)
    }
}

impl From<CrcTable> for TableRef {
    fn from(table: CrcTable) -> Self {
        TableRef::Shared(Arc::new(table))
    }
}
