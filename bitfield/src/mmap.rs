//! Bitfields backed by memory-mapped files.
//!
//! The mapping is wrapped the same way [`Bitfield::from_bytes`] wraps a
//! slice: no copy is made, and the padding bits of the last used byte are
//! cleared in the mapping itself.
//!
//! The file must not be resized or written by anyone else while it is
//! mapped.
//!
//! ```no_run
//! use bitfield::Bitfield;
//!
//! let mut have = Bitfield::open_mmap("pieces.bin", 1024).unwrap();
//! have.set(17).unwrap();
//! have.flush().unwrap();
//! ```

use std::fs::File;
use std::path::Path;

use memmap2::{MmapMut, MmapOptions};
use tracing::debug;

use crate::{Bitfield, BitfieldError};

type Result<T> = core::result::Result<T, BitfieldError>;

impl Bitfield<MmapMut> {
    /// Maps `path` read-write. Changes are written back to the file.
    ///
    /// # Errors
    ///
    /// - [`BitfieldError::Io`] if the file can't be opened or mapped
    /// - [`BitfieldError::InvalidLength`] if the file is shorter than
    ///   `ceil(len / 8)` bytes
    pub fn open_mmap<P: AsRef<Path>>(path: P, len: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::options().read(true).write(true).open(path)?;
        let mmap = unsafe { MmapMut::map_mut(&file)? };
        debug!(path = %path.display(), len, "mapped bitfield read-write");
        Self::from_bytes(mmap, len)
    }

    /// Maps `path` copy-on-write. The file is opened read-only and is never
    /// modified, not even by the padding cleanup.
    ///
    /// # Errors
    ///
    /// Same as [`open_mmap`](Self::open_mmap).
    pub fn open_mmap_copy<P: AsRef<Path>>(path: P, len: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mmap = unsafe { MmapOptions::new().map_copy(&file)? };
        debug!(path = %path.display(), len, "mapped bitfield copy-on-write");
        Self::from_bytes(mmap, len)
    }

    /// Flushes the live bytes to the backing file.
    pub fn flush(&self) -> Result<()> {
        let n_bytes = self.as_bytes().len();
        if n_bytes > 0 {
            self.storage().flush_range(0, n_bytes)?;
        }
        debug!(n_bytes, "flushed bitfield");
        Ok(())
    }
}
