//! Fixed-length bitfield over a byte buffer.
//!
//! # Examples
//!
//! ```rust
//! use bitfield::Bitfield;
//!
//! let mut pieces = Bitfield::new(20);
//! for i in [0, 7, 8, 19] {
//!     pieces.set(i).unwrap();
//! }
//!
//! assert_eq!(pieces.to_hex(), "818010");
//! assert_eq!(pieces.count(), 4);
//! assert_eq!(pieces.first_set(1), Some(7));
//! assert_eq!(pieces.first_clear(0), Some(1));
//! ```
//!
//! ## Wrapping received bytes
//!
//! ```rust
//! use bitfield::Bitfield;
//!
//! let mut wire = [0xFFu8, 0xFF];
//! {
//!     let have = Bitfield::from_bytes(&mut wire[..], 12).unwrap();
//!     assert!(have.all());
//! }
//! // The import cleared the padding bits in place.
//! assert_eq!(wire, [0xFF, 0xF0]);
//! ```

use core::fmt;

use tracing::{debug, trace};

use crate::bit_ops;
use crate::index::{byte_len, last_byte_mask};
use crate::iter::{Iter, Ones};
use crate::BitfieldError;

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec, vec::Vec};

type Result<T> = core::result::Result<T, BitfieldError>;

/// A fixed number of bits packed most-significant-bit first into bytes.
///
/// `B` is the backing storage. [`Bitfield::new`] owns a `Vec<u8>`;
/// [`Bitfield::from_bytes`] wraps caller storage such as `&mut [u8]` without
/// copying, so writes through either side are visible to the other.
///
/// Only the first `ceil(len / 8)` bytes of the storage belong to the
/// bitfield. Bits of the last byte beyond `len` are kept at zero.
///
/// A `Bitfield` has no internal synchronization; share it across threads
/// behind a lock.
#[derive(Clone)]
pub struct Bitfield<B = Vec<u8>> {
    buf: B,
    len: usize,
}

impl Bitfield<Vec<u8>> {
    /// Creates a bitfield of `len` bits, all clear.
    ///
    /// ```
    /// use bitfield::Bitfield;
    ///
    /// let b = Bitfield::new(10);
    /// assert_eq!(b.len(), 10);
    /// assert_eq!(b.as_bytes(), &[0, 0]);
    /// ```
    pub fn new(len: usize) -> Self {
        debug!(len, "new bitfield");
        Self {
            buf: vec![0u8; byte_len(len)],
            len,
        }
    }

    /// Takes ownership of `bytes`, truncating it to `ceil(len / 8)` bytes and
    /// clearing the padding bits.
    pub fn from_vec(mut bytes: Vec<u8>, len: usize) -> Result<Self> {
        check_size(bytes.len(), len)?;
        bytes.truncate(byte_len(len));
        Self::from_bytes(bytes, len)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Bitfield<B> {
    /// Wraps `buf` as a bitfield of `len` bits without copying it.
    ///
    /// The padding bits of the last used byte are cleared in `buf` itself.
    /// Bytes past `ceil(len / 8)` are never read or written.
    ///
    /// # Errors
    ///
    /// [`BitfieldError::InvalidLength`] if `buf` holds fewer than
    /// `ceil(len / 8)` bytes.
    ///
    /// ```
    /// use bitfield::{Bitfield, BitfieldError};
    ///
    /// let mut short = [0u8; 2];
    /// assert!(matches!(
    ///     Bitfield::from_bytes(&mut short[..], 17),
    ///     Err(BitfieldError::InvalidLength { expected: 3, found: 2 })
    /// ));
    /// ```
    pub fn from_bytes(mut buf: B, len: usize) -> Result<Self> {
        check_size(buf.as_ref().len(), len)?;
        let n_bytes = byte_len(len);
        if n_bytes > 0 {
            let last = &mut buf.as_mut()[n_bytes - 1];
            let masked = *last & last_byte_mask(len);
            if masked != *last {
                trace!(len, byte = *last, "clearing padding bits");
                *last = masked;
            }
        }
        debug!(len, n_bytes, "imported bitfield");
        Ok(Self { buf, len })
    }
}

fn check_size(available: usize, len: usize) -> Result<()> {
    let expected = byte_len(len);
    if available < expected {
        return Err(BitfieldError::InvalidLength {
            expected,
            found: available,
        });
    }
    Ok(())
}

impl<B: AsRef<[u8]>> Bitfield<B> {
    /// Number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live bytes of the bitfield, including the zeroed padding bits.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf.as_ref()[..byte_len(self.len)]
    }

    /// The backing storage, including any bytes past the live range.
    pub fn storage(&self) -> &B {
        &self.buf
    }

    /// Returns the backing storage.
    pub fn into_inner(self) -> B {
        self.buf
    }

    /// Copies the live bytes into an owned bitfield.
    pub fn to_owned_bitfield(&self) -> Bitfield<Vec<u8>> {
        Bitfield {
            buf: self.as_bytes().to_vec(),
            len: self.len,
        }
    }

    /// Lowercase hex of [`as_bytes`](Self::as_bytes).
    ///
    /// ```
    /// use bitfield::Bitfield;
    ///
    /// let mut b = Bitfield::new(12);
    /// b.set(0).unwrap();
    /// b.set(11).unwrap();
    /// assert_eq!(b.to_hex(), "8010");
    /// ```
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(self.as_bytes().len() * 2);
        for b in self.as_bytes() {
            out.push(HEX_DIGITS[(b >> 4) as usize] as char);
            out.push(HEX_DIGITS[(b & 0x0F) as usize] as char);
        }
        out
    }

    /// Returns whether bit `index` is set.
    ///
    /// # Errors
    ///
    /// [`BitfieldError::IndexOutOfBounds`] if `index >= len()`.
    #[inline]
    pub fn test(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(bit_ops::get_bit(self.as_bytes(), index))
    }

    /// Number of set bits.
    pub fn count(&self) -> usize {
        bit_ops::count_ones(self.as_bytes())
    }

    /// `true` if every bit is set. Vacuously true for an empty bitfield.
    pub fn all(&self) -> bool {
        self.count() == self.len
    }

    /// `true` if no bit is set.
    pub fn none(&self) -> bool {
        self.count() == 0
    }

    /// Index of the first set bit at or after `start`.
    pub fn first_set(&self, start: usize) -> Option<usize> {
        bit_ops::first_set(self.as_bytes(), start, self.len)
    }

    /// Index of the first clear bit at or after `start`.
    pub fn first_clear(&self, start: usize) -> Option<usize> {
        bit_ops::first_clear(self.as_bytes(), start, self.len)
    }

    /// Iterates over every bit as a `bool`.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.as_bytes(), self.len)
    }

    /// Iterates over the indices of set bits in ascending order.
    pub fn ones(&self) -> Ones<'_> {
        Ones::new(self.as_bytes(), self.len)
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(BitfieldError::IndexOutOfBounds(index, self.len));
        }
        Ok(())
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Bitfield<B> {
    /// Mutable view of the live bytes.
    ///
    /// Writes are reflected in the bitfield. Callers must leave the padding
    /// bits of the last byte at zero.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let n_bytes = byte_len(self.len);
        &mut self.buf.as_mut()[..n_bytes]
    }

    /// Sets bit `index`.
    ///
    /// # Errors
    ///
    /// [`BitfieldError::IndexOutOfBounds`] if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        bit_ops::set_bit(self.as_bytes_mut(), index);
        Ok(())
    }

    /// Clears bit `index`.
    ///
    /// # Errors
    ///
    /// [`BitfieldError::IndexOutOfBounds`] if `index >= len()`.
    #[inline]
    pub fn clear(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        bit_ops::clear_bit(self.as_bytes_mut(), index);
        Ok(())
    }

    /// Sets or clears bit `index` according to `value`.
    pub fn set_to(&mut self, index: usize, value: bool) -> Result<()> {
        if value {
            self.set(index)
        } else {
            self.clear(index)
        }
    }

    /// Clears every bit.
    pub fn clear_all(&mut self) {
        self.as_bytes_mut().fill(0);
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

impl<B: AsRef<[u8]>> fmt::LowerHex for Bitfield<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.as_bytes() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl<B: AsRef<[u8]>> fmt::Debug for Bitfield<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitfield")
            .field("len", &self.len)
            .field("bytes", &format_args!("{:x}", self))
            .finish()
    }
}

impl<A: AsRef<[u8]>, B: AsRef<[u8]>> PartialEq<Bitfield<B>> for Bitfield<A> {
    fn eq(&self, other: &Bitfield<B>) -> bool {
        self.len == other.len && self.as_bytes() == other.as_bytes()
    }
}

impl<B: AsRef<[u8]>> Eq for Bitfield<B> {}

impl Default for Bitfield<Vec<u8>> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<'a, B: AsRef<[u8]>> IntoIterator for &'a Bitfield<B> {
    type Item = bool;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
