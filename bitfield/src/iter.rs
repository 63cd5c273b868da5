//! Iterators over the bits of a [`Bitfield`](crate::Bitfield).
//!
//! # Examples
//!
//! ```rust
//! use bitfield::Bitfield;
//!
//! let mut b = Bitfield::new(10);
//! b.set(1).unwrap();
//! b.set(9).unwrap();
//!
//! let bits: Vec<bool> = b.iter().collect();
//! assert_eq!(bits.len(), 10);
//! assert!(bits[1] && bits[9]);
//!
//! let ones: Vec<usize> = b.ones().collect();
//! assert_eq!(ones, vec![1, 9]);
//! ```

use core::iter::FusedIterator;

use crate::bit_ops;

/// Every bit of a bitfield, in index order.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    bytes: &'a [u8],
    index: usize,
    len: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(bytes: &'a [u8], len: usize) -> Self {
        Self {
            bytes,
            index: 0,
            len,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            None
        } else {
            let bit = bit_ops::get_bit(self.bytes, self.index);
            self.index += 1;
            Some(bit)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Indices of the set bits of a bitfield, ascending.
#[derive(Clone, Debug)]
pub struct Ones<'a> {
    bytes: &'a [u8],
    next: usize,
    len: usize,
}

impl<'a> Ones<'a> {
    pub(crate) fn new(bytes: &'a [u8], len: usize) -> Self {
        Self {
            bytes,
            next: 0,
            len,
        }
    }
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        match bit_ops::first_set(self.bytes, self.next, self.len) {
            Some(index) => {
                self.next = index + 1;
                Some(index)
            }
            None => {
                self.next = self.len;
                None
            }
        }
    }
}

impl FusedIterator for Ones<'_> {}

#[cfg(test)]
mod tests {
    use crate::Bitfield;
    #[cfg(not(feature = "std"))]
    use alloc::{vec, vec::Vec};

    #[test]
    fn iter_yields_every_bit() {
        let mut b = Bitfield::new(11);
        b.set(0).unwrap();
        b.set(10).unwrap();

        let mut it = b.iter();
        assert_eq!(it.len(), 11);
        assert_eq!(it.next(), Some(true));
        assert_eq!(it.len(), 10);

        let rest: Vec<bool> = it.collect();
        assert_eq!(rest.iter().filter(|&&x| x).count(), 1);
        assert_eq!(rest.last(), Some(&true));
    }

    #[test]
    fn into_iter_for_reference() {
        let mut b = Bitfield::new(3);
        b.set(1).unwrap();
        let mut seen = vec![];
        for bit in &b {
            seen.push(bit);
        }
        assert_eq!(seen, vec![false, true, false]);
    }

    #[test]
    fn ones_skips_clear_runs() {
        let mut b = Bitfield::new(100);
        for i in [3, 4, 63, 64, 99] {
            b.set(i).unwrap();
        }
        let ones: Vec<usize> = b.ones().collect();
        assert_eq!(ones, vec![3, 4, 63, 64, 99]);
        assert_eq!(ones.len(), b.count());
    }

    #[test]
    fn ones_on_empty() {
        let b = Bitfield::new(0);
        assert_eq!(b.ones().next(), None);
        assert_eq!(b.iter().next(), None);
    }
}
