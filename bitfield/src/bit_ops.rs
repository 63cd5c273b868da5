use crate::index::BitPos;

/// Population count for every byte value.
pub(crate) const COUNT_TABLE: [u8; 256] = build_count_table();

const fn build_count_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 1;
    while i < 256 {
        // popcount(i) = popcount(i / 2) + lowest bit
        table[i] = table[i >> 1] + (i & 1) as u8;
        i += 1;
    }
    table
}

#[inline]
pub(crate) fn get_bit(slice: &[u8], index: usize) -> bool {
    let pos = BitPos::from(index);
    slice[pos.byte] & pos.mask != 0
}

#[inline]
pub(crate) fn set_bit(slice: &mut [u8], index: usize) {
    let pos = BitPos::from(index);
    slice[pos.byte] |= pos.mask;
}

#[inline]
pub(crate) fn clear_bit(slice: &mut [u8], index: usize) {
    let pos = BitPos::from(index);
    slice[pos.byte] &= !pos.mask;
}

pub(crate) fn count_ones(slice: &[u8]) -> usize {
    slice.iter().map(|&b| COUNT_TABLE[b as usize] as usize).sum()
}

/// Index of the first set bit in `[start, len)`.
#[inline]
pub(crate) fn first_set(slice: &[u8], start: usize, len: usize) -> Option<usize> {
    scan(slice, start, len, |b| b)
}

/// Index of the first clear bit in `[start, len)`.
#[inline]
pub(crate) fn first_clear(slice: &[u8], start: usize, len: usize) -> Option<usize> {
    scan(slice, start, len, |b| !b)
}

/// Finds the first bit at or after `start` that is set in `view(byte)`.
///
/// Whole bytes with no candidate are skipped; a hit past `len` (padding)
/// counts as not found.
fn scan(slice: &[u8], start: usize, len: usize, view: impl Fn(u8) -> u8) -> Option<usize> {
    if start >= len {
        return None;
    }
    let mut byte = start / 8;
    let mut bits = view(slice[byte]) & (0xFF >> (start % 8));
    if bits == 0 {
        let rest = &slice[byte + 1..];
        let skipped = rest.iter().position(|&b| view(b) != 0)?;
        byte += 1 + skipped;
        bits = view(rest[skipped]);
    }
    let index = byte * 8 + bits.leading_zeros() as usize;
    (index < len).then_some(index)
}
