//! Mapping from bit indices to byte positions.
//!
//! Bit 0 is the most significant bit of byte 0. Within byte `k`, bit
//! `k * 8 + m` lives at position `7 - m` counting from the least significant
//! end.

/// Location of a single bit inside a byte buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitPos {
    pub byte: usize,
    pub mask: u8,
}

impl From<usize> for BitPos {
    #[inline]
    fn from(index: usize) -> Self {
        BitPos {
            byte: index / 8,
            mask: 0x80 >> (index % 8),
        }
    }
}

/// Number of bytes needed to store `len` bits.
#[inline]
pub const fn byte_len(len: usize) -> usize {
    len.div_ceil(8)
}

/// Mask of the bits in the final byte that belong to a bitfield of `len` bits.
///
/// Returns `0xFF` when `len` is a multiple of 8 (no padding).
#[inline]
pub const fn last_byte_mask(len: usize) -> u8 {
    match len % 8 {
        0 => 0xFF,
        used => !(0xFF >> used),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msb_first_positions() {
        assert_eq!(BitPos::from(0), BitPos { byte: 0, mask: 0x80 });
        assert_eq!(BitPos::from(7), BitPos { byte: 0, mask: 0x01 });
        assert_eq!(BitPos::from(8), BitPos { byte: 1, mask: 0x80 });
        assert_eq!(BitPos::from(19), BitPos { byte: 2, mask: 0x10 });
    }

    #[test]
    fn every_index_maps_to_one_bit() {
        for i in 0..64 {
            let pos = BitPos::from(i);
            assert_eq!(pos.byte, i / 8);
            assert_eq!(pos.mask.count_ones(), 1);
            assert_eq!(pos.mask, 1 << (7 - i % 8));
        }
    }

    #[test]
    fn sizes_and_masks() {
        assert_eq!(byte_len(0), 0);
        assert_eq!(byte_len(1), 1);
        assert_eq!(byte_len(8), 1);
        assert_eq!(byte_len(9), 2);
        assert_eq!(byte_len(20), 3);

        assert_eq!(last_byte_mask(8), 0xFF);
        assert_eq!(last_byte_mask(1), 0b1000_0000);
        assert_eq!(last_byte_mask(20), 0b1111_0000);
        assert_eq!(last_byte_mask(23), 0b1111_1110);
    }
}
