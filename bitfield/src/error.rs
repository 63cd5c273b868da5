#[cfg(feature = "std")]
use thiserror::Error;

/// Errors produced by [`Bitfield`](crate::Bitfield) operations.
///
/// Both `InvalidLength` and `IndexOutOfBounds` report caller bugs: the
/// operation is aborted and nothing is modified.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum BitfieldError {
    #[cfg_attr(
        feature = "std",
        error("buffer of {found} bytes is too small, {expected} bytes required")
    )]
    InvalidLength { expected: usize, found: usize },

    #[cfg_attr(feature = "std", error("Index {0} is out of bounds for length {1}"))]
    IndexOutOfBounds(usize, usize),

    /// I/O failure while mapping or flushing a backing file.
    #[cfg(feature = "std")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitfieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitfieldError::InvalidLength { expected, found } => write!(
                f,
                "buffer of {} bytes is too small, {} bytes required",
                found, expected
            ),
            BitfieldError::IndexOutOfBounds(i, l) => {
                write!(f, "Index {} is out of bounds for length {}", i, l)
            }
        }
    }
}
