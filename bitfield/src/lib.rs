//! # bitfield
//!
//! A `no_std` compatible fixed-length bitfield, packed most-significant-bit
//! first. Typical use is tracking which of N pieces of a file are present.
//!
//! ```rust
//! use bitfield::Bitfield;
//!
//! let mut have = Bitfield::new(20);
//! have.set(0).unwrap();
//! have.set(19).unwrap();
//!
//! assert!(have.test(19).unwrap());
//! assert_eq!(have.count(), 2);
//! assert_eq!(have.first_clear(0), Some(1));
//! assert_eq!(have.to_hex(), "800010");
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` for [`BitfieldError`]
//! - `mmap`: bitfields over memory-mapped files
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::BitfieldError;

mod bit_ops;
mod index;

pub mod bitfield;
pub mod iter;

#[cfg(feature = "mmap")]
pub mod mmap;

pub use bitfield::Bitfield;
pub use index::{byte_len, BitPos};
pub use iter::{Iter, Ones};
