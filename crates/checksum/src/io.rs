//! I/O adapters for checksum computation.
//!
//! This module re-exports [`ChecksumReader`] and [`ChecksumWriter`] which wrap
//! [`std::io::Read`] and [`std::io::Write`] implementations to compute
//! checksums transparently during I/O, hashing exactly the bytes transferred.
//!
//! # Example
//!
//! ```rust
//! use std::io::{Cursor, Read};
//!
//! use crckit::{Checksum as _, Crc32C};
//!
//! let mut reader = Crc32C::reader(Cursor::new(b"hello world".to_vec()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(contents, b"hello world");
//! assert_eq!(reader.crc(), Crc32C::checksum(&contents));
//! # Ok::<(), std::io::Error>(())
//! ```

pub use crckit_traits::io::{ChecksumReader, ChecksumWriter};
