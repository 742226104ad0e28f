//! Core checksum traits for crckit.
//!
//! This crate provides the foundational trait that every crckit checksum type
//! conforms to, plus generic I/O adapters built on top of it. It is `no_std`
//! compatible and has zero dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | Streaming checksum interface (CRC-8 through CRC-64) |
//! | [`io::ChecksumReader`] | `std::io::Read` wrapper that checksums bytes read |
//! | [`io::ChecksumWriter`] | `std::io::Write` wrapper that checksums bytes written |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

mod checksum;
pub mod io;

pub use checksum::Checksum;
