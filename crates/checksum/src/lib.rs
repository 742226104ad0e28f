//! Parameterizable CRC checksums.
//!
//! This crate computes fixed-width polynomial checksums over arbitrary byte
//! streams. It provides named standard variants and accepts fully custom
//! Rocksoft-model parameterizations; the engine treats both identically.
//!
//! # Supported Presets
//!
//! | Type | Polynomial | Output | Use Cases |
//! |------|------------|--------|-----------|
//! | [`Crc8`] | 0x07 | `u8` | SMBus PEC |
//! | [`Crc8Cdma2000`] | 0x9B | `u8` | cdma2000 |
//! | [`Crc8Wcdma`] | 0x9B | `u8` | UMTS/WCDMA |
//! | [`Crc16Arc`] | 0x8005 | `u16` | ARC, LHA, legacy protocols |
//! | [`Crc16CcittFalse`] | 0x1021 | `u16` | Bluetooth, SD cards |
//! | [`Crc16Xmodem`] | 0x1021 | `u16` | XMODEM, ZMODEM |
//! | [`Crc16Modbus`] | 0x8005 | `u16` | Modbus RTU |
//! | [`Crc32`] | 0x04C11DB7 | `u32` | Ethernet, gzip, zip, PNG |
//! | [`Crc32Bzip2`] | 0x04C11DB7 | `u32` | bzip2, AAL5 |
//! | [`Crc32Mpeg2`] | 0x04C11DB7 | `u32` | MPEG-2 transport streams |
//! | [`Crc32Cksum`] | 0x04C11DB7 | `u32` | POSIX `cksum` |
//! | [`Crc32C`] | 0x1EDC6F41 | `u32` | iSCSI, SCTP, ext4, Btrfs |
//! | [`Crc64Ecma`] | 0x42F0E1EBA9EA3693 | `u64` | ECMA-182, DLT-1 |
//! | [`Crc64GoIso`] | 0x1B | `u64` | Go `hash/crc64` |
//! | [`Crc64Xz`] | 0x42F0E1EBA9EA3693 | `u64` | XZ Utils, 7-Zip |
//!
//! # Example
//!
//! ```rust
//! use crckit::{Checksum, Crc, Crc32, CrcAlgorithm, CrcParams, Width};
//!
//! // One-shot computation
//! let data = b"123456789";
//! assert_eq!(Crc32::checksum(data), 0xCBF4_3926);
//!
//! // Streaming computation
//! let mut hasher = Crc32::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), 0xCBF4_3926);
//!
//! // Runtime-parameterized engine, including fully custom tuples
//! let mut engine = Crc::with_algorithm(CrcAlgorithm::Crc16Modbus);
//! assert_eq!(engine.compute(data), 0x4B37);
//!
//! let custom = CrcParams {
//!   width: Width::W16,
//!   polynomial: 0x1021,
//!   initial: 0,
//!   reflect_in: false,
//!   reflect_out: false,
//!   xor_out: 0,
//! };
//! assert_eq!(Crc::new(custom).compute(data), 0x31C3); // == CRC-16/XMODEM
//! ```
//!
//! # Performance Model
//!
//! This crate is table-lookup only: each engine owns one 256-entry table
//! computed at construction and processes one byte per step (the register
//! forms a serial dependency chain, so the per-byte loop is the design, not
//! an optimization gap). The update kernel is chosen once per engine, keeping
//! the hot loop branch-free. There is no SIMD or carry-less-multiply path.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible and allocation-free. Disable the `std`
//! feature for embedded use (the I/O adapters are `std`-only):
//!
//! ```toml
//! [dependencies]
//! crckit = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

mod engine;
mod params;
pub mod reference;
mod tables;

mod crc8;
mod crc16;
mod crc32;
mod crc64;

#[cfg(feature = "std")]
pub mod io;

#[cfg(test)]
mod proptests;

pub use crckit_traits::Checksum;

pub use engine::Crc;
pub use params::{CrcAlgorithm, CrcParams, Width};
pub use tables::{generate_table, reflect};

pub use crc8::{Crc8, Crc8Cdma2000, Crc8Wcdma};
pub use crc16::{Crc16Arc, Crc16CcittFalse, Crc16Modbus, Crc16Xmodem};
pub use crc32::{Crc32, Crc32Bzip2, Crc32C, Crc32Cksum, Crc32Mpeg2};
pub use crc64::{Crc64Ecma, Crc64GoIso, Crc64Xz};

// ─────────────────────────────────────────────────────────────────────────────
// One-shot convenience functions
// ─────────────────────────────────────────────────────────────────────────────

/// One-shot CRC-8 (SMBus PEC).
#[inline]
#[must_use]
pub fn crc8(data: &[u8]) -> u8 {
  Crc8::checksum(data)
}

/// One-shot CRC-16/ARC (plain "CRC-16").
#[inline]
#[must_use]
pub fn crc16(data: &[u8]) -> u16 {
  Crc16Arc::checksum(data)
}

/// One-shot CRC-32 (ISO-HDLC / IEEE 802.3).
#[inline]
#[must_use]
pub fn crc32(data: &[u8]) -> u32 {
  Crc32::checksum(data)
}

/// One-shot CRC-32C (Castagnoli).
#[inline]
#[must_use]
pub fn crc32c(data: &[u8]) -> u32 {
  Crc32C::checksum(data)
}

/// One-shot CRC-64/ECMA-182.
#[inline]
#[must_use]
pub fn crc64(data: &[u8]) -> u64 {
  Crc64Ecma::checksum(data)
}
