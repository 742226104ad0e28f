//! The runtime-parameterized CRC engine.
//!
//! [`Crc`] owns a [`CrcParams`], a 256-entry lookup table generated once at
//! construction, and a single mutable register. The per-byte update kernel is
//! selected once per instance from the width bucket and input reflection, so
//! the hot loop stays branch-free regardless of parameterization.
//!
//! # Concurrency
//!
//! There is no internal synchronization and none is needed: all mutating
//! operations take `&mut self`, so the borrow checker rules out concurrent
//! mutation of one instance. Distinct instances share nothing and are fully
//! independent across threads.

use core::fmt;

use crate::params::{CrcAlgorithm, CrcParams, Width};
use crate::tables::{generate_table, reflect};

/// Per-byte update kernel.
///
/// Kernels are free functions (not closures) so the engine stays `Copy`-free
/// but trivially `Clone`, and the selected kernel is a direct call through a
/// function pointer.
type Kernel = fn(&Crc, u64, &[u8]) -> u64;

/// A CRC engine for one parameterization.
///
/// Construct once per algorithm, then reuse across computations via
/// [`reset`](Self::reset) or [`compute`](Self::compute); the table is built a
/// single time at construction.
///
/// # Example
///
/// ```rust
/// use crckit::{Crc, CrcAlgorithm, CrcParams};
///
/// // A named standard
/// let mut crc = Crc::with_algorithm(CrcAlgorithm::Crc32);
/// assert_eq!(crc.compute(b"123456789"), 0xCBF4_3926);
///
/// // Incremental updates are equivalent to one-shot
/// crc.reset();
/// crc.update(b"1234");
/// crc.update(b"56789");
/// assert_eq!(crc.finalize(), 0xCBF4_3926);
///
/// // A fully custom parameterization
/// let custom = CrcParams {
///   polynomial: 0x04C1_1DB7,
///   xor_out: 0,
///   ..CrcParams::CRC32_ISO_HDLC
/// };
/// let mut crc = Crc::new(custom);
/// assert_ne!(crc.compute(b"123456789"), 0xCBF4_3926);
/// ```
#[derive(Clone)]
pub struct Crc {
  params: CrcParams,
  table: [u64; 256],
  mask: u64,
  /// Shift that brings the register's top byte into the low byte (forward kernels).
  top_shift: u32,
  kernel: Kernel,
  init: u64,
  state: u64,
}

impl Crc {
  /// Build an engine for a custom parameterization.
  ///
  /// Generates the lookup table and initializes the register to
  /// `params.initial`. Never fails: every representable `CrcParams` defines a
  /// valid (if perhaps nonstandard) CRC.
  #[must_use]
  pub fn new(params: CrcParams) -> Self {
    let mask = params.width.mask();
    let init = params.initial & mask;
    Self {
      table: generate_table(&params),
      mask,
      top_shift: params.width.bits() - 8,
      kernel: select_kernel(&params),
      init,
      state: init,
      params,
    }
  }

  /// Build an engine for a named standard algorithm.
  #[must_use]
  pub fn with_algorithm(algorithm: CrcAlgorithm) -> Self {
    Self::new(algorithm.params())
  }

  /// The parameterization this engine computes.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  /// Set the register back to the initial value.
  #[inline]
  pub fn reset(&mut self) {
    self.state = self.init;
  }

  /// Feed bytes into the register, in order.
  ///
  /// Calls are associative: `update(a); update(b)` produces the same state as
  /// `update(ab)` for any split.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    let next = (self.kernel)(self, self.state, data);
    self.state = next;
  }

  /// Feed UTF-8 text into the register as its byte encoding.
  ///
  /// There is no CRC-specific text handling; `&str` is valid UTF-8 by
  /// construction, so this is exactly `update(text.as_bytes())`.
  #[inline]
  pub fn update_str(&mut self, text: &str) {
    self.update(text.as_bytes());
  }

  /// The finalized checksum for the bytes fed so far.
  ///
  /// Pure function of the register: applies the output reflection (only when
  /// it differs from the input reflection, since the table already encodes a
  /// consistent bit order), the final XOR, and the width mask. Does not
  /// mutate state and may be called repeatedly.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> u64 {
    let mut crc = self.state;
    if self.params.reflect_out != self.params.reflect_in {
      crc = reflect(crc, self.params.width.bits());
    }
    (crc ^ self.params.xor_out) & self.mask
  }

  /// One-shot checksum: reset, update with `data`, finalize.
  #[inline]
  #[must_use]
  pub fn compute(&mut self, data: &[u8]) -> u64 {
    self.reset();
    self.update(data);
    self.finalize()
  }

  /// Whether `data` checksums to `expected`.
  #[inline]
  #[must_use]
  pub fn verify(&mut self, data: &[u8], expected: u64) -> bool {
    self.compute(data) == expected
  }
}

impl fmt::Debug for Crc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc")
      .field("params", &self.params)
      .field("state", &self.state)
      .finish_non_exhaustive()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Kernels
// ─────────────────────────────────────────────────────────────────────────────

/// Pick the update kernel for a parameterization.
///
/// Dispatch happens here, once per engine, on (width bucket, reflect_in). At
/// byte width the reflected and forward formulas collapse to the same single
/// lookup, so three kernels cover the four cases.
fn select_kernel(params: &CrcParams) -> Kernel {
  match (params.width, params.reflect_in) {
    (Width::W8, _) => kernel_byte,
    (_, true) => kernel_reflected,
    (_, false) => kernel_forward,
  }
}

/// Width-8 kernel: the whole register is the index's table entry.
#[allow(clippy::indexing_slicing)] // index is 0..=255 by mask, table is [u64; 256]
fn kernel_byte(crc: &Crc, mut state: u64, data: &[u8]) -> u64 {
  for &byte in data {
    state = crc.table[((state ^ u64::from(byte)) & 0xFF) as usize];
  }
  state
}

/// Reflected (LSB-first) kernel for 16/32/64-bit registers.
#[allow(clippy::indexing_slicing)] // index is 0..=255 by mask, table is [u64; 256]
fn kernel_reflected(crc: &Crc, mut state: u64, data: &[u8]) -> u64 {
  for &byte in data {
    let index = ((state ^ u64::from(byte)) & 0xFF) as usize;
    state = (state >> 8) ^ crc.table[index];
  }
  state
}

/// Forward (MSB-first) kernel for 16/32/64-bit registers.
#[allow(clippy::indexing_slicing)] // index is 0..=255 by mask, table is [u64; 256]
fn kernel_forward(crc: &Crc, mut state: u64, data: &[u8]) -> u64 {
  for &byte in data {
    let index = (((state >> crc.top_shift) ^ u64::from(byte)) & 0xFF) as usize;
    state = ((state << 8) & crc.mask) ^ crc.table[index];
  }
  state
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
