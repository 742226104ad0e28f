//! Const-fn bit reflection and CRC lookup table generation.
//!
//! A CRC engine owns one 256-entry table mapping a byte value to its
//! contribution to the register. The table is derived deterministically from
//! the [`CrcParams`] at engine construction and never mutated afterwards.
//!
//! Reflected (LSB-first) variants divide by the bit-reversed polynomial with
//! right shifts; forward (MSB-first) variants divide by the polynomial as
//! given with left shifts. Either way each entry is the result of eight
//! polynomial-division steps on the seeded byte, masked to the width.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::params::CrcParams;

/// Reverse the low `bits` bits of `value`.
///
/// `bits` must be in `1..=64`; callers pass `Width::bits()`.
#[inline]
#[must_use]
pub const fn reflect(value: u64, bits: u32) -> u64 {
  value.reverse_bits() >> (64 - bits)
}

/// Generate the 256-entry lookup table for `params`.
///
/// For reflected parameters the division runs LSB-first against
/// `reflect(polynomial, width)`; reflecting the divisor (rather than each
/// input byte) is what keeps the per-byte update loop free of bit reversal
/// and is required to reproduce the published check values of the reflected
/// standards.
#[must_use]
pub const fn generate_table(params: &CrcParams) -> [u64; 256] {
  let width = params.width.bits();
  let mask = params.width.mask();
  let mut table = [0u64; 256];

  if params.reflect_in {
    let poly = reflect(params.polynomial & mask, width);
    let mut i = 0;
    while i < 256 {
      let mut crc = i as u64;
      let mut bit = 0;
      while bit < 8 {
        crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
        bit += 1;
      }
      table[i] = crc & mask;
      i += 1;
    }
  } else {
    let poly = params.polynomial & mask;
    let top = 1u64 << (width - 1);
    let mut i = 0;
    while i < 256 {
      let mut crc = (i as u64) << (width - 8);
      let mut bit = 0;
      while bit < 8 {
        crc = if crc & top != 0 { ((crc << 1) ^ poly) & mask } else { (crc << 1) & mask };
        bit += 1;
      }
      table[i] = crc;
      i += 1;
    }
  }

  table
}
