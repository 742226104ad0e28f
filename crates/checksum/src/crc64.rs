//! CRC-64 preset types.

use crate::CrcAlgorithm;

define_crc_variant! {
  /// CRC-64/ECMA-182 checksum.
  ///
  /// The forward-bit-order 64-bit CRC from ECMA-182 (DLT-1 tape cartridges).
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x42F0E1EBA9EA3693
  /// - **Initial value**: 0x0000000000000000
  /// - **Reflect input/output**: No
  /// - **Check** (`"123456789"`): 0x6C40DF5F0B497347
  pub struct Crc64Ecma {
    algorithm: CrcAlgorithm::Crc64Ecma,
    output: u64,
  }
}

define_crc_variant! {
  /// CRC-64/GO-ISO checksum.
  ///
  /// The ISO 3309 parameterization popularized by Go's `hash/crc64`.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x000000000000001B
  /// - **Initial value**: 0xFFFFFFFFFFFFFFFF
  /// - **Reflect input/output**: Yes
  /// - **Check** (`"123456789"`): 0xB90956C775A41001
  pub struct Crc64GoIso {
    algorithm: CrcAlgorithm::Crc64GoIso,
    output: u64,
  }
}

define_crc_variant! {
  /// CRC-64/XZ checksum.
  ///
  /// Used by XZ Utils and 7-Zip; the reflected form of the ECMA-182 polynomial.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x42F0E1EBA9EA3693
  /// - **Initial value**: 0xFFFFFFFFFFFFFFFF
  /// - **Final XOR**: 0xFFFFFFFFFFFFFFFF
  /// - **Reflect input/output**: Yes
  /// - **Check** (`"123456789"`): 0x995DC9BBDF1939FA
  pub struct Crc64Xz {
    algorithm: CrcAlgorithm::Crc64Xz,
    output: u64,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Checksum;

  const TEST_DATA: &[u8] = b"123456789";

  #[test]
  fn test_crc64_checksum() {
    assert_eq!(Crc64Ecma::checksum(TEST_DATA), 0x6C40_DF5F_0B49_7347);
    assert_eq!(Crc64GoIso::checksum(TEST_DATA), 0xB909_56C7_75A4_1001);
    assert_eq!(Crc64Xz::checksum(TEST_DATA), 0x995D_C9BB_DF19_39FA);
  }

  #[test]
  fn test_crc64_streaming() {
    let oneshot = Crc64Xz::checksum(TEST_DATA);

    let mut hasher = Crc64Xz::new();
    hasher.update(&TEST_DATA[..4]);
    hasher.update(&TEST_DATA[4..]);
    assert_eq!(hasher.finalize(), oneshot);
  }

  #[test]
  fn test_crc64_high_bits_survive() {
    // 64-bit results exceed the 32-bit domain; nothing truncates them.
    assert!(Crc64Xz::checksum(TEST_DATA) > u64::from(u32::MAX));
    assert!(Crc64GoIso::checksum(TEST_DATA) > u64::from(u32::MAX));
  }

  #[test]
  fn test_crc64_empty() {
    assert_eq!(Crc64Ecma::checksum(&[]), 0);
    assert_eq!(Crc64Xz::checksum(&[]), 0);
  }
}
