//! CRC-8 preset types.

use crate::CrcAlgorithm;

define_crc_variant! {
  /// CRC-8 checksum (SMBus PEC).
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x07
  /// - **Initial value**: 0x00
  /// - **Final XOR**: 0x00
  /// - **Reflect input/output**: No
  /// - **Check** (`"123456789"`): 0xF4
  pub struct Crc8 {
    algorithm: CrcAlgorithm::Crc8,
    output: u8,
  }
}

define_crc_variant! {
  /// CRC-8/CDMA2000 checksum.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x9B
  /// - **Initial value**: 0xFF
  /// - **Check** (`"123456789"`): 0xDA
  pub struct Crc8Cdma2000 {
    algorithm: CrcAlgorithm::Crc8Cdma2000,
    output: u8,
  }
}

define_crc_variant! {
  /// CRC-8/WCDMA checksum (reflected).
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x9B
  /// - **Reflect input/output**: Yes
  /// - **Check** (`"123456789"`): 0x25
  pub struct Crc8Wcdma {
    algorithm: CrcAlgorithm::Crc8Wcdma,
    output: u8,
  }
}
