//! CRC-16 preset types.

use crate::CrcAlgorithm;

define_crc_variant! {
  /// CRC-16/ARC checksum.
  ///
  /// Also known as plain CRC-16, CRC-16/IBM, and CRC-16/LHA; the default
  /// 16-bit CRC of ARC and many legacy protocols.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x8005
  /// - **Initial value**: 0x0000
  /// - **Reflect input/output**: Yes
  /// - **Check** (`"123456789"`): 0xBB3D
  pub struct Crc16Arc {
    algorithm: CrcAlgorithm::Crc16Arc,
    output: u16,
  }
}

define_crc_variant! {
  /// CRC-16/CCITT-FALSE checksum (IBM-3740).
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x1021
  /// - **Initial value**: 0xFFFF
  /// - **Reflect input/output**: No
  /// - **Check** (`"123456789"`): 0x29B1
  pub struct Crc16CcittFalse {
    algorithm: CrcAlgorithm::Crc16CcittFalse,
    output: u16,
  }
}

define_crc_variant! {
  /// CRC-16/XMODEM checksum.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x1021
  /// - **Initial value**: 0x0000
  /// - **Check** (`"123456789"`): 0x31C3
  pub struct Crc16Xmodem {
    algorithm: CrcAlgorithm::Crc16Xmodem,
    output: u16,
  }
}

define_crc_variant! {
  /// CRC-16/MODBUS checksum.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x8005
  /// - **Initial value**: 0xFFFF
  /// - **Reflect input/output**: Yes
  /// - **Check** (`"123456789"`): 0x4B37
  pub struct Crc16Modbus {
    algorithm: CrcAlgorithm::Crc16Modbus,
    output: u16,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Checksum;

  const TEST_DATA: &[u8] = b"123456789";

  #[test]
  fn test_crc16_checksums() {
    assert_eq!(Crc16Arc::checksum(TEST_DATA), 0xBB3D);
    assert_eq!(Crc16CcittFalse::checksum(TEST_DATA), 0x29B1);
    assert_eq!(Crc16Xmodem::checksum(TEST_DATA), 0x31C3);
    assert_eq!(Crc16Modbus::checksum(TEST_DATA), 0x4B37);
  }

  #[test]
  fn test_crc16_streaming() {
    let oneshot = Crc16CcittFalse::checksum(TEST_DATA);

    let mut hasher = Crc16CcittFalse::new();
    hasher.update(&TEST_DATA[..5]);
    hasher.update(&TEST_DATA[5..]);
    assert_eq!(hasher.finalize(), oneshot);
  }

  #[test]
  fn test_crc16_reset() {
    let mut hasher = Crc16Modbus::new();
    hasher.update(b"some data");
    hasher.reset();
    hasher.update(TEST_DATA);
    assert_eq!(hasher.finalize(), Crc16Modbus::checksum(TEST_DATA));
  }

  #[test]
  fn test_crc16_empty() {
    // init=0, xor=0 variants finalize to zero on empty input.
    assert_eq!(Crc16Arc::checksum(&[]), 0);
    assert_eq!(Crc16Xmodem::checksum(&[]), 0);
    // init=0xFFFF, xor=0 keeps the initial register.
    assert_eq!(Crc16CcittFalse::checksum(&[]), 0xFFFF);
    assert_eq!(Crc16Modbus::checksum(&[]), 0xFFFF);
  }

  #[test]
  fn test_crc16_vectored() {
    let oneshot = Crc16Arc::checksum(TEST_DATA);
    assert_eq!(Crc16Arc::checksum_vectored(&[b"123", b"", b"456789"]), oneshot);
  }
}
