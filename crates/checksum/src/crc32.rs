//! CRC-32 preset types.

use crate::CrcAlgorithm;

define_crc_variant! {
  /// CRC-32 checksum (ISO-HDLC / IEEE 802.3).
  ///
  /// Used in Ethernet FCS, ZIP, gzip, PNG, and many other formats.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x04C11DB7 (normal), 0xEDB88320 (reflected)
  /// - **Initial value**: 0xFFFFFFFF
  /// - **Final XOR**: 0xFFFFFFFF
  /// - **Reflect input/output**: Yes
  /// - **Check** (`"123456789"`): 0xCBF43926
  pub struct Crc32 {
    algorithm: CrcAlgorithm::Crc32,
    output: u32,
  }
}

define_crc_variant! {
  /// CRC-32/BZIP2 checksum.
  ///
  /// The forward-bit-order sibling of CRC-32; used by bzip2 and AAL5.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x04C11DB7
  /// - **Reflect input/output**: No
  /// - **Check** (`"123456789"`): 0xFC891918
  pub struct Crc32Bzip2 {
    algorithm: CrcAlgorithm::Crc32Bzip2,
    output: u32,
  }
}

define_crc_variant! {
  /// CRC-32/MPEG-2 checksum.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x04C11DB7
  /// - **Final XOR**: 0x00000000
  /// - **Check** (`"123456789"`): 0x0376E6E7
  pub struct Crc32Mpeg2 {
    algorithm: CrcAlgorithm::Crc32Mpeg2,
    output: u32,
  }
}

define_crc_variant! {
  /// CRC-32/CKSUM checksum (POSIX `cksum`).
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x04C11DB7
  /// - **Initial value**: 0x00000000
  /// - **Check** (`"123456789"`): 0x765E7680
  pub struct Crc32Cksum {
    algorithm: CrcAlgorithm::Crc32Cksum,
    output: u32,
  }
}

define_crc_variant! {
  /// CRC-32C checksum (Castagnoli polynomial).
  ///
  /// Used in iSCSI, ext4, Btrfs, SCTP, and other modern protocols.
  /// Has better error detection properties than CRC-32 ISO-HDLC.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x1EDC6F41 (normal), 0x82F63B78 (reflected)
  /// - **Initial value**: 0xFFFFFFFF
  /// - **Final XOR**: 0xFFFFFFFF
  /// - **Reflect input/output**: Yes
  /// - **Check** (`"123456789"`): 0xE3069283
  pub struct Crc32C {
    algorithm: CrcAlgorithm::Crc32C,
    output: u32,
  }
}
