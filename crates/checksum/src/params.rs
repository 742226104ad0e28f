//! CRC algorithm parameters.
//!
//! This module defines the parameters for various CRC algorithms following
//! the conventions from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

/// Register width of a CRC algorithm.
///
/// The width is a closed menu rather than a free integer: every supported
/// register fits a standard unsigned type, which makes "parameters fit within
/// `width` bits" a structural property instead of a runtime check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
  /// 8-bit register (`u8` domain).
  W8,
  /// 16-bit register (`u16` domain).
  W16,
  /// 32-bit register (`u32` domain).
  W32,
  /// 64-bit register (`u64` domain).
  W64,
}

impl Width {
  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u32 {
    match self {
      Self::W8 => 8,
      Self::W16 => 16,
      Self::W32 => 32,
      Self::W64 => 64,
    }
  }

  /// Width in bytes.
  #[inline]
  #[must_use]
  pub const fn bytes(self) -> usize {
    (self.bits() / 8) as usize
  }

  /// All-ones mask covering exactly this width.
  #[inline]
  #[must_use]
  pub const fn mask(self) -> u64 {
    match self {
      Self::W8 => 0xFF,
      Self::W16 => 0xFFFF,
      Self::W32 => 0xFFFF_FFFF,
      Self::W64 => u64::MAX,
    }
  }
}

/// CRC algorithm parameters (Rocksoft model).
///
/// This struct captures all the parameters needed to define a CRC algorithm.
/// A custom `CrcParams` and a named preset are treated identically by the
/// engine.
///
/// # Parameters
///
/// - `width`: Register width (8, 16, 32, or 64 bits)
/// - `polynomial`: The generator polynomial (without the implicit high bit)
/// - `initial`: Initial value for the CRC register
/// - `reflect_in`: If true, input is processed LSB-first
/// - `reflect_out`: If true, reflect the final CRC before XOR
/// - `xor_out`: Value to XOR with the final CRC
///
/// The numeric fields are interpreted modulo `2^width`; bits above the width
/// are masked off during table generation and finalization.
///
/// # Reflection
///
/// "Reflected" means bit-reversed. Most common CRCs (CRC-32, CRC-32C) use
/// reflected input and output, which maps to LSB-first processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams {
  /// Register width.
  pub width: Width,
  /// Generator polynomial (without implicit high bit), MSB-first encoding.
  pub polynomial: u64,
  /// Initial value for the CRC register.
  pub initial: u64,
  /// Process input LSB-first.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: u64,
}

impl CrcParams {
  /// CRC-8 (SMBus PEC) - SMBus, ATM HEC ancestry
  pub const CRC8: Self = Self {
    width: Width::W8,
    polynomial: 0x07,
    initial: 0x00,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x00,
  };

  /// CRC-8/CDMA2000 - cdma2000 physical layer
  pub const CRC8_CDMA2000: Self = Self {
    width: Width::W8,
    polynomial: 0x9B,
    initial: 0xFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x00,
  };

  /// CRC-8/WCDMA - UMTS/WCDMA signaling
  pub const CRC8_WCDMA: Self = Self {
    width: Width::W8,
    polynomial: 0x9B,
    initial: 0x00,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x00,
  };

  /// CRC-16/ARC - also known as plain CRC-16, CRC-16/IBM, CRC-16/LHA
  ///
  /// The default 16-bit CRC of ARC, LHA, and many legacy protocols.
  pub const CRC16_ARC: Self = Self {
    width: Width::W16,
    polynomial: 0x8005,
    initial: 0x0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  };

  /// CRC-16/CCITT-FALSE (IBM-3740) - Bluetooth, SD cards, many HDLC descendants
  pub const CRC16_CCITT_FALSE: Self = Self {
    width: Width::W16,
    polynomial: 0x1021,
    initial: 0xFFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
  };

  /// CRC-16/XMODEM - XMODEM, ZMODEM
  pub const CRC16_XMODEM: Self = Self {
    width: Width::W16,
    polynomial: 0x1021,
    initial: 0x0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
  };

  /// CRC-16/MODBUS - Modbus RTU serial framing
  pub const CRC16_MODBUS: Self = Self {
    width: Width::W16,
    polynomial: 0x8005,
    initial: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  };

  /// CRC-32 (ISO-HDLC / IEEE 802.3) - Ethernet, gzip, PNG, zip, SATA
  ///
  /// The most widely used CRC-32 variant.
  pub const CRC32_ISO_HDLC: Self = Self {
    width: Width::W32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32/BZIP2 - bzip2, AAL5
  pub const CRC32_BZIP2: Self = Self {
    width: Width::W32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32/MPEG-2 - MPEG-2 transport streams
  pub const CRC32_MPEG2: Self = Self {
    width: Width::W32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000_0000,
  };

  /// CRC-32/CKSUM (POSIX) - the `cksum` utility
  pub const CRC32_CKSUM: Self = Self {
    width: Width::W32,
    polynomial: 0x04C1_1DB7,
    initial: 0x0000_0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32C (Castagnoli) - iSCSI, SCTP, Btrfs, ext4, RocksDB, LevelDB
  ///
  /// This polynomial was specifically designed to have good error detection
  /// properties for data storage and networking.
  pub const CRC32C: Self = Self {
    width: Width::W32,
    polynomial: 0x1EDC_6F41,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-64/ECMA-182 - DLT-1 tape cartridges; forward form of the XZ polynomial
  pub const CRC64_ECMA: Self = Self {
    width: Width::W64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
    initial: 0x0000_0000_0000_0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000_0000_0000_0000,
  };

  /// CRC-64/GO-ISO - Go standard library's ISO 3309 variant
  pub const CRC64_GO_ISO: Self = Self {
    width: Width::W64,
    polynomial: 0x0000_0000_0000_001B,
    initial: 0xFFFF_FFFF_FFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF_FFFF_FFFF,
  };

  /// CRC-64/XZ - XZ Utils, 7-Zip
  pub const CRC64_XZ: Self = Self {
    width: Width::W64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
    initial: 0xFFFF_FFFF_FFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF_FFFF_FFFF,
  };
}

/// Named standard CRC algorithms.
///
/// Each variant maps to a [`CrcParams`] preset; the engine treats these
/// identically to custom parameters. Names follow the CRC RevEng catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrcAlgorithm {
  /// CRC-8 (SMBus PEC).
  Crc8,
  /// CRC-8/CDMA2000.
  Crc8Cdma2000,
  /// CRC-8/WCDMA.
  Crc8Wcdma,
  /// CRC-16/ARC, also known as CRC-16, CRC-16/IBM.
  Crc16Arc,
  /// CRC-16/CCITT-FALSE (IBM-3740).
  Crc16CcittFalse,
  /// CRC-16/XMODEM.
  Crc16Xmodem,
  /// CRC-16/MODBUS.
  Crc16Modbus,
  /// CRC-32 (ISO-HDLC / IEEE 802.3).
  Crc32,
  /// CRC-32/BZIP2.
  Crc32Bzip2,
  /// CRC-32/MPEG-2.
  Crc32Mpeg2,
  /// CRC-32/CKSUM (POSIX).
  Crc32Cksum,
  /// CRC-32C (Castagnoli).
  Crc32C,
  /// CRC-64/ECMA-182.
  Crc64Ecma,
  /// CRC-64/GO-ISO.
  Crc64GoIso,
  /// CRC-64/XZ.
  Crc64Xz,
}

impl CrcAlgorithm {
  /// Every named algorithm, in catalog order.
  pub const ALL: [Self; 15] = [
    Self::Crc8,
    Self::Crc8Cdma2000,
    Self::Crc8Wcdma,
    Self::Crc16Arc,
    Self::Crc16CcittFalse,
    Self::Crc16Xmodem,
    Self::Crc16Modbus,
    Self::Crc32,
    Self::Crc32Bzip2,
    Self::Crc32Mpeg2,
    Self::Crc32Cksum,
    Self::Crc32C,
    Self::Crc64Ecma,
    Self::Crc64GoIso,
    Self::Crc64Xz,
  ];

  /// The parameter preset for this algorithm.
  #[must_use]
  pub const fn params(self) -> CrcParams {
    match self {
      Self::Crc8 => CrcParams::CRC8,
      Self::Crc8Cdma2000 => CrcParams::CRC8_CDMA2000,
      Self::Crc8Wcdma => CrcParams::CRC8_WCDMA,
      Self::Crc16Arc => CrcParams::CRC16_ARC,
      Self::Crc16CcittFalse => CrcParams::CRC16_CCITT_FALSE,
      Self::Crc16Xmodem => CrcParams::CRC16_XMODEM,
      Self::Crc16Modbus => CrcParams::CRC16_MODBUS,
      Self::Crc32 => CrcParams::CRC32_ISO_HDLC,
      Self::Crc32Bzip2 => CrcParams::CRC32_BZIP2,
      Self::Crc32Mpeg2 => CrcParams::CRC32_MPEG2,
      Self::Crc32Cksum => CrcParams::CRC32_CKSUM,
      Self::Crc32C => CrcParams::CRC32C,
      Self::Crc64Ecma => CrcParams::CRC64_ECMA,
      Self::Crc64GoIso => CrcParams::CRC64_GO_ISO,
      Self::Crc64Xz => CrcParams::CRC64_XZ,
    }
  }

  /// The CRC RevEng catalog name.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Crc8 => "CRC-8/SMBUS",
      Self::Crc8Cdma2000 => "CRC-8/CDMA2000",
      Self::Crc8Wcdma => "CRC-8/WCDMA",
      Self::Crc16Arc => "CRC-16/ARC",
      Self::Crc16CcittFalse => "CRC-16/IBM-3740",
      Self::Crc16Xmodem => "CRC-16/XMODEM",
      Self::Crc16Modbus => "CRC-16/MODBUS",
      Self::Crc32 => "CRC-32/ISO-HDLC",
      Self::Crc32Bzip2 => "CRC-32/BZIP2",
      Self::Crc32Mpeg2 => "CRC-32/MPEG-2",
      Self::Crc32Cksum => "CRC-32/CKSUM",
      Self::Crc32C => "CRC-32/ISCSI",
      Self::Crc64Ecma => "CRC-64/ECMA-182",
      Self::Crc64GoIso => "CRC-64/GO-ISO",
      Self::Crc64Xz => "CRC-64/XZ",
    }
  }

  /// The catalog check value: the CRC of the ASCII bytes `"123456789"`.
  #[must_use]
  pub const fn check(self) -> u64 {
    match self {
      Self::Crc8 => 0xF4,
      Self::Crc8Cdma2000 => 0xDA,
      Self::Crc8Wcdma => 0x25,
      Self::Crc16Arc => 0xBB3D,
      Self::Crc16CcittFalse => 0x29B1,
      Self::Crc16Xmodem => 0x31C3,
      Self::Crc16Modbus => 0x4B37,
      Self::Crc32 => 0xCBF4_3926,
      Self::Crc32Bzip2 => 0xFC89_1918,
      Self::Crc32Mpeg2 => 0x0376_E6E7,
      Self::Crc32Cksum => 0x765E_7680,
      Self::Crc32C => 0xE306_9283,
      Self::Crc64Ecma => 0x6C40_DF5F_0B49_7347,
      Self::Crc64GoIso => 0xB909_56C7_75A4_1001,
      Self::Crc64Xz => 0x995D_C9BB_DF19_39FA,
    }
  }
}
