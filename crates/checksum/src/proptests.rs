//! Property tests for the CRC engine.
//!
//! Three layers of assurance:
//!
//! 1. The table-driven engine matches the bitwise reference for *arbitrary*
//!    parameterizations, not just the named presets.
//! 2. Incremental updates are equivalent to one-shot computation for any
//!    chunking of any input.
//! 3. Every named preset cross-validates against the `crc` crate (which
//!    implements the same RevEng catalog independently).

extern crate std;

use proptest::prelude::*;

use crate::reference::crc_bitwise;
use crate::{Crc, CrcAlgorithm, CrcParams, Width};

fn width_strategy() -> impl Strategy<Value = Width> {
  prop_oneof![Just(Width::W8), Just(Width::W16), Just(Width::W32), Just(Width::W64)]
}

prop_compose! {
  fn params_strategy()(
    width in width_strategy(),
    polynomial in any::<u64>(),
    initial in any::<u64>(),
    xor_out in any::<u64>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
  ) -> CrcParams {
    CrcParams { width, polynomial, initial, reflect_in, reflect_out, xor_out }
  }
}

proptest! {
  #[test]
  fn engine_matches_bitwise_reference(
    params in params_strategy(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
  ) {
    let table_driven = Crc::new(params).compute(&data);
    let bitwise = crc_bitwise(&params, &data);
    prop_assert_eq!(table_driven, bitwise);
  }

  #[test]
  fn chunking_equivalence(
    params in params_strategy(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    chunk in 1usize..=257,
  ) {
    let mut oneshot = Crc::new(params);
    let expected = oneshot.compute(&data);

    let mut incremental = Crc::new(params);
    for part in data.chunks(chunk) {
      incremental.update(part);
    }
    prop_assert_eq!(incremental.finalize(), expected);
  }

  #[test]
  fn compute_is_deterministic(
    params in params_strategy(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
  ) {
    let mut engine = Crc::new(params);
    let first = engine.compute(&data);
    prop_assert_eq!(engine.compute(&data), first);

    let mut fresh = Crc::new(params);
    prop_assert_eq!(fresh.compute(&data), first);
  }

  #[test]
  fn verify_roundtrip(
    params in params_strategy(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
  ) {
    let mut engine = Crc::new(params);
    let value = engine.compute(&data);
    prop_assert!(engine.verify(&data, value));

    let off_by_one = value.wrapping_add(1) & params.width.mask();
    prop_assert!(!engine.verify(&data, off_by_one));
  }

  #[test]
  fn finalize_never_exceeds_width(
    params in params_strategy(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
  ) {
    let value = Crc::new(params).compute(&data);
    prop_assert_eq!(value & params.width.mask(), value);
  }

  // ─────────────────────────────────────────────────────────────────────────
  // Cross-validation against the `crc` crate
  // ─────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc8_presets_match_crc_crate(data in proptest::collection::vec(any::<u8>(), 0..=2048)) {
    let cases: [(CrcAlgorithm, &crc::Algorithm<u8>); 3] = [
      (CrcAlgorithm::Crc8, &crc::CRC_8_SMBUS),
      (CrcAlgorithm::Crc8Cdma2000, &crc::CRC_8_CDMA2000),
      (CrcAlgorithm::Crc8Wcdma, &crc::CRC_8_WCDMA),
    ];
    for (alg, reference) in cases {
      let ours = Crc::with_algorithm(alg).compute(&data);
      let theirs = crc::Crc::<u8>::new(reference).checksum(&data);
      prop_assert_eq!(ours, u64::from(theirs), "{}", alg.name());
    }
  }

  #[test]
  fn crc16_presets_match_crc_crate(data in proptest::collection::vec(any::<u8>(), 0..=2048)) {
    let cases: [(CrcAlgorithm, &crc::Algorithm<u16>); 4] = [
      (CrcAlgorithm::Crc16Arc, &crc::CRC_16_ARC),
      (CrcAlgorithm::Crc16CcittFalse, &crc::CRC_16_IBM_3740),
      (CrcAlgorithm::Crc16Xmodem, &crc::CRC_16_XMODEM),
      (CrcAlgorithm::Crc16Modbus, &crc::CRC_16_MODBUS),
    ];
    for (alg, reference) in cases {
      let ours = Crc::with_algorithm(alg).compute(&data);
      let theirs = crc::Crc::<u16>::new(reference).checksum(&data);
      prop_assert_eq!(ours, u64::from(theirs), "{}", alg.name());
    }
  }

  #[test]
  fn crc32_presets_match_crc_crate(data in proptest::collection::vec(any::<u8>(), 0..=2048)) {
    let cases: [(CrcAlgorithm, &crc::Algorithm<u32>); 5] = [
      (CrcAlgorithm::Crc32, &crc::CRC_32_ISO_HDLC),
      (CrcAlgorithm::Crc32Bzip2, &crc::CRC_32_BZIP2),
      (CrcAlgorithm::Crc32Mpeg2, &crc::CRC_32_MPEG_2),
      (CrcAlgorithm::Crc32Cksum, &crc::CRC_32_CKSUM),
      (CrcAlgorithm::Crc32C, &crc::CRC_32_ISCSI),
    ];
    for (alg, reference) in cases {
      let ours = Crc::with_algorithm(alg).compute(&data);
      let theirs = crc::Crc::<u32>::new(reference).checksum(&data);
      prop_assert_eq!(ours, u64::from(theirs), "{}", alg.name());
    }
  }

  #[test]
  fn crc64_presets_match_crc_crate(data in proptest::collection::vec(any::<u8>(), 0..=2048)) {
    let cases: [(CrcAlgorithm, &crc::Algorithm<u64>); 3] = [
      (CrcAlgorithm::Crc64Ecma, &crc::CRC_64_ECMA_182),
      (CrcAlgorithm::Crc64GoIso, &crc::CRC_64_GO_ISO),
      (CrcAlgorithm::Crc64Xz, &crc::CRC_64_XZ),
    ];
    for (alg, reference) in cases {
      let ours = Crc::with_algorithm(alg).compute(&data);
      let theirs = crc::Crc::<u64>::new(reference).checksum(&data);
      prop_assert_eq!(ours, theirs, "{}", alg.name());
    }
  }

  #[test]
  fn streaming_matches_crc_crate(
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    chunk in 1usize..=257,
  ) {
    let mut ours = Crc::with_algorithm(CrcAlgorithm::Crc32);
    let reference = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
    let mut digest = reference.digest();

    for part in data.chunks(chunk) {
      ours.update(part);
      digest.update(part);
    }
    prop_assert_eq!(ours.finalize(), u64::from(digest.finalize()));
  }
}
