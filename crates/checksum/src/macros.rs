//! Internal macros for CRC variant generation.
//!
//! The fifteen preset types share identical structure around one [`Crc`]
//! engine; this macro eliminates that boilerplate.
//!
//! [`Crc`]: crate::Crc

/// Generate a named-preset CRC type with its `Checksum` implementation.
///
/// This macro creates:
/// - The struct definition wrapping a [`crate::Crc`] engine
/// - `ALGORITHM` and `PARAMS` associated constants
/// - `Checksum` trait implementation with a width-exact `Output`
/// - A `Default` implementation equivalent to `new()`
///
/// # Arguments
///
/// - `$name`: The type name (e.g. `Crc32C`)
/// - `$algorithm`: The [`crate::CrcAlgorithm`] variant
/// - `$output`: The width-exact output type (`u8`/`u16`/`u32`/`u64`)
macro_rules! define_crc_variant {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      algorithm: $algorithm:expr,
      output: $output:ty,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Debug)]
    $vis struct $name {
      engine: $crate::Crc,
    }

    impl $name {
      /// The named algorithm this type computes.
      pub const ALGORITHM: $crate::CrcAlgorithm = $algorithm;

      /// The algorithm's parameter tuple.
      pub const PARAMS: $crate::CrcParams = Self::ALGORITHM.params();

      /// The RevEng catalog name.
      #[must_use]
      pub const fn name() -> &'static str {
        Self::ALGORITHM.name()
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        <Self as $crate::Checksum>::new()
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = Self::PARAMS.width.bytes();
      type Output = $output;

      #[inline]
      fn new() -> Self {
        Self {
          engine: $crate::Crc::new(Self::PARAMS),
        }
      }

      #[inline]
      fn with_initial(initial: $output) -> Self {
        let params = $crate::CrcParams {
          initial: u64::from(initial),
          ..Self::PARAMS
        };
        Self {
          engine: $crate::Crc::new(params),
        }
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.engine.update(data);
      }

      #[inline]
      #[allow(clippy::unnecessary_cast)] // identity cast when $output is u64
      fn finalize(&self) -> $output {
        self.engine.finalize() as $output
      }

      #[inline]
      fn reset(&mut self) {
        self.engine.reset();
      }
    }
  };
}
