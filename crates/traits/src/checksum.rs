//! The streaming checksum trait.
//!
//! - **Streaming**: incremental updates for large or non-contiguous data
//! - **One-shot**: provided `checksum()` for data already in memory
//! - **Verification**: provided `verify()` comparing against an expected value

use core::fmt::Debug;

/// A fixed-width checksum algorithm.
///
/// Provides the core interface for checksum computation with support for
/// incremental updates and streaming data.
///
/// # Usage
///
/// ```rust,ignore
/// use crckit::{Checksum, Crc32};
///
/// // One-shot (fastest for data already in memory)
/// let crc = Crc32::checksum(b"hello world");
///
/// // Streaming (for incremental or large data)
/// let mut hasher = Crc32::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// let crc = hasher.finalize();
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
/// - `update(a); update(b)` must equal `update(a ++ b)` for all splits
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  ///
  /// - CRC-8: 1
  /// - CRC-16: 2
  /// - CRC-32: 4
  /// - CRC-64: 8
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  ///
  /// Typically `u32` for CRC-32, `u64` for CRC-64, etc.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the algorithm's initial register value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher whose register starts at a custom initial value.
  ///
  /// Useful for non-standard parameterizations of a known polynomial.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume or mutate the hasher; further updates are
  /// allowed and the next `finalize()` reflects them.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Check `data` against an expected checksum value.
  #[inline]
  #[must_use]
  fn verify(data: &[u8], expected: Self::Output) -> bool {
    Self::checksum(data) == expected
  }

  /// Wrap a [`Read`](std::io::Read) so that bytes read are checksummed.
  #[cfg(feature = "std")]
  #[inline]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self> {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a [`Write`](std::io::Write) so that bytes written are checksummed.
  #[cfg(feature = "std")]
  #[inline]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self> {
    crate::io::ChecksumWriter::new(inner)
  }
}
