//! CRC engine benchmarks.
//!
//! Run: `cargo bench -p crckit -- engine`
//!
//! This benchmarks:
//! - One-shot computation through the reflected kernel (CRC-32/ISO-HDLC)
//! - One-shot computation through the forward kernel (CRC-16/XMODEM)
//! - The 64-bit reflected path (CRC-64/XZ)
//! - Streaming updates in small chunks

use crckit::{Crc, CrcAlgorithm};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Standard benchmark sizes.
const SIZES: [usize; 6] = [64, 256, 1024, 4096, 65536, 1048576];

/// Chunk size for the streaming benchmark, chosen to defeat any
/// whole-buffer shortcuts.
const STREAM_CHUNK: usize = 509;

fn bench_oneshot(c: &mut Criterion, group_name: &str, algorithm: CrcAlgorithm) {
  let mut group = c.benchmark_group(group_name);

  for size in SIZES {
    let data = vec![0xABu8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      let mut engine = Crc::with_algorithm(algorithm);
      b.iter(|| core::hint::black_box(engine.compute(data)));
    });
  }

  group.finish();
}

fn bench_reflected(c: &mut Criterion) {
  bench_oneshot(c, "engine/crc32-iso-hdlc", CrcAlgorithm::Crc32);
}

fn bench_forward(c: &mut Criterion) {
  bench_oneshot(c, "engine/crc16-xmodem", CrcAlgorithm::Crc16Xmodem);
}

fn bench_wide(c: &mut Criterion) {
  bench_oneshot(c, "engine/crc64-xz", CrcAlgorithm::Crc64Xz);
}

/// Benchmark incremental updates, the path taken by the I/O adapters.
fn bench_streaming(c: &mut Criterion) {
  let mut group = c.benchmark_group("engine/crc32-streaming");

  for size in SIZES {
    let data = vec![0xABu8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      let mut engine = Crc::with_algorithm(CrcAlgorithm::Crc32);
      b.iter(|| {
        engine.reset();
        for chunk in data.chunks(STREAM_CHUNK) {
          engine.update(chunk);
        }
        core::hint::black_box(engine.finalize())
      });
    });
  }

  group.finish();
}

criterion_group!(benches, bench_reflected, bench_forward, bench_wide, bench_streaming);
criterion_main!(benches);
