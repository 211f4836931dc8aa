//! Benchmarks for bigbytes.
//!
//! Run with:
//!     cargo bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use bigbytes::{Codec, CodecConfig, from_bytes_be, from_bytes_le, portable};

fn sample_words(count: usize) -> Vec<u64> {
    // Deterministic pseudo-random words with a non-zero top word
    (0..count as u64)
        .map(|i| i.wrapping_mul(0x9e37_79b9_7f4a_7c15) | 1)
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    // 1 and 16 words stay in the pool, 4096 words bypass it
    for count in [1usize, 16, 4096] {
        let words = sample_words(count);
        group.throughput(Throughput::Bytes((count * 8) as u64));

        group.bench_with_input(BenchmarkId::new("pooled_le", count), &words, |b, words| {
            let mut codec = Codec::default();
            b.iter(|| black_box(codec.to_bytes_le(black_box(words)).unwrap().len()));
        });

        group.bench_with_input(BenchmarkId::new("pooled_be", count), &words, |b, words| {
            let mut codec = Codec::default();
            b.iter(|| black_box(codec.to_bytes_be(black_box(words)).unwrap().len()));
        });

        group.bench_with_input(BenchmarkId::new("portable_be", count), &words, |b, words| {
            b.iter(|| black_box(portable::to_bytes_be(black_box(words)).len()));
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for len in [3usize, 128, 32 * 1024] {
        let data: Vec<u8> = (0..len).map(|i| (i * 7 + 13) as u8).collect();
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("le", len), &data, |b, data| {
            b.iter(|| black_box(from_bytes_le(black_box(data)).len()));
        });

        group.bench_with_input(BenchmarkId::new("be", len), &data, |b, data| {
            b.iter(|| black_box(from_bytes_be(black_box(data)).len()));
        });

        group.bench_with_input(BenchmarkId::new("portable_be", len), &data, |b, data| {
            b.iter(|| black_box(portable::from_bytes_be(black_box(data)).len()));
        });
    }

    group.finish();
}

fn bench_pool_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_sizes");
    let words = sample_words(4);

    for pool_words in [64usize, 1024, 16 * 1024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(pool_words),
            &pool_words,
            |b, &pool_words| {
                let config = CodecConfig::default().with_pool_words(pool_words);
                let mut codec = Codec::new(config);
                b.iter(|| black_box(codec.to_bytes_le(black_box(&words)).unwrap().len()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_pool_sizes);
criterion_main!(benches);
