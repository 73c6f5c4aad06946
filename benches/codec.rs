// benches/codec.rs
//! Codec throughput benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use secretdec_rs::{BASE32, BASE64, HEX};
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn format_size(bytes: usize) -> String {
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for &size in &[KB, 64 * KB, MB] {
        let input = vec![0x41u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        for (name, alphabet) in [("base64", &BASE64), ("base32", &BASE32), ("hex", &HEX)] {
            group.bench_with_input(
                BenchmarkId::new(name, format_size(size)),
                &input,
                |b, input| b.iter(|| black_box(alphabet.encode(black_box(input), false))),
            );
        }
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for &size in &[KB, 64 * KB, MB] {
        let input = vec![0x41u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        for (name, alphabet) in [("base64", &BASE64), ("base32", &BASE32), ("hex", &HEX)] {
            let encoded = alphabet.encode(&input, false);
            group.bench_with_input(
                BenchmarkId::new(name, format_size(size)),
                &encoded,
                |b, encoded| b.iter(|| black_box(alphabet.decode(black_box(encoded)).unwrap())),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
