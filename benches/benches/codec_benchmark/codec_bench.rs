use std::{hint::black_box, io::Cursor};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sdriq_core::{HeaderCodec, HeaderRecord, IntegrityGuard, StreamTranscoder};

fn bench_header(c: &mut Criterion) {
    let record = HeaderRecord::new(75_000, 435_000_000, 1_539_083_921_000, 16).recompute();
    let bytes = record.encode();

    c.bench_function("header_decode", |b| {
        b.iter(|| HeaderRecord::decode(black_box(&bytes)))
    });
    c.bench_function("header_encode", |b| b.iter(|| black_box(&record).encode()));
    c.bench_function("header_recompute", |b| {
        b.iter(|| black_box(&record).recompute())
    });
}

fn bench_copy(c: &mut Criterion) {
    let payload = vec![0x5Au8; 16 * 1024 * 1024];
    let mut group = c.benchmark_group("payload_copy");
    group.throughput(Throughput::Bytes(payload.len() as u64));

    for blocks in [1u32, 16, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(blocks), &blocks, |b, &blocks| {
            let mut transcoder = StreamTranscoder::with_blocks(blocks).unwrap();
            let mut out = Vec::with_capacity(payload.len());
            b.iter(|| {
                out.clear();
                transcoder
                    .copy(&mut Cursor::new(&payload), &mut out)
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_header, bench_copy);
criterion_main!(benches);
