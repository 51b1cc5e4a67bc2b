//! Decoding throughput for a full hour of ticks.

use bi5::{decode_archive, decode_buffer, PV_DOLLAR_PAIR};
use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::io::BufReader;

const TICKS_PER_HOUR: u32 = 10_000;

fn raw_hour() -> Vec<u8> {
    let mut raw = Vec::with_capacity(TICKS_PER_HOUR as usize * 20);
    for i in 0..TICKS_PER_HOUR {
        raw.extend_from_slice(&(i * 360).to_be_bytes());
        raw.extend_from_slice(&(108_750 + i % 17).to_be_bytes());
        raw.extend_from_slice(&(108_748 + i % 13).to_be_bytes());
        raw.extend_from_slice(&1.5f32.to_be_bytes());
        raw.extend_from_slice(&2.25f32.to_be_bytes());
    }
    raw
}

fn bench_decode(c: &mut Criterion) {
    let hour_start = Utc.with_ymd_and_hms(2012, 11, 3, 1, 0, 0).unwrap();
    let raw = raw_hour();
    let mut compressed = Vec::new();
    lzma_rs::lzma_compress(&mut BufReader::new(raw.as_slice()), &mut compressed).unwrap();

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(TICKS_PER_HOUR as u64));

    group.bench_function("buffer", |b| {
        b.iter(|| decode_buffer(black_box(&raw), hour_start, PV_DOLLAR_PAIR).unwrap())
    });
    group.bench_function("archive", |b| {
        b.iter(|| decode_archive(black_box(&compressed), hour_start, PV_DOLLAR_PAIR).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
