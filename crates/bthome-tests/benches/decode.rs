use bthome_decoder::{BtHomeDecoder, VendorDecoder};
use bthome_tests::{HT_SENSOR, KITCHEN_SINK, VENDOR_FULL};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn bench_decode_small(c: &mut Criterion) {
    c.bench_function("decode_small", |b| {
        b.iter(|| BtHomeDecoder::decode(HT_SENSOR).unwrap());
    });
}

fn bench_decode_kitchen_sink(c: &mut Criterion) {
    c.bench_function("decode_kitchen_sink", |b| {
        b.iter(|| BtHomeDecoder::decode(KITCHEN_SINK).unwrap());
    });
}

fn bench_decode_repeated(c: &mut Criterion) {
    // A multi-channel sensor: every reading needs a numbered key.
    let mut payload = vec![0x40];
    for i in 0..16u8 {
        payload.extend_from_slice(&[0x02, i, 0x09]);
    }

    c.bench_function("decode_repeated_names", |b| {
        b.iter(|| BtHomeDecoder::decode(&payload).unwrap());
    });
}

fn bench_vendor(c: &mut Criterion) {
    let mut group = c.benchmark_group("vendor");

    group.bench_function("bytes", |b| {
        b.iter(|| VendorDecoder::decode(VENDOR_FULL).unwrap());
    });
    group.bench_function("hex", |b| {
        let text = hex::encode(VENDOR_FULL);
        b.iter(|| VendorDecoder::decode_hex(&text).unwrap());
    });

    group.finish();
}

fn bench_decode_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_throughput");

    for fields in [4, 32, 80] {
        let mut payload = vec![0x40];
        for i in 0..fields {
            payload.extend_from_slice(&[0x01, i]);
        }

        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("decode", format!("{fields}_fields")),
            &payload,
            |b, p| b.iter(|| BtHomeDecoder::decode(p).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_decode_small,
    bench_decode_kitchen_sink,
    bench_decode_repeated,
    bench_vendor,
    bench_decode_throughput
);
criterion_main!(benches);
