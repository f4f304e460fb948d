//! Codec benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphene_codec::core::varint;
use graphene_codec::{BinaryReader, CodecConfig, Encoded, Mode, TimePointSec};
use graphene_codec_testkit::fixtures::{
    vesting_policy_codec, LinearVestingPolicyInitializer, VestingPolicyInitializer,
};

fn bench_varint(c: &mut Criterion) {
    let mut group = c.benchmark_group("varint");
    for value in [0u64, 300, u32::MAX as u64, u64::MAX] {
        group.bench_with_input(BenchmarkId::new("write", value), &value, |b, &value| {
            let mut buf = Vec::with_capacity(varint::MAX_LEN);
            b.iter(|| {
                buf.clear();
                varint::write(black_box(value), &mut buf);
            })
        });

        let mut encoded = Vec::new();
        varint::write(value, &mut encoded);
        group.bench_with_input(BenchmarkId::new("read", value), &encoded, |b, encoded| {
            b.iter(|| {
                let mut slice = black_box(encoded.as_slice());
                varint::read(&mut slice)
            })
        });
    }
    group.finish();
}

fn bench_static_variant(c: &mut Criterion) {
    let codec = vesting_policy_codec();
    let value = VestingPolicyInitializer::Linear(LinearVestingPolicyInitializer {
        begin_timestamp: TimePointSec(1_600_000_000),
        vesting_cliff_seconds: 86_400,
        vesting_duration_seconds: 31_536_000,
    });

    let mut group = c.benchmark_group("static_variant");
    group.bench_function("encode_binary", |b| {
        let mut buf = Vec::with_capacity(32);
        b.iter(|| {
            buf.clear();
            codec.encode_binary(black_box(&value), &mut buf)
        })
    });

    let mut bytes = Vec::new();
    codec.encode_binary(&value, &mut bytes).unwrap();
    let config = CodecConfig::default();
    group.bench_function("decode_binary", |b| {
        b.iter(|| {
            let mut reader = BinaryReader::new(black_box(&bytes), &config);
            codec.decode_binary(&mut reader)
        })
    });

    group.bench_function("encode_text", |b| {
        b.iter(|| codec.encode(black_box(&value), Mode::Textual))
    });

    let text = codec.encode(&value, Mode::Textual).unwrap();
    group.bench_function("decode_text", |b| {
        b.iter(|| codec.decode(black_box(&text)))
    });

    let binary: Encoded = codec.encode(&value, Mode::Binary).unwrap();
    group.bench_function("decode", |b| b.iter(|| codec.decode(black_box(&binary))));
    group.finish();
}

criterion_group!(benches, bench_varint, bench_static_variant);
criterion_main!(benches);
