//! Benchmarks for the block cipher and the byte pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use shacal_core::{decrypt_block, encrypt_block, encrypt_bytes, expand_key, ShacalKey, BLOCK_BYTES};

const BENCH_KEY: ShacalKey = ShacalKey([0x00010203, 0x04050607, 0x08090A0B, 0x0C0D0E0F]);

fn bench_expand_key(c: &mut Criterion) {
    c.bench_function("expand_key", |b| {
        b.iter(|| expand_key(black_box(&BENCH_KEY)));
    });
}

fn bench_block(c: &mut Criterion) {
    let round_keys = expand_key(&BENCH_KEY);
    let block = [0x00112233, 0x44556677, 0x8899AABB, 0xCCDDEEFF, 0x01234567];
    let ct = encrypt_block(&block, &round_keys);

    let mut group = c.benchmark_group("single_block");
    group.throughput(Throughput::Bytes(BLOCK_BYTES as u64));
    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(black_box(&block), &round_keys));
    });
    group.bench_function("decrypt_block", |b| {
        b.iter(|| decrypt_block(black_box(&ct), &round_keys));
    });
    group.finish();
}

fn bench_pipeline_scaling(c: &mut Criterion) {
    let sizes: &[usize] = &[1 << 10, 1 << 16, 1 << 20];
    let mut rng = ChaCha20Rng::from_seed([5u8; 32]);

    let mut group = c.benchmark_group("encrypt_bytes");
    for &size in sizes {
        let mut data = vec![0u8; size];
        rng.fill_bytes(&mut data);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encrypt_bytes(black_box(data), &BENCH_KEY).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_expand_key, bench_block, bench_pipeline_scaling);
criterion_main!(benches);
