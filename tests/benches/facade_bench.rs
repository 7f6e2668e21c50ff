use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecbridge::prelude::*;

const SECP256K1_ID: u32 = 1;

fn bench_operations(c: &mut Criterion) {
    let mut key = [0u8; 32];
    key[31] = 0x42;
    let public = compute_public_key(&key, SECP256K1_ID).unwrap();
    let digest = [0xA7u8; 32];

    c.bench_function("compute_public_key/secp256k1", |b| {
        b.iter(|| compute_public_key(black_box(&key), SECP256K1_ID).unwrap())
    });

    c.bench_function("compress_public_key/secp256k1", |b| {
        b.iter(|| compress_public_key(black_box(public.as_ref()), SECP256K1_ID).unwrap())
    });

    c.bench_function("generate_shared_secret/secp256k1", |b| {
        b.iter(|| generate_shared_secret(black_box(&key), public.as_ref(), SECP256K1_ID).unwrap())
    });

    c.bench_function("sign_message_digest/secp256k1", |b| {
        b.iter(|| sign_message_digest(black_box(&key), &digest, SECP256K1_ID).unwrap())
    });

    c.bench_function("verify_public_key/secp256k1", |b| {
        b.iter(|| verify_public_key(black_box(public.as_ref()), SECP256K1_ID).unwrap())
    });
}

criterion_group!(benches, bench_operations);
criterion_main!(benches);
