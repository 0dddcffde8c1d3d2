#[macro_use]
extern crate criterion;
extern crate libwashmath;

use criterion::{black_box, Criterion};
use libwashmath::{gcd, lcm};
use num_bigint::BigInt;

const INPUT: [(i64, i64); 3] = [
    (288_481, 22_783),
    (939_841_321, 28_847_717),
    (48_812, 284_829),
];

fn bench_gcd_i64(c: &mut Criterion) {
    c.bench_function("gcd_i64", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                gcd(black_box(u), black_box(v));
            }
        })
    });
}

fn bench_gcd_bigint(c: &mut Criterion) {
    let input: Vec<(BigInt, BigInt)> = INPUT
        .iter()
        .map(|(u, v)| (num_traits::pow(BigInt::from(*u), 20), num_traits::pow(BigInt::from(*v), 20)))
        .collect();
    c.bench_function("gcd_bigint", |b| {
        b.iter(|| {
            for (u, v) in input.iter() {
                gcd(black_box(u), black_box(v));
            }
        })
    });
}

fn bench_lcm_bigint(c: &mut Criterion) {
    let input: Vec<(BigInt, BigInt)> = INPUT
        .iter()
        .map(|(u, v)| (BigInt::from(*u), BigInt::from(*v)))
        .collect();
    c.bench_function("lcm_bigint", |b| {
        b.iter(|| {
            for (u, v) in input.iter() {
                lcm(black_box(u), black_box(v));
            }
        })
    });
}

criterion_group!(gcd_benches, bench_gcd_i64, bench_gcd_bigint, bench_lcm_bigint);
criterion_main!(gcd_benches);
