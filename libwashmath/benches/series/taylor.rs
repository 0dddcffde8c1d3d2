#[macro_use]
extern crate criterion;
extern crate libwashmath;

use criterion::{black_box, Criterion};
use libwashmath::series::{cos, exp, sin, DEFAULT_EXP_TERMS, DEFAULT_TERMS};
use libwashmath::Fraction;

const INPUT: [f64; 4] = [0.25, 1., 3.5, 6.];

fn fractions() -> Vec<Fraction> {
    INPUT.iter().map(|x| Fraction::new(*x, 1).unwrap()).collect()
}

fn bench_sin(c: &mut Criterion) {
    let input = fractions();
    c.bench_function("sin", |b| {
        b.iter(|| {
            for x in input.iter() {
                sin(black_box(x), DEFAULT_TERMS);
            }
        })
    });
}

fn bench_cos(c: &mut Criterion) {
    let input = fractions();
    c.bench_function("cos", |b| {
        b.iter(|| {
            for x in input.iter() {
                cos(black_box(x), DEFAULT_TERMS);
            }
        })
    });
}

fn bench_exp(c: &mut Criterion) {
    let input = fractions();
    c.bench_function("exp", |b| {
        b.iter(|| {
            for x in input.iter() {
                exp(black_box(x), DEFAULT_EXP_TERMS);
            }
        })
    });
}

criterion_group!(series_benches, bench_sin, bench_cos, bench_exp);
criterion_main!(series_benches);
