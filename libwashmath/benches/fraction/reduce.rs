#[macro_use]
extern crate criterion;
extern crate libwashmath;

use criterion::{black_box, Criterion};
use libwashmath::{Fraction, FractionOptions};

macro_rules! bench_product {
    ($($name: ident: $len: expr)*) => {
        $(
        fn $name(c: &mut Criterion) {
            let factors: Vec<Fraction> = (1..=$len as i64)
                .map(|i| Fraction::new(i, i + 1).unwrap())
                .collect();
            c.bench_function(concat!("reduced_product_", $len), |b| {
                b.iter(|| black_box(&factors).iter().product::<Fraction>())
            });
            c.bench_function(concat!("unreduced_product_", $len), |b| {
                b.iter(|| {
                    let mut acc =
                        Fraction::with_options(1, 1, FractionOptions::unreduced()).unwrap();
                    for factor in black_box(&factors) {
                        acc *= factor;
                    }
                    acc.reduce().clone()
                })
            });
        }
    )*
    }
}

bench_product! {
    len_64: 64
    len_256: 256
    len_1024: 1024
}

criterion_group!(reduce_benches, len_64, len_256, len_1024);
criterion_main!(reduce_benches);
