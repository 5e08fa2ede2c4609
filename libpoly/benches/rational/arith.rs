#[macro_use]
extern crate criterion;
extern crate lazy_static;
extern crate libpoly;

use criterion::{black_box, Criterion};
use lazy_static::lazy_static;
use libpoly::{Precision, Rational};

lazy_static! {
    static ref INPUT: [(Rational, Rational); 4] = [
        (
            "99999999999999999999999999999999/7".parse().unwrap(),
            "999999999999999999999/13".parse().unwrap()
        ),
        ("~5555555555555/7777777".parse().unwrap(), "55555/3".parse().unwrap()),
        ("1/3".parse().unwrap(), "~2/3".parse().unwrap()),
        (
            "~123456789123456789/987654321".parse().unwrap(),
            "~987654321/123456789123456789".parse().unwrap()
        ),
    ];
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("rational_add", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                black_box(u.add(v));
            }
        })
    });
}

fn bench_multiply(c: &mut Criterion) {
    c.bench_function("rational_multiply", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                black_box(u.multiply(v));
            }
        })
    });
}

fn bench_divide(c: &mut Criterion) {
    c.bench_function("rational_divide", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                black_box(u.divide(v).unwrap());
            }
        })
    });
}

fn bench_approximate(c: &mut Criterion) {
    let precision = Precision::default();
    c.bench_function("rational_approximate", |b| {
        b.iter(|| {
            for (u, _) in INPUT.iter() {
                black_box(u.approximate(precision));
            }
        })
    });
}

criterion_group!(
    arith_benches,
    bench_add,
    bench_multiply,
    bench_divide,
    bench_approximate
);
criterion_main!(arith_benches);
