#[macro_use]
extern crate criterion;
extern crate libpoly;

use criterion::{black_box, Criterion};
use libpoly::Rational;

/// Two nearby fractions whose numerators and denominators have `digits` decimal digits.
fn close_pair(digits: usize) -> (Rational, Rational) {
    let nines = String::from_utf8(vec![b'9'; digits]).unwrap();
    let eights = String::from_utf8(vec![b'8'; digits]).unwrap();
    let u = format!("{}/{}", nines, eights).parse().unwrap();
    let v = format!("{}/{}", eights, nines).parse::<Rational>().unwrap().invert().unwrap();
    (u, v)
}

macro_rules! bench_rational_cmp {
    ($($name: ident: $size: expr)*)=> {
        $(
        fn $name(c: &mut Criterion) {
            let (u, v) = close_pair($size);
            c.bench_function(concat!("Rational_", $size, "_cmp"), |b| {
                b.iter(|| black_box(&u).cmp(black_box(&v)))
            });
            let w = u.negate();
            c.bench_function(concat!("Rational_", $size, "_cmp_signs"), |b| {
                b.iter(|| black_box(&w).cmp(black_box(&v)))
            });
        }
    )*
    }
}

bench_rational_cmp! {
    size_64: 64
    size_256: 256
    size_1024: 1024
}

criterion_group!(rational_cmp_benches, size_64, size_256, size_1024);
criterion_main!(rational_cmp_benches);
