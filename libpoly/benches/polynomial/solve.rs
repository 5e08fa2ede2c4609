#[macro_use]
extern crate criterion;
extern crate libpoly;

use criterion::{black_box, Criterion};
use libpoly::{poly, Polynomial, Precision, Rational};

fn product_of_factors(roots: &[i64]) -> Polynomial {
    roots.iter().fold(Polynomial::constant(1), |p, &r| {
        p.multiply(&poly![(1, 1), (-r, 0)])
    })
}

fn bench_solve(c: &mut Criterion) {
    let cases = [
        ("solve_quadratic", poly![(1, 2), (4, 1), (-3, 0)]),
        ("solve_quartic", product_of_factors(&[1, 2, 3, 4])),
        ("solve_degree_9", poly![(24, 9), (-46, 5), (-8, 1), (-8, 0)]),
        ("solve_degree_10", poly![(10, 10), (34, 6), (-44, 5), (-20, 1), (18, 0)]),
    ];
    for (name, p) in cases.iter() {
        c.bench_function(name, |b| {
            b.iter(|| black_box(p).solve(Precision::default()).unwrap())
        });
    }
}

fn bench_extrema(c: &mut Criterion) {
    let p = product_of_factors(&[-3, -1, 0, 2, 5]);
    c.bench_function("find_minimum", |b| {
        b.iter(|| {
            black_box(&p)
                .find_minimum(-4., 6., Precision::default())
                .unwrap()
        })
    });
}

fn bench_fit_points(c: &mut Criterion) {
    let points: Vec<(Rational, Rational)> = (0i64..8)
        .map(|x| (x.into(), (x * x * x - 4 * x + 1).into()))
        .collect();
    c.bench_function("fit_points_8", |b| {
        b.iter(|| Polynomial::fit_points(black_box(&points)).unwrap())
    });
}

#[cfg(feature = "companion-matrix")]
fn bench_companion_matrix(c: &mut Criterion) {
    let p = poly![(10, 10), (34, 6), (-44, 5), (-20, 1), (18, 0)];
    c.bench_function("solve_degree_10_companion", |b| {
        b.iter(|| {
            black_box(&p)
                .solve_with(&libpoly::CompanionMatrix, Precision::default())
                .unwrap()
        })
    });
}

#[cfg(not(feature = "companion-matrix"))]
criterion_group!(solve_benches, bench_solve, bench_extrema, bench_fit_points);
#[cfg(feature = "companion-matrix")]
criterion_group!(
    solve_benches,
    bench_solve,
    bench_extrema,
    bench_fit_points,
    bench_companion_matrix
);
criterion_main!(solve_benches);
