#![no_main]
use libfuzzer_sys::fuzz_target;

use libpoly::{Polynomial, Precision, Rational, Term};

fuzz_target!(|input: &str| {
    let mut parts = input.splitn(2, ':');
    let coefficient = parts.next().and_then(|s| s.parse::<Rational>().ok());
    let exponent = parts.next().and_then(|s| s.parse::<Rational>().ok());

    if let (Some(coefficient), Some(exponent)) = (coefficient, exponent) {
        let p = Polynomial::new()
            .add_term(Term::new(coefficient, exponent))
            .add_term(Term::new(1, 0));
        let precision = Precision::default();
        let _ = p.to_string();
        let _ = p.differentiate();
        let _ = p.integrate();
        let _ = p.evaluate(0.5, precision);
        let _ = p.evaluate(f64::NEG_INFINITY, precision);
    }
});
