//! Strategies for the roots [Polynomial::solve] cannot find in closed form.

use crate::{PolyResult, Polynomial, Precision, Rational, Term};
use core::iter;
use tracing::trace;

/// Locates the real roots of a polynomial that is not constant, not linear, and has a nonzero
/// constant term.
pub trait RootFinder {
    /// The distinct real roots of `polynomial`, in ascending order.
    fn general_roots(&self, polynomial: &Polynomial, precision: Precision) -> PolyResult<Vec<f64>>;
}

/// Brackets roots between consecutive critical points and refines each bracket with Newton's
/// method, falling back to bisection.
///
/// Between two consecutive critical points a polynomial is monotonic, so it crosses zero at
/// most once there, and does so exactly when the values at the span's ends differ in sign.
/// Unbounded outer spans are clamped to the Cauchy bound `1 + max |a_i / a_n|`, beyond which
/// no root lies.
///
/// Each refinement step keeps a bracket `[lo, hi]` with a sign change. A Newton step that
/// leaves the bracket, produces NaN, or fails to halve the bracket within a few steps is
/// replaced by a bisection, so the bracket always shrinks and the loop always terminates.
#[derive(Copy, Clone, Debug, Default)]
pub struct NewtonBisection;

/// Number of consecutive Newton steps allowed to shrink the bracket by less than half.
const MAX_SLOW_STEPS: usize = 2;

fn sign(y: f64) -> Option<i32> {
    if y > 0. {
        Some(1)
    } else if y < 0. {
        Some(-1)
    } else {
        None
    }
}

fn cauchy_bound(polynomial: &Polynomial, precision: Precision) -> f64 {
    let mut terms = polynomial.terms();
    let lead = match terms.next() {
        Some(t) => t.coefficient(),
        None => return 0.,
    };
    let max = terms
        .filter_map(|t| t.coefficient().divide(lead).ok())
        .map(|q| q.abs())
        .max()
        .unwrap_or_default();
    let bound = Rational::one().add(&max).approximate(precision);
    if bound.is_finite() {
        bound
    } else {
        f64::MAX
    }
}

/// `sum |a_i| * |x|^e_i`, the scale of the rounding error in evaluating `polynomial` at `x`.
fn magnitude(polynomial: &Polynomial, x: f64, precision: Precision) -> f64 {
    polynomial
        .terms()
        .map(|t| Term::new(t.coefficient().abs(), t.exponent().clone()))
        .map(|t| t.evaluate(x.abs(), precision))
        .sum()
}

/// A first guess inside `(begin, end)`, either side of which may be infinite.
fn division_point(begin: f64, end: f64) -> f64 {
    match (begin.is_infinite(), end.is_infinite()) {
        (true, true) => 0.,
        (true, false) => end - 1.,
        (false, true) => begin + 1.,
        (false, false) => begin / 2. + end / 2.,
    }
}

impl NewtonBisection {
    /// Refines the single root inside the span `(begin, end)`, whose ends have signs
    /// `begin_sign` and `-begin_sign`.
    fn refine(
        &self,
        polynomial: &Polynomial,
        derivative: &Polynomial,
        (begin, end): (f64, f64),
        begin_sign: i32,
        bound: f64,
        precision: Precision,
    ) -> Option<f64> {
        let tolerance = precision.tolerance;
        let mut lo = begin.max(-bound);
        let mut hi = end.min(bound);
        if !(lo < hi) {
            return None;
        }

        let mut x = division_point(begin, end);
        if !(lo < x && x < hi) {
            x = lo / 2. + hi / 2.;
        }

        let mut checkpoint = hi - lo;
        let mut slow_steps = 0;
        let mut force_bisect = false;
        loop {
            let width = hi - lo;
            if width < tolerance || width < tolerance * x.abs() {
                return Some(x);
            }

            let y = polynomial.evaluate(x, precision);
            trace!(x, y, lo, hi, "newton step");
            if y == 0. {
                return Some(x);
            }
            // Intermediate overflow; far from zero the dominant term decides the sign.
            let y_sign = sign(y).unwrap_or(if lo.abs() > hi.abs() {
                begin_sign
            } else {
                -begin_sign
            });
            if y_sign == begin_sign {
                lo = x;
            } else {
                hi = x;
            }

            let width = hi - lo;
            if width <= checkpoint / 2. {
                checkpoint = width;
                slow_steps = 0;
            } else {
                slow_steps += 1;
                if slow_steps > MAX_SLOW_STEPS {
                    force_bisect = true;
                }
            }

            let mut next = x - y / derivative.evaluate(x, precision);
            if (next - x).abs() < tolerance {
                return Some(x);
            }
            if force_bisect || next.is_nan() || next <= lo || next >= hi {
                next = lo / 2. + hi / 2.;
                if !(lo < next && next < hi) {
                    return Some(x);
                }
                force_bisect = false;
                slow_steps = 0;
                checkpoint = hi - lo;
            }
            x = next;
        }
    }
}

impl RootFinder for NewtonBisection {
    fn general_roots(&self, polynomial: &Polynomial, precision: Precision) -> PolyResult<Vec<f64>> {
        let critical = polynomial.critical_points_with(self, precision)?;
        let derivative = polynomial.differentiate();
        let bound = cauchy_bound(polynomial, precision);

        // A critical point whose value is lost in rounding is a multiple root. Its sign is
        // noise, so it brackets nothing on either side.
        let value = |x: f64| {
            let y = polynomial.evaluate(x, precision);
            let noise = precision.tolerance * magnitude(polynomial, x, precision);
            if x.is_finite() && y.abs() <= noise {
                0.
            } else {
                y
            }
        };

        let mut roots = Vec::new();
        let mut begin = f64::NEG_INFINITY;
        let mut begin_y = value(begin);
        for end in critical.into_iter().chain(iter::once(f64::INFINITY)) {
            let end_y = value(end);
            if begin.is_finite() && begin_y == 0. {
                roots.push(begin);
            }
            if let (Some(begin_sign), Some(end_sign)) = (sign(begin_y), sign(end_y)) {
                if begin_sign != end_sign {
                    let span = (begin, end);
                    if let Some(root) =
                        self.refine(polynomial, &derivative, span, begin_sign, bound, precision)
                    {
                        roots.push(root);
                    }
                }
            }
            begin = end;
            begin_y = end_y;
        }
        let tolerance = precision.tolerance;
        roots.dedup_by(|b, a| (*b - *a).abs() <= tolerance * a.abs().max(1.));
        Ok(roots)
    }
}

#[cfg(feature = "companion-matrix")]
pub use companion::CompanionMatrix;

#[cfg(feature = "companion-matrix")]
mod companion {
    use super::RootFinder;
    use crate::{PolyResult, Polynomial, Precision, Rational};
    use core::convert::TryFrom;
    use nalgebra::DMatrix;

    /// Newton steps applied to each eigenvalue.
    const POLISH_STEPS: usize = 8;

    /// Finds roots as the real eigenvalues of the polynomial's companion matrix, polished with
    /// a few Newton steps.
    ///
    /// Only polynomials with non-negative whole exponents have a companion matrix.
    #[derive(Copy, Clone, Debug, Default)]
    pub struct CompanionMatrix;

    impl RootFinder for CompanionMatrix {
        fn general_roots(
            &self,
            polynomial: &Polynomial,
            precision: Precision,
        ) -> PolyResult<Vec<f64>> {
            polynomial.ensure_natural_exponents("companion-matrix root finding")?;
            let n = usize::try_from(&polynomial.degree())?;
            if n == 0 {
                return Ok(Vec::new());
            }

            let lead = polynomial.coefficient(&Rational::from(n));
            let mut companion = DMatrix::<f64>::zeros(n, n);
            for i in 0..n {
                let a = polynomial.coefficient(&Rational::from(i));
                companion[(i, n - 1)] = -a.divide(&lead)?.approximate(precision);
            }
            for i in 1..n {
                companion[(i, i - 1)] = 1.;
            }

            let derivative = polynomial.differentiate();
            let imaginary_tolerance = precision.tolerance.sqrt();
            let mut roots: Vec<f64> = companion
                .complex_eigenvalues()
                .iter()
                .filter(|z| z.im.abs() <= imaginary_tolerance * z.re.abs().max(1.))
                .map(|z| {
                    let mut x = z.re;
                    for _ in 0..POLISH_STEPS {
                        let step =
                            polynomial.evaluate(x, precision) / derivative.evaluate(x, precision);
                        if !step.is_finite() || step.abs() < precision.tolerance {
                            break;
                        }
                        x -= step;
                    }
                    x
                })
                .collect();

            roots.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
            roots.dedup_by(|a, b| (*a - *b).abs() <= imaginary_tolerance * a.abs().max(1.));
            Ok(roots)
        }
    }

}
