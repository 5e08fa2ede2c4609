use super::Polynomial;
use crate::{NewtonBisection, PolyResult, Precision, Rational, RootFinder, Term};
use tracing::debug;

impl Polynomial {
    /// Finds the real roots of `self = 0` in ascending order, refining roots that have no
    /// closed form with [NewtonBisection].
    ///
    /// - A constant polynomial (including zero) has no roots.
    /// - A linear polynomial `ax + b` has the single root `-b/a`, computed exactly.
    /// - If every exponent is positive, 0 is a root and the remaining roots are those of the
    ///   polynomial divided by its lowest power of `x`.
    /// - Otherwise roots are located between consecutive critical points; this fails with
    ///   [UnsupportedDomain][crate::PolyError::UnsupportedDomain] for negative or fractional
    ///   exponents.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libpoly::{poly, Precision};
    ///
    /// // x^3 - x
    /// let roots = poly![(1, 3), (-1, 1)].solve(Precision::default()).unwrap();
    /// assert_eq!(roots.len(), 3);
    /// assert!((roots[0] + 1.).abs() < 1e-10);
    /// assert_eq!(roots[1], 0.);
    /// assert!((roots[2] - 1.).abs() < 1e-10);
    /// ```
    pub fn solve(&self, precision: Precision) -> PolyResult<Vec<f64>> {
        self.solve_with(&NewtonBisection, precision)
    }

    /// Like [solve][Polynomial::solve], with the roots that have no closed form found by
    /// `finder`.
    pub fn solve_with(
        &self,
        finder: &dyn RootFinder,
        precision: Precision,
    ) -> PolyResult<Vec<f64>> {
        if self.is_constant() {
            debug!("{} is constant and has no roots", self);
            return Ok(Vec::new());
        }

        if self.is_linear_function() {
            // ax + b = 0 -> x = -b/a, and a is nonzero since the function is not constant.
            let a = self.coefficient(&Rational::one());
            let b = self.coefficient(&Rational::zero());
            let root = b.negate().divide(&a)?;
            debug!("{} is linear with root {}", self, root);
            return Ok(vec![root.approximate(precision)]);
        }

        let least = match self.least_exponent() {
            Some(least) if least.is_positive() => least.clone(),
            _ => {
                debug!("solving {} between critical points", self);
                return finder.general_roots(self, precision);
            }
        };

        debug!("factoring x^{} out of {}", least.to_plain_string(), self);
        let reduced: Polynomial = self
            .terms()
            .map(|t| Term::new(t.coefficient().clone(), t.exponent().subtract(&least)))
            .collect();
        let mut roots = reduced.solve_with(finder, precision)?;
        if self.has_fractional_exponent() {
            // Negative x is outside the real domain of a fractional power.
            roots.retain(|&r| r >= 0.);
        }
        if !roots.contains(&0.) {
            let at = roots.iter().position(|&r| r > 0.).unwrap_or(roots.len());
            roots.insert(at, 0.);
        }
        Ok(roots)
    }

    /// The real roots of the derivative, in ascending order. A linear function has none.
    ///
    /// Fails with [UnsupportedDomain][crate::PolyError::UnsupportedDomain] if any exponent is
    /// negative or fractional.
    pub fn critical_points(&self, precision: Precision) -> PolyResult<Vec<f64>> {
        self.critical_points_with(&NewtonBisection, precision)
    }

    /// Like [critical_points][Polynomial::critical_points], solving the derivative with
    /// `finder`.
    pub fn critical_points_with(
        &self,
        finder: &dyn RootFinder,
        precision: Precision,
    ) -> PolyResult<Vec<f64>> {
        if self.is_linear_function() {
            return Ok(Vec::new());
        }
        self.ensure_natural_exponents("finding critical points")?;
        self.differentiate().solve_with(finder, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{poly, PolyError};

    const EPSILON: f64 = 1.0e-10;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    fn assert_roots(p: &Polynomial, expected: &[f64]) {
        let roots = p.solve(Precision::default()).unwrap();
        assert_eq!(roots.len(), expected.len(), "{}: {:?}", p, roots);
        for (root, expected) in roots.iter().zip(expected) {
            assert!((root - expected).abs() < EPSILON, "{}: {:?}", p, roots);
        }
    }

    #[test]
    fn solve() {
        let sqrt5 = 5f64.sqrt();
        let sqrt7 = 7f64.sqrt();
        let sqrt151 = 151f64.sqrt();
        let sqrt7_3 = (7. / 3f64).sqrt();

        let cases: Vec<(Polynomial, Vec<f64>)> = vec![
            (poly![(42, 0)], vec![]),
            (poly![], vec![]),
            (poly![(1, 1)], vec![0.]),
            (poly![(1, 2)], vec![0.]),
            (poly![(1, 3)], vec![0.]),
            (poly![(1, 1), (5, 0)], vec![-5.]),
            (poly![(r(1, 2), 1), (-10, 0)], vec![20.]),
            (poly![(1, 3), (-1, 1)], vec![-1., 0., 1.]),
            (poly![(1, 4), (-1, 2)], vec![-1., 0., 1.]),
            (poly![(1, 3), (-1, 1), (6, 0)], vec![-2.]),
            (poly![(1, 2), (-5, 0)], vec![-sqrt5, sqrt5]),
            (poly![(1, 2), (5, 0)], vec![]),
            (poly![(1, 2), (4, 1), (-3, 0)], vec![-2. - sqrt7, -2. + sqrt7]),
            (
                poly![(-50, 5), (4, 4), (12, 3)],
                vec![(1. - sqrt151) / 25., 0., (1. + sqrt151) / 25.],
            ),
            (poly![(-3, 6), (7, 4)], vec![-sqrt7_3, 0., sqrt7_3]),
            (poly![(-41, 5)], vec![0.]),
            (poly![(-9, 5), (27, 4), (35, 2)], vec![0., 3.34712220576668]),
            (
                poly![(-22, 9), (-44, 8), (-42, 5), (26, 0)],
                vec![0.80951814578781030844],
            ),
            (
                poly![(1, 6), (-6, 5), (15, 4), (-20, 3), (15, 2), (-6, 1), (1, 0)],
                vec![1.],
            ),
            (
                poly![(10, 10), (34, 6), (-44, 5), (-20, 1), (18, 0)],
                vec![0.72573680828145349032, 1.0255529554167955547],
            ),
            (
                poly![(4, 7), (-30, 5), (-16, 3), (32, 2)],
                vec![
                    -2.8835295885675711490,
                    0.,
                    0.87437087422201568461,
                    2.7649146586482788272,
                ],
            ),
            (
                poly![(24, 9), (-46, 5), (-8, 1), (-8, 0)],
                vec![
                    -1.1806289846042322777,
                    -0.59601270428208455010,
                    1.2169827625444084391,
                ],
            ),
            (
                poly![(1, 4), (-10, 3), (35, 2), (-50, 1), (24, 0)],
                vec![1., 2., 3., 4.],
            ),
            // (x - 1/3)^2 (x + 2)
            (
                poly![(1, 3), (r(4, 3), 2), (r(-11, 9), 1), (r(2, 9), 0)],
                vec![-2., 1. / 3.],
            ),
            (poly![(100, 2), (-20, 1), (1, 0)], vec![0.1]),
            // Fractional powers are not real for negative x.
            (poly![(1, r(5, 2)), (-1, r(1, 2))], vec![0., 1.]),
        ];
        for (p, expected) in cases {
            assert_roots(&p, &expected);
        }
    }

    #[test]
    fn roots_are_ascending_and_distinct() {
        let p = poly![(4, 7), (-30, 5), (-16, 3), (32, 2)];
        let roots = p.solve(Precision::default()).unwrap();
        assert!(roots.windows(2).all(|w| w[0] < w[1]), "{:?}", roots);
    }

    #[test]
    fn fractional_roots_stay_in_the_real_domain() {
        let precision = Precision::default();
        let p = poly![(1, r(5, 2)), (-1, r(1, 2))];
        for root in p.solve(precision).unwrap() {
            assert!(root >= 0., "{}", root);
            assert_eq!(p.evaluate(root, precision), 0.);
        }
    }

    #[test]
    fn linear_roots_are_exact() {
        // -b/a is computed before rounding: 1/3 rounds once.
        assert_eq!(poly![(3, 1), (-1, 0)].solve(Precision::default()), Ok(vec![1. / 3.]));
        assert_eq!(
            poly![(r(-2, 7), 1), (r(4, 21), 0)].solve(Precision::default()),
            Ok(vec![2. / 3.])
        );
    }

    #[test]
    fn solve_rejects_unsupported_exponents() {
        let cases = vec![
            poly![(1, 2), (1, -1)],
            poly![(1, 2), (-1, r(1, 2)), (-1, 0)],
        ];
        for p in cases {
            match p.solve(Precision::default()) {
                Err(PolyError::UnsupportedDomain(_)) => {}
                other => panic!("{}: {:?}", p, other),
            }
        }
    }

    #[test]
    fn critical_points() {
        let p = Precision::default();
        assert_eq!(poly![(3, 1), (1, 0)].critical_points(p), Ok(vec![]));
        assert_eq!(poly![(7, 0)].critical_points(p), Ok(vec![]));
        assert_eq!(poly![(1, 2), (-3, 1), (2, 0)].critical_points(p), Ok(vec![1.5]));

        let cubic = poly![(1, 3), (-1, 1)].critical_points(p).unwrap();
        let root = 1. / 3f64.sqrt();
        assert_eq!(cubic.len(), 2);
        assert!((cubic[0] + root).abs() < EPSILON);
        assert!((cubic[1] - root).abs() < EPSILON);
    }

    #[test]
    fn critical_points_reject_unsupported_exponents() {
        match poly![(1, 2), (1, -2)].critical_points(Precision::default()) {
            Err(PolyError::UnsupportedDomain(msg)) => assert!(msg.contains("negative")),
            other => panic!("{:?}", other),
        }
    }
}
