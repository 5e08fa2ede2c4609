use super::Polynomial;
use crate::{PolyError, PolyResult, Rational, Term};
use std::collections::HashSet;

impl Polynomial {
    /// Fits the unique polynomial of degree at most `n - 1` through `n` points with distinct
    /// x-coordinates, using Neville's scheme over exact rationals.
    ///
    /// Fails with [DuplicateAbscissa][PolyError::DuplicateAbscissa] if two points share an
    /// x-coordinate. No points fit the zero polynomial.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libpoly::{poly, Polynomial, Rational};
    ///
    /// let points: Vec<(Rational, Rational)> = vec![(0, 2), (1, 0), (2, 0)]
    ///     .into_iter()
    ///     .map(|(x, y)| (x.into(), y.into()))
    ///     .collect();
    /// // (x - 1)(x - 2)
    /// assert_eq!(Polynomial::fit_points(&points).unwrap(), poly![(1, 2), (-3, 1), (2, 0)]);
    /// ```
    pub fn fit_points(points: &[(Rational, Rational)]) -> PolyResult<Polynomial> {
        let mut seen = HashSet::with_capacity(points.len());
        for (x, _) in points {
            if !seen.insert(x) {
                return Err(PolyError::DuplicateAbscissa(x.clone()));
            }
        }

        // layer[i] interpolates points i..=i+width.
        let mut layer: Vec<Polynomial> = points
            .iter()
            .map(|(_, y)| Polynomial::constant(y.clone()))
            .collect();
        for width in 1..points.len() {
            let mut next = Vec::with_capacity(layer.len() - 1);
            for (i, pair) in layer.windows(2).enumerate() {
                let xi = &points[i].0;
                let xj = &points[i + width].0;
                // (xj - x) * p[i..j-1] + (x - xi) * p[i+1..j], all over (xj - xi)
                let left = Polynomial::new()
                    .add_term(Term::new(-1, 1))
                    .add_term(Term::new(xj.clone(), 0));
                let right = Polynomial::new()
                    .add_term(Term::new(1, 1))
                    .add_term(Term::new(xi.negate(), 0));
                let scale = xj.subtract(xi).invert()?;
                next.push(
                    left.multiply(&pair[0])
                        .add(&right.multiply(&pair[1]))
                        .scale(&scale),
                );
            }
            layer = next;
        }

        Ok(layer.into_iter().next().unwrap_or_default())
    }

    /// Like [fit_points][Polynomial::fit_points], with the points given as a flat
    /// `x0, y0, x1, y1, ...` sequence. Fails with [MalformedInput][PolyError::MalformedInput]
    /// if the sequence has odd length.
    pub fn fit_flat_points(coordinates: &[Rational]) -> PolyResult<Polynomial> {
        if coordinates.len() % 2 != 0 {
            return Err(PolyError::malformed(format!(
                "{} coordinates do not form (x, y) pairs",
                coordinates.len()
            )));
        }
        let points: Vec<_> = coordinates
            .chunks(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect();
        Self::fit_points(&points)
    }
}
