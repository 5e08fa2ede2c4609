use super::Polynomial;
use crate::{PolyError, PolyResult, Precision};
use tracing::debug;

impl Polynomial {
    /// The x-coordinate of the global minimum over `[domain_min, domain_max]`. Either bound
    /// may be infinite, in which case the limit there takes part in the comparison.
    ///
    /// Candidates are the two bounds and the critical points strictly between them. The first
    /// candidate with the least value wins, so a constant polynomial reports `domain_min`.
    ///
    /// Fails with [MalformedInput][PolyError::MalformedInput] if a bound is NaN or the bounds
    /// are out of order, and with [UnsupportedDomain][PolyError::UnsupportedDomain] if
    /// critical points cannot be found for this polynomial.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libpoly::{poly, Precision};
    ///
    /// // x^2 - 3x + 2 bottoms out at x = 1.5
    /// let p = poly![(1, 2), (-3, 1), (2, 0)];
    /// let x = p.find_minimum(f64::NEG_INFINITY, f64::INFINITY, Precision::default()).unwrap();
    /// assert_eq!(x, 1.5);
    /// ```
    pub fn find_minimum(
        &self,
        domain_min: f64,
        domain_max: f64,
        precision: Precision,
    ) -> PolyResult<f64> {
        self.find_extremum(domain_min, domain_max, precision, |y, best| y < best)
    }

    /// The x-coordinate of the global maximum over `[domain_min, domain_max]`; see
    /// [find_minimum][Polynomial::find_minimum].
    pub fn find_maximum(
        &self,
        domain_min: f64,
        domain_max: f64,
        precision: Precision,
    ) -> PolyResult<f64> {
        self.find_extremum(domain_min, domain_max, precision, |y, best| y > best)
    }

    fn find_extremum(
        &self,
        domain_min: f64,
        domain_max: f64,
        precision: Precision,
        better: impl Fn(f64, f64) -> bool,
    ) -> PolyResult<f64> {
        if domain_min.is_nan() || domain_max.is_nan() || domain_min > domain_max {
            return Err(PolyError::malformed(format!(
                "[{}, {}] is not a domain",
                domain_min, domain_max
            )));
        }

        let critical = self.critical_points(precision)?;
        let interior = critical
            .into_iter()
            .filter(|&x| domain_min < x && x < domain_max);
        let candidates = Some(domain_min)
            .into_iter()
            .chain(interior)
            .chain(Some(domain_max));

        let mut best: Option<(f64, f64)> = None;
        for x in candidates {
            let y = self.evaluate(x, precision);
            let replace = match best {
                None => true,
                Some((_, best_y)) => !y.is_nan() && (best_y.is_nan() || better(y, best_y)),
            };
            if replace {
                best = Some((x, y));
            }
        }

        debug!(?best, "extremum of {} on [{}, {}]", self, domain_min, domain_max);
        Ok(best.map_or(domain_min, |(x, _)| x))
    }
}
