use super::Polynomial;
use crate::{Precision, Term};

impl Polynomial {
    /// Evaluates the polynomial at `x`.
    ///
    /// - The zero polynomial is 0 everywhere.
    /// - If `x` is negative and any exponent is fractional, the value is complex and NaN is
    ///   returned. This includes `x = -∞`.
    /// - At `x = ±∞` the value is the limit, governed by the [dominant
    ///   term][Polynomial::dominant_term].
    /// - At `x = 0` with any negative exponent the polynomial is undefined and NaN is returned.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libpoly::{poly, Precision};
    ///
    /// let p = poly![(1, 3), (-1, 1)];
    /// assert_eq!(p.evaluate(2., Precision::default()), 6.);
    /// assert_eq!(p.evaluate(f64::NEG_INFINITY, Precision::default()), f64::NEG_INFINITY);
    /// ```
    pub fn evaluate(&self, x: f64, precision: Precision) -> f64 {
        let dominant = match self.dominant_term() {
            Some(term) => term,
            None => return 0.,
        };

        if x.is_nan() || (x < 0. && self.has_fractional_exponent()) {
            return f64::NAN;
        }
        if x.is_infinite() {
            return limit_at_infinity(dominant, x.is_sign_positive(), precision);
        }
        if x == 0. && self.has_negative_exponent() {
            return f64::NAN;
        }

        self.terms().map(|t| t.evaluate(x, precision)).sum()
    }
}

fn limit_at_infinity(dominant: &Term, positive: bool, precision: Precision) -> f64 {
    let exponent = dominant.exponent();
    if exponent.is_negative() {
        return 0.;
    }
    if exponent.is_zero() {
        return dominant.coefficient().approximate(precision);
    }

    // At -∞ only whole exponents reach here; an odd one flips the sign.
    let mut sign = dominant.coefficient().sign();
    if !positive && exponent.is_odd_integer() {
        sign = -sign;
    }
    if sign < 0 {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}
