use super::Polynomial;
use crate::{PolyError, PolyResult, Rational, Term};

impl Polynomial {
    /// Returns the derivative.
    ///
    /// Constant terms vanish entirely; no zero term is left behind.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libpoly::poly;
    ///
    /// // 3x^2 + 2x + 7 -> 6x + 2
    /// assert_eq!(poly![(3, 2), (2, 1), (7, 0)].differentiate(), poly![(6, 1), (2, 0)]);
    /// ```
    pub fn differentiate(&self) -> Polynomial {
        let one = Rational::one();
        self.terms()
            .filter(|t| !t.exponent().is_zero())
            .map(|t| {
                Term::new(
                    t.coefficient().multiply(t.exponent()),
                    t.exponent().subtract(&one),
                )
            })
            .collect()
    }

    /// Returns an antiderivative. The constant of integration is not modeled, so the result
    /// stands for "this, plus an unknown constant".
    ///
    /// Fails with [UnsupportedDomain][PolyError::UnsupportedDomain] if a term has exponent
    /// -1, whose antiderivative is logarithmic.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libpoly::{poly, Rational};
    ///
    /// // 4x^(1/3) -> 3x^(4/3)
    /// let third = Rational::new(1, 3).unwrap();
    /// let four_thirds = Rational::new(4, 3).unwrap();
    /// assert_eq!(poly![(4, third)].integrate().unwrap(), poly![(3, four_thirds)]);
    /// ```
    pub fn integrate(&self) -> PolyResult<Polynomial> {
        let one = Rational::one();
        self.terms()
            .map(|t| {
                let exponent = t.exponent().add(&one);
                if exponent.is_zero() {
                    return Err(PolyError::unsupported(format!(
                        "the antiderivative of {} is logarithmic",
                        t
                    )));
                }
                let coefficient = t.coefficient().divide(&exponent)?;
                Ok(Term::new(coefficient, exponent))
            })
            .collect()
    }
}
