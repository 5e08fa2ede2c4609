#![allow(clippy::should_implement_trait)]

use crate::{PolyError, PolyResult, Precision, Rational};
use core::cmp::Ordering;
use core::convert::TryFrom;
use core::fmt;

/// A monomial `coefficient * x^exponent` with exact rational coefficient and exponent.
///
/// Terms compare equal only if both their coefficients and exponents are equal. Polynomials
/// order their terms by exponent alone; see [cmp_exponent][Term::cmp_exponent].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Term {
    coefficient: Rational,
    exponent: Rational,
}

impl<C, E> From<(C, E)> for Term
where
    C: Into<Rational>,
    E: Into<Rational>,
{
    fn from((coefficient, exponent): (C, E)) -> Term {
        Term::new(coefficient, exponent)
    }
}

impl Term {
    pub fn new(coefficient: impl Into<Rational>, exponent: impl Into<Rational>) -> Self {
        Self {
            coefficient: coefficient.into(),
            exponent: exponent.into(),
        }
    }

    #[inline]
    pub fn coefficient(&self) -> &Rational {
        &self.coefficient
    }

    #[inline]
    pub fn exponent(&self) -> &Rational {
        &self.exponent
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Adds two like terms.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libpoly::{PolyError, Term};
    ///
    /// // 2x^2 + 3x^2 -> 5x^2
    /// assert_eq!(Term::new(2, 2).add(&Term::new(3, 2)), Ok(Term::new(5, 2)));
    ///
    /// // 2x^2 + 3x is not a term
    /// assert!(matches!(
    ///     Term::new(2, 2).add(&Term::new(3, 1)),
    ///     Err(PolyError::MismatchedExponent { .. })
    /// ));
    /// ```
    pub fn add(&self, other: &Term) -> PolyResult<Term> {
        if self.exponent != other.exponent {
            return Err(PolyError::MismatchedExponent {
                lhs: self.exponent.clone(),
                rhs: other.exponent.clone(),
            });
        }
        Ok(Term {
            coefficient: self.coefficient.add(&other.coefficient),
            exponent: self.exponent.clone(),
        })
    }

    /// Multiplies two terms: coefficients multiply, exponents add.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libpoly::Term;
    ///
    /// // 2x^2 * -3x -> -6x^3
    /// assert_eq!(Term::new(2, 2).multiply(&Term::new(-3, 1)), Term::new(-6, 3));
    /// ```
    pub fn multiply(&self, other: &Term) -> Term {
        Term {
            coefficient: self.coefficient.multiply(&other.coefficient),
            exponent: self.exponent.add(&other.exponent),
        }
    }

    pub fn negate(&self) -> Term {
        Term {
            coefficient: self.coefficient.negate(),
            exponent: self.exponent.clone(),
        }
    }

    /// Orders terms by exponent only.
    pub fn cmp_exponent(&self, other: &Term) -> Ordering {
        self.exponent.cmp(&other.exponent)
    }

    /// Evaluates `coefficient * x^exponent` in floating point.
    ///
    /// This is the only place approximate arithmetic enters polynomial evaluation. Whole
    /// exponents use repeated multiplication; others go through `powf`, so a negative `x` with
    /// a fractional exponent yields NaN.
    pub fn evaluate(&self, x: f64, precision: Precision) -> f64 {
        let coefficient = self.coefficient.approximate(precision);
        let power = match i32::try_from(&self.exponent) {
            Ok(e) => x.powi(e),
            Err(_) => x.powf(self.exponent.approximate(precision)),
        };
        coefficient * power
    }
}

/// Renders `±N[/D]x^M[/D]`: a zero exponent drops `x`, an exponent of one drops `^1`, and a
/// coefficient of magnitude one is omitted unless the exponent is zero.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.coefficient.is_negative() { '-' } else { '+' };
        let magnitude = self.coefficient.abs();
        write!(f, "{}", sign)?;

        if self.exponent.is_zero() {
            return write!(f, "{}", magnitude.to_plain_string());
        }
        if !magnitude.is_one() {
            write!(f, "{}", magnitude.to_plain_string())?;
        }
        write!(f, "x")?;
        if !self.exponent.is_one() {
            write!(f, "^{}", self.exponent.to_plain_string())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn add_like_terms() {
        assert_eq!(Term::new(2, 3).add(&Term::new(-5, 3)), Ok(Term::new(-3, 3)));
        assert_eq!(
            Term::new(r(1, 2), r(1, 2)).add(&Term::new(r(1, 3), r(2, 4))),
            Ok(Term::new(r(5, 6), r(1, 2)))
        );
        assert!(Term::new(2, 3).add(&Term::new(-2, 3)).unwrap().is_zero());
    }

    #[test]
    fn add_mismatched_exponents() {
        assert_eq!(
            Term::new(2, 3).add(&Term::new(2, 2)),
            Err(PolyError::MismatchedExponent {
                lhs: Rational::from(3),
                rhs: Rational::from(2),
            })
        );
    }

    #[test]
    fn multiply() {
        assert_eq!(
            Term::new(r(1, 2), r(1, 3)).multiply(&Term::new(4, r(2, 3))),
            Term::new(2, 1)
        );
        assert_eq!(Term::new(3, 2).multiply(&Term::new(1, -2)), Term::new(3, 0));
    }

    #[test]
    fn orders_by_exponent_only() {
        assert_eq!(Term::new(100, 1).cmp_exponent(&Term::new(1, 2)), Ordering::Less);
        assert_eq!(Term::new(-1, 2).cmp_exponent(&Term::new(1, 2)), Ordering::Equal);
        assert_eq!(Term::new(1, r(1, 2)).cmp_exponent(&Term::new(1, r(1, 3))), Ordering::Greater);
        assert_ne!(Term::new(-1, 2), Term::new(1, 2));
    }

    #[test]
    fn evaluate() {
        let p = Precision::default();
        assert_eq!(Term::new(4, 3).evaluate(10., p), 4000.);
        assert_eq!(Term::new(r(1, 2), 3).evaluate(10., p), 500.);
        assert_eq!(Term::new(2, r(1, 2)).evaluate(4., p), 4.);
        assert_eq!(Term::new(-2, 2).evaluate(2., p), -8.);
        assert_eq!(Term::new(2, -2).evaluate(2., p), 0.5);
        assert_eq!(Term::new(2, 0).evaluate(0., p), 2.);
        assert_eq!(Term::new(3, 3).evaluate(-2., p), -24.);
        assert!(Term::new(1, r(1, 2)).evaluate(-4., p).is_nan());
    }

    #[test]
    fn display() {
        let cases = [
            (Term::new(2, 2), "+2x^2"),
            (Term::new(-3, 1), "-3x"),
            (Term::new(5, 0), "+5"),
            (Term::new(1, 0), "+1"),
            (Term::new(-1, 0), "-1"),
            (Term::new(1, 1), "+x"),
            (Term::new(-1, 1), "-x"),
            (Term::new(-1, 4), "-x^4"),
            (Term::new(r(3, 4), r(1, 2)), "+3/4x^1/2"),
            (Term::new(r(-3, 4), r(-5, 2)), "-3/4x^-5/2"),
            (Term::new(7, -1), "+7x^-1"),
        ];
        for (term, expected) in cases.iter() {
            assert_eq!(term.to_string(), *expected);
        }
    }
}
