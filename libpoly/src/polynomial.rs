//! Single-variable polynomials over exact rational coefficients and exponents.

#![allow(clippy::should_implement_trait)]

use crate::{PolyError, PolyResult, Rational, Term};
use core::fmt;
use core::iter::FromIterator;
use std::collections::BTreeMap;

mod calculus;
mod evaluate;
mod extrema;
mod interpolate;
mod solve;

/// A sum of [Term]s with pairwise-distinct exponents.
///
/// A polynomial never stores a zero-coefficient term: adding a term whose exponent already
/// exists merges the two coefficients, and a merged coefficient of zero removes the exponent
/// entirely. The empty polynomial is the zero function.
///
/// Polynomials are values. Building one consumes and returns it, so derived results like the
/// derivative are recomputed from the terms rather than cached.
///
/// # Examples:
///
/// ```
/// use libpoly::{poly, Polynomial, Term};
///
/// let p = Polynomial::new()
///     .add_term(Term::new(5, 0))
///     .add_term(Term::new(2, 2))
///     .add_term(Term::new(-3, 1));
/// assert_eq!(p.to_string(), "f(x) = +2x^2 -3x +5");
/// assert_eq!(p, poly![(2, 2), (-3, 1), (5, 0)]);
/// ```
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct Polynomial {
    /// Terms keyed by exponent, in ascending exponent order.
    terms: BTreeMap<Rational, Term>,
}

/// Creates a new polynomial from `(coefficient, exponent)` pairs.
///
/// # Examples:
///
/// ```
/// use libpoly::poly;
///
/// poly![(1, 2), (2, 1), (-4, 0)]; // x^2 + 2x - 4
/// poly![]; // zero polynomial
/// ```
#[macro_export]
macro_rules! poly {
    ($(($c:expr, $e:expr)),+ $(,)?) => (
        $crate::Polynomial::new()$(.add_term($crate::Term::new($c, $e)))+
    );

    () => {
        $crate::Polynomial::new()
    };
}

impl Polynomial {
    /// The zero polynomial.
    pub fn new() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// The constant polynomial `c`.
    pub fn constant(c: impl Into<Rational>) -> Self {
        Self::new().add_term(Term::new(c, 0))
    }

    /// Adds a term to `self`, merging it with a term of the same exponent if one exists.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libpoly::{poly, Term};
    ///
    /// // (x + 2) + 3x^2 -> 3x^2 + x + 2
    /// assert_eq!(poly![(1, 1), (2, 0)].add_term(Term::new(3, 2)), poly![(3, 2), (1, 1), (2, 0)]);
    ///
    /// // (x + 2) - x -> 2
    /// assert_eq!(poly![(1, 1), (2, 0)].add_term(Term::new(-1, 1)), poly![(2, 0)]);
    /// ```
    pub fn add_term(mut self, term: Term) -> Self {
        self.insert_term(term);
        self
    }

    fn insert_term(&mut self, term: Term) {
        let merged = match self.terms.remove(term.exponent()) {
            Some(existing) => Term::new(
                existing.coefficient().add(term.coefficient()),
                term.exponent().clone(),
            ),
            None => term,
        };
        if !merged.is_zero() {
            self.terms.insert(merged.exponent().clone(), merged);
        }
    }

    /// Iterates over the terms in descending exponent order.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = &Term> + ExactSizeIterator {
        self.terms.values().rev()
    }

    /// Number of (nonzero) terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether this is the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The highest exponent, or zero for the zero polynomial.
    pub fn degree(&self) -> Rational {
        self.terms.keys().next_back().cloned().unwrap_or_default()
    }

    /// The lowest exponent, if there are any terms.
    pub fn least_exponent(&self) -> Option<&Rational> {
        self.terms.keys().next()
    }

    /// The coefficient of `x^exponent`, zero if no such term exists.
    pub fn coefficient(&self, exponent: &Rational) -> Rational {
        self.terms
            .get(exponent)
            .map(|t| t.coefficient().clone())
            .unwrap_or_default()
    }

    /// The highest-exponent term, which determines behavior at infinity.
    pub fn dominant_term(&self) -> Option<&Term> {
        self.terms.values().next_back()
    }

    /// Whether every term has exponent zero. The zero polynomial is constant.
    pub fn is_constant(&self) -> bool {
        self.terms.keys().all(Rational::is_zero)
    }

    /// Whether every term has exponent zero or one.
    pub fn is_linear_function(&self) -> bool {
        self.terms.keys().all(|e| e.is_zero() || e.is_one())
    }

    pub fn has_negative_exponent(&self) -> bool {
        self.least_exponent().map_or(false, Rational::is_negative)
    }

    pub fn has_fractional_exponent(&self) -> bool {
        self.terms.keys().any(|e| !e.is_whole())
    }

    /// The slope of a linear function: its degree-1 coefficient, or zero for a constant.
    /// Fails with [NotLinear][PolyError::NotLinear] otherwise.
    pub fn compute_slope(&self) -> PolyResult<Rational> {
        if !self.is_linear_function() {
            return Err(PolyError::NotLinear);
        }
        Ok(self.coefficient(&Rational::one()))
    }

    /// Returns `self + other`.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libpoly::poly;
    ///
    /// // (x^2 - 1) + (x + 1) -> x^2 + x
    /// assert_eq!(poly![(1, 2), (-1, 0)].add(&poly![(1, 1), (1, 0)]), poly![(1, 2), (1, 1)]);
    /// ```
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let mut sum = self.clone();
        sum.extend(other.terms().cloned());
        sum
    }

    /// Returns `self - other`.
    pub fn subtract(&self, other: &Polynomial) -> Polynomial {
        let mut difference = self.clone();
        difference.extend(other.terms().map(Term::negate));
        difference
    }

    pub fn negate(&self) -> Polynomial {
        self.terms().map(Term::negate).collect()
    }

    /// Multiplies each term in the polynomial by a scalar.
    pub fn scale(&self, factor: &Rational) -> Polynomial {
        let factor = Term::new(factor.clone(), 0);
        self.terms().map(|t| t.multiply(&factor)).collect()
    }

    /// Returns `self * other`, combining like exponents of the cross products.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libpoly::poly;
    ///
    /// // (x + 1)(x - 1) -> x^2 - 1
    /// assert_eq!(poly![(1, 1), (1, 0)].multiply(&poly![(1, 1), (-1, 0)]), poly![(1, 2), (-1, 0)]);
    /// ```
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        self.terms()
            .flat_map(|a| other.terms().map(move |b| a.multiply(b)))
            .collect()
    }

    /// Fails with [UnsupportedDomain][PolyError::UnsupportedDomain] unless every exponent is a
    /// non-negative integer.
    pub(crate) fn ensure_natural_exponents(&self, operation: &str) -> PolyResult<()> {
        if self.has_negative_exponent() {
            return Err(PolyError::unsupported(format!(
                "{} is not supported for {}, which has a negative exponent",
                operation, self
            )));
        }
        if self.has_fractional_exponent() {
            return Err(PolyError::unsupported(format!(
                "{} is not supported for {}, which has a fractional exponent",
                operation, self
            )));
        }
        Ok(())
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        let mut poly = Polynomial::new();
        poly.extend(iter);
        poly
    }
}

impl Extend<Term> for Polynomial {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        for term in iter {
            self.insert_term(term);
        }
    }
}

/// Renders `f(x) = <term> <term> ...` in descending exponent order, e.g.
/// `f(x) = +2x^2 -3x +5`. The zero polynomial renders as `f(x) = 0`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f(x) =")?;
        if self.is_zero() {
            return write!(f, " 0");
        }
        for term in self.terms() {
            write!(f, " {}", term)?;
        }
        Ok(())
    }
}
