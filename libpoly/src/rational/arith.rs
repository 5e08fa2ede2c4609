#![allow(clippy::should_implement_trait)]

use super::Rational;
use crate::{PolyError, PolyResult};
use num_traits::Signed;

impl Rational {
    /// Returns `self + other`.
    pub fn add(&self, other: &Rational) -> Rational {
        let numer = &self.numer * &other.denom + &other.numer * &self.denom;
        let denom = &self.denom * &other.denom;
        Rational::reduced(numer, denom)
    }

    /// Returns `self - other`.
    pub fn subtract(&self, other: &Rational) -> Rational {
        let numer = &self.numer * &other.denom - &other.numer * &self.denom;
        let denom = &self.denom * &other.denom;
        Rational::reduced(numer, denom)
    }

    /// Returns `self * other`.
    pub fn multiply(&self, other: &Rational) -> Rational {
        Rational::reduced(&self.numer * &other.numer, &self.denom * &other.denom)
    }

    /// Returns `self / other`, failing if `other` is zero.
    pub fn divide(&self, other: &Rational) -> PolyResult<Rational> {
        Ok(self.multiply(&other.invert()?))
    }

    pub fn negate(&self) -> Rational {
        Rational {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }

    /// Returns `1 / self`, failing if `self` is zero.
    pub fn invert(&self) -> PolyResult<Rational> {
        if self.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        // Swapping an already-reduced pair only needs the sign moved back to the numerator.
        let (numer, denom) = if self.is_negative() {
            (-&self.denom, -&self.numer)
        } else {
            (self.denom.clone(), self.numer.clone())
        };
        Ok(Rational { numer, denom })
    }

    pub fn abs(&self) -> Rational {
        Rational {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    /// The distance `|self - other|` between two rationals on the number line.
    pub fn distance(&self, other: &Rational) -> Rational {
        self.subtract(other).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn add() {
        let zero = r(0, 4);
        let one_third = r(1, 3);
        let small_negative = r(-2, 7);
        let big_negative = r(-6, 1);

        assert_eq!(zero.add(&zero), zero);
        assert_eq!(zero.add(&one_third), one_third);
        assert_eq!(one_third.add(&zero), one_third);
        assert_eq!(one_third.add(&one_third), r(2, 3));
        assert_eq!(small_negative.add(&big_negative), r(-44, 7));
        assert_eq!(small_negative.add(&one_third), r(1, 21));
        assert_eq!(one_third.add(&small_negative), r(1, 21));
    }

    #[test]
    fn subtract() {
        let one_third = r(1, 3);
        let small_negative = r(-2, 7);
        let big_negative = r(-6, 1);

        assert_eq!(one_third.subtract(&small_negative), r(13, 21));
        assert_eq!(big_negative.subtract(&one_third), r(-19, 3));
        assert_eq!(small_negative.subtract(&big_negative), r(40, 7));
        assert_eq!(one_third.subtract(&one_third), Rational::zero());
    }

    #[test]
    fn multiply() {
        assert_eq!(r(2, 3).multiply(&r(3, 4)), r(1, 2));
        assert_eq!(r(-2, 3).multiply(&r(3, -4)), r(1, 2));
        assert_eq!(r(2, 3).multiply(&Rational::zero()), Rational::zero());
    }

    #[test]
    fn divide() {
        let f1 = r(2, 3);
        let f2 = r(3, 2);
        assert_eq!(f1.divide(&f1), Ok(Rational::one()));
        assert_eq!(f1.divide(&f2), Ok(r(4, 9)));
        assert_eq!(f1.divide(&Rational::zero()), Err(PolyError::DivisionByZero));
    }

    #[test]
    fn negate() {
        assert_eq!(r(2, 3).negate(), r(-2, 3));
        assert_eq!(r(-2, 3).negate(), r(2, 3));
        assert_eq!(r(0, 1).negate(), r(0, 1));
    }

    #[test]
    fn invert() {
        assert_eq!(r(2, 3).invert(), Ok(r(3, 2)));
        assert_eq!(r(-2, 3).invert(), Ok(r(-3, 2)));
        assert_eq!(r(-1, 5).invert(), Ok(r(-5, 1)));
        assert_eq!(r(0, 1).invert(), Err(PolyError::DivisionByZero));
    }

    #[test]
    fn abs() {
        assert_eq!(r(2, 3).abs(), r(2, 3));
        assert_eq!(r(-2, 3).abs(), r(2, 3));
        assert_eq!(r(0, 1).abs(), r(0, 1));
    }

    #[test]
    fn distance() {
        let f1 = r(10, 3);
        let f2 = r(12, 3);
        assert_eq!(f1.distance(&f2), r(2, 3));
        assert_eq!(f2.distance(&f1), r(2, 3));
    }
}
