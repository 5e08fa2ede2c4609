//! An arbitrary-precision exact rational number.

use crate::{PolyError, PolyResult};
use core::fmt;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

mod arith;
mod compare;
mod convert;
mod parse;

/// An exact ratio of two arbitrary-precision integers.
///
/// A `Rational` is always stored in canonical form: the numerator and denominator share no
/// common factor, the denominator is positive, and zero is `0/1`. Equality and hashing are
/// therefore structural over the `(numerator, denominator)` pair.
///
/// Rationals are immutable; every operation produces a new value.
///
/// ```
/// use libpoly::Rational;
///
/// let r = Rational::new(-6, -4).unwrap();
/// assert_eq!(r.to_string(), "+3/2");
/// assert_eq!(r, "3/2".parse().unwrap());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Creates the rational `numer / denom` in lowest terms.
    /// Fails with [DivisionByZero][PolyError::DivisionByZero] if `denom` is zero.
    pub fn new<N, D>(numer: N, denom: D) -> PolyResult<Self>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        Self::from_parts(numer.into(), denom.into())
    }

    pub(crate) fn from_parts(numer: BigInt, denom: BigInt) -> PolyResult<Self> {
        if denom.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        Ok(Self::reduced(numer, denom))
    }

    /// Reduces `numer / denom` to canonical form. `denom` must be nonzero.
    fn reduced(numer: BigInt, denom: BigInt) -> Self {
        if numer.is_zero() {
            return Self::zero();
        }

        let g = numer.gcd(&denom);
        let (mut numer, mut denom) = (numer / &g, denom / &g);
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        Self { numer, denom }
    }

    /// Creates a whole rational.
    pub fn from_integer<I: Into<BigInt>>(n: I) -> Self {
        Self {
            numer: n.into(),
            denom: BigInt::one(),
        }
    }

    /// The rational `0/1`.
    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    /// The rational `1/1`.
    pub fn one() -> Self {
        Self::from_integer(1)
    }

    /// The canonical numerator; carries the sign of the rational.
    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// The canonical denominator; always positive.
    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }

    /// Whether the rational is an integer.
    #[inline]
    pub fn is_whole(&self) -> bool {
        self.denom.is_one()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer.is_positive()
    }

    /// Whether the rational is an odd integer.
    pub fn is_odd_integer(&self) -> bool {
        self.is_whole() && self.numer.is_odd()
    }

    /// -1, 0, or 1 for negative, zero, and positive values respectively.
    pub fn sign(&self) -> i32 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// The integer part, truncated toward zero.
    pub fn whole_part(&self) -> BigInt {
        &self.numer / &self.denom
    }

    /// Renders the rational without a sign for non-negative values, e.g. `3/4` or `-3/4`.
    pub fn to_plain_string(&self) -> String {
        if self.is_whole() {
            self.numer.to_string()
        } else {
            format!("{}/{}", self.numer, self.denom)
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! from_integer_impls {
    ($($t:ty)*) => {$(
        impl From<$t> for Rational {
            fn from(n: $t) -> Self {
                Self::from_integer(n)
            }
        }
    )*};
}

from_integer_impls! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize BigInt }

/// Renders the canonical signed form: `+N`, `-N`, `+N/D`, or `-N/D`.
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { '-' } else { '+' };
        write!(f, "{}{}", sign, self.numer.magnitude())?;
        if !self.is_whole() {
            write!(f, "/{}", self.denom)?;
        }
        Ok(())
    }
}
