//! Conversions from [Rational]s to bounded numeric types.
//!
//! Integer conversions are exact and checked. Floating-point conversions go through
//! [approximate][Rational::approximate], which keeps [Precision::bits] significant bits of the
//! quotient before the final rounding to `f64`.

use super::Rational;
use crate::{PolyError, PolyResult, Precision};
use core::convert::TryFrom;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive};

/// Computes `x * 2^exp` without overflowing the intermediate power of two.
fn scale_pow2(mut x: f64, mut exp: i64) -> f64 {
    const STEP: i32 = 1000;
    while exp > i64::from(STEP) && x.is_finite() {
        x *= 2f64.powi(STEP);
        exp -= i64::from(STEP);
    }
    while exp < -i64::from(STEP) && x != 0. {
        x *= 2f64.powi(-STEP);
        exp += i64::from(STEP);
    }
    x * 2f64.powi(exp as i32)
}

impl Rational {
    /// The largest integer not greater than `self`.
    pub fn floor(&self) -> BigInt {
        self.numer.div_floor(&self.denom)
    }

    /// The smallest integer not less than `self`.
    pub fn ceil(&self) -> BigInt {
        -(-&self.numer).div_floor(&self.denom)
    }

    /// The nearest integer, rounding halves away from zero.
    pub fn round(&self) -> BigInt {
        // floor(|n|/d + 1/2) = floor((2|n| + d) / 2d)
        let twice: BigInt = self.numer.abs() * 2 + &self.denom;
        let magnitude: BigInt = twice / (&self.denom * 2);
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Approximates the rational as an `f64`. Values beyond the `f64` range become infinite.
    pub fn approximate(&self, precision: Precision) -> f64 {
        if self.is_zero() {
            return 0.;
        }

        let bits = i64::from(precision.bits.max(64));
        let numer = self.numer.magnitude();
        let denom = self.denom.magnitude();

        // Scale the division so the integer quotient carries `bits` significant bits.
        let shift = bits - (numer.bits() as i64 - denom.bits() as i64);
        let quotient = if shift >= 0 {
            (numer << shift as usize) / denom
        } else {
            numer / (denom << (-shift) as usize)
        };

        let mantissa = quotient.to_f64().unwrap_or(f64::INFINITY);
        let value = scale_pow2(mantissa, -shift);
        if self.is_negative() {
            -value
        } else {
            value
        }
    }

    /// Converts the rational to an `f64`, failing with [Overflow][PolyError::Overflow] if its
    /// magnitude exceeds the finite `f64` range.
    pub fn to_f64(&self, precision: Precision) -> PolyResult<f64> {
        let value = self.approximate(precision);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(PolyError::Overflow { target: "f64" })
        }
    }

    /// Converts the rational to an `f32`, failing with [Overflow][PolyError::Overflow] if its
    /// magnitude exceeds the finite `f32` range.
    pub fn to_f32(&self, precision: Precision) -> PolyResult<f32> {
        let value = self.approximate(precision) as f32;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(PolyError::Overflow { target: "f32" })
        }
    }

    /// Raises the rational to a rational power.
    ///
    /// The result is approximate: exact powers of rationals by rationals are generally
    /// irrational. A negative base with a non-integer exponent has no real value and yields
    /// NaN. Fails with [Overflow][PolyError::Overflow] if the result exceeds the `f64` range,
    /// and with [DivisionByZero][PolyError::DivisionByZero] for zero raised to a negative
    /// power.
    ///
    /// ```
    /// use libpoly::{Precision, Rational};
    ///
    /// let p = Rational::from(2).pow(&Rational::from(10), Precision::default()).unwrap();
    /// assert_eq!(p, 1024.);
    /// ```
    pub fn pow(&self, exponent: &Rational, precision: Precision) -> PolyResult<f64> {
        if self.is_zero() && exponent.is_negative() {
            return Err(PolyError::DivisionByZero);
        }

        let base = self.to_f64(precision)?;
        let result = match i32::try_from(exponent) {
            Ok(e) => base.powi(e),
            Err(_) => base.powf(exponent.approximate(precision)),
        };
        if result.is_infinite() {
            return Err(PolyError::Overflow { target: "f64" });
        }
        Ok(result)
    }

    fn whole_numer(&self) -> PolyResult<&BigInt> {
        if self.denom.is_one() {
            Ok(&self.numer)
        } else {
            Err(PolyError::NotWhole(self.clone()))
        }
    }
}

macro_rules! try_into_integer_impls {
    ($($t:ty)*) => {$(
        /// Fails with [NotWhole][PolyError::NotWhole] for non-whole rationals and with
        /// [Overflow][PolyError::Overflow] for values out of the target's range.
        impl TryFrom<&Rational> for $t {
            type Error = PolyError;

            fn try_from(r: &Rational) -> PolyResult<$t> {
                <$t>::try_from(r.whole_numer()?)
                    .map_err(|_| PolyError::Overflow { target: stringify!($t) })
            }
        }

        impl TryFrom<Rational> for $t {
            type Error = PolyError;

            fn try_from(r: Rational) -> PolyResult<$t> {
                <$t>::try_from(&r)
            }
        }
    )*};
}

try_into_integer_impls! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize }
