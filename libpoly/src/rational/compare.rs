use super::Rational;
use num_bigint::BigInt;
use std::cmp::Ordering;

impl Ord for Rational {
    fn cmp(&self, other: &Rational) -> Ordering {
        // Values on opposite sides of zero (or both zero) order by sign alone.
        match self.sign().cmp(&other.sign()) {
            Ordering::Equal if self.is_zero() => return Ordering::Equal,
            Ordering::Equal => {}
            ord => return ord,
        }

        // Denominators are positive, so cross-multiplying preserves the order.
        let lhs = &self.numer * &other.denom;
        let rhs = &other.numer * &self.denom;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Rational {
    /// Whether the rational is whole and equal to the integer `n`.
    ///
    /// ```
    /// use libpoly::Rational;
    ///
    /// assert!(Rational::new(4, 2).unwrap().eq_integer(2));
    /// assert!(!Rational::new(3, 4).unwrap().eq_integer(0));
    /// ```
    pub fn eq_integer<I: Into<BigInt>>(&self, n: I) -> bool {
        self.is_whole() && self.numer == n.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn orders_across_signs() {
        assert!(r(-1, 2) < r(1, 3));
        assert!(r(1, 3) > r(-1, 2));
        assert!(r(-1, 2) < Rational::zero());
        assert!(Rational::zero() < r(1, 1_000_000));
        assert_eq!(Rational::zero().cmp(&r(0, 5)), Ordering::Equal);
    }

    #[test]
    fn orders_same_sign() {
        assert!(r(1, 3) < r(2, 3));
        assert_ne!(r(1, 3).cmp(&r(2, 3)), Ordering::Equal);
        assert!(r(-2, 3) < r(-1, 3));
        assert!(r(7, 8) < r(8, 9));
        assert_eq!(r(2, 4).cmp(&r(1, 2)), Ordering::Equal);
    }

    #[test]
    fn orders_close_values_exactly() {
        // These two collapse to the same f64.
        let big = BigInt::from(10).pow(30u32);
        let a = Rational::new(&big + 1, big.clone()).unwrap();
        let b = Rational::new(&big + 2, big).unwrap();
        assert!(a < b);
        assert!(a.negate() > b.negate());
    }

    #[test]
    fn sorts() {
        let mut v = vec![r(3, 2), r(-7, 3), Rational::zero(), r(1, 2), r(-1, 9)];
        v.sort();
        assert_eq!(v, vec![r(-7, 3), r(-1, 9), Rational::zero(), r(1, 2), r(3, 2)]);
    }

    #[test]
    fn eq_integer() {
        let whole = r(2, 1);
        let not_whole = r(3, 4);

        assert!(whole.eq_integer(2));
        assert!(!not_whole.eq_integer(2));
        assert!(!whole.eq_integer(3));

        assert!(whole.eq_integer(2i64));
        assert!(whole.eq_integer(BigInt::from(2)));
        assert!(r(4, 2).eq_integer(2u8));

        let very_negative = Rational::from(i64::from(i32::MIN) - 1);
        assert!(!very_negative.eq_integer(i32::MIN));
        assert!(!very_negative.eq_integer(i64::MIN));
    }
}
