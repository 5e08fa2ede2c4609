use super::Rational;
use crate::{PolyError, PolyResult};
use core::str::FromStr;
use num_bigint::BigInt;
use num_traits::One;

/// Parses `['+'|'-'|'~']digits['/'digits]`.
///
/// `~` is an alternate spelling of `-` that cannot be confused with a command-line flag.
/// Whitespace is not permitted anywhere, and only the numerator may be signed.
impl FromStr for Rational {
    type Err = PolyError;

    fn from_str(s: &str) -> PolyResult<Rational> {
        if s.is_empty() {
            return Err(PolyError::malformed("empty fraction"));
        }
        let malformed = || PolyError::malformed(format!(r#""{}" is not a fraction"#, s));

        let (negative, body) = match s.as_bytes()[0] {
            b'+' => (false, &s[1..]),
            b'-' | b'~' => (true, &s[1..]),
            _ => (false, s),
        };
        let (numer, denom) = match body.find('/') {
            Some(slash) => (&body[..slash], Some(&body[slash + 1..])),
            None => (body, None),
        };

        let numer = parse_digits(numer).ok_or_else(malformed)?;
        let denom = match denom {
            Some(denom) => parse_digits(denom).ok_or_else(malformed)?,
            None => BigInt::one(),
        };
        Rational::from_parts(if negative { -numer } else { numer }, denom)
    }
}

fn parse_digits(digits: &str) -> Option<BigInt> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
