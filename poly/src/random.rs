use libpoly::{PolyResult, Polynomial, Rational, Term};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chance that a coefficient stays whole when fractions are allowed.
const WHOLE_PROBABILITY: f64 = 0.75;
const MAX_TERMS: usize = 5;
const MAX_EXPONENT: i64 = 100;

/// Generates random polynomials with small integer exponents and small coefficients.
///
/// Each polynomial is the sum of 1 to 5 random terms, so like exponents may merge and terms may
/// cancel. Coefficient numerators are drawn from `[-50, 49]`. When fractions are enabled, a
/// quarter of the coefficients get a denominator from the same range. Exponents are drawn from
/// `[0, 100]`, or from `[0, 1]` for linear functions.
pub struct RandomPolynomialFactory {
    rng: StdRng,
    fractions: bool,
    linear: bool,
}

impl RandomPolynomialFactory {
    /// Creates a factory. The same `seed` always yields the same sequence of polynomials; with
    /// no seed the generator is seeded from the operating system.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            fractions: false,
            linear: false,
        }
    }

    /// Allows fractional coefficients.
    pub fn fractions(mut self, fractions: bool) -> Self {
        self.fractions = fractions;
        self
    }

    /// Restricts exponents to 0 and 1.
    pub fn linear(mut self, linear: bool) -> Self {
        self.linear = linear;
        self
    }

    /// Generates the next polynomial.
    pub fn create(&mut self) -> PolyResult<Polynomial> {
        let count = self.rng.gen_range(1..=MAX_TERMS);
        let max_exponent = if self.linear { 1 } else { MAX_EXPONENT };
        (0..count).map(|_| self.term(max_exponent)).collect()
    }

    fn term(&mut self, max_exponent: i64) -> PolyResult<Term> {
        let coefficient = self.coefficient()?;
        let exponent = self.rng.gen_range(0..=max_exponent);
        Ok(Term::new(coefficient, exponent))
    }

    fn coefficient(&mut self) -> PolyResult<Rational> {
        let numer: i64 = self.rng.gen_range(-50..=49);
        let mut denom: i64 = 1;
        if self.fractions && !self.rng.gen_bool(WHOLE_PROBABILITY) {
            denom = self.rng.gen_range(-50..=49);
            if denom == 0 {
                denom = 1;
            }
        }
        Rational::new(numer, denom)
    }
}
