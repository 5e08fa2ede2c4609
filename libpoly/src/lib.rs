//! libpoly is an algebra engine for single-variable polynomials with exact rational
//! coefficients and exponents.
//!
//! The crate is layered leaf-first:
//!
//! - [Rational] is an arbitrary-precision rational number kept in canonical lowest terms.
//! - [Term] is one monomial, `coefficient * x^exponent`.
//! - [Polynomial] is a collection of terms with unique exponents. It implements the algebra
//!   (addition, multiplication, curve fitting), the calculus (differentiation, integration),
//!   evaluation including limits at infinity, equation solving, and extrema finding.
//! - [RootFinder] strategies refine the roots a polynomial cannot find in closed form.
//!
//! Everything exact stays exact until a number leaves the crate: evaluation, root and extremum
//! locations are exposed as `f64`, approximated under a [Precision].
//!
//! ```
//! use libpoly::{poly, Precision};
//!
//! // (x - 1)(x - 2)
//! let p = poly![(1, 2), (-3, 1), (2, 0)];
//! assert_eq!(p.to_string(), "f(x) = +x^2 -3x +2");
//!
//! let roots = p.solve(Precision::default()).unwrap();
//! assert!((roots[0] - 1.).abs() < 1e-10);
//! assert!((roots[1] - 2.).abs() < 1e-10);
//! ```

mod errors;
pub use errors::{PolyError, PolyResult};

mod precision;
pub use precision::Precision;

mod rational;
pub use rational::Rational;

mod term;
pub use term::Term;

mod polynomial;
pub use polynomial::Polynomial;

mod root_finder;
#[cfg(feature = "companion-matrix")]
pub use root_finder::CompanionMatrix;
pub use root_finder::{NewtonBisection, RootFinder};
