//! Error conditions produced by libpoly.

use crate::Rational;

/// Result of a fallible libpoly operation.
pub type PolyResult<T> = Result<T, PolyError>;

/// A deterministic failure of a libpoly operation.
///
/// Conditions fall into three groups:
///
/// - malformed input, rejected when a value is constructed or combined
///   ([MalformedInput][PolyError::MalformedInput],
///   [MismatchedExponent][PolyError::MismatchedExponent],
///   [DuplicateAbscissa][PolyError::DuplicateAbscissa], and a zero denominator reported as
///   [DivisionByZero][PolyError::DivisionByZero]);
/// - domain and range conditions ([Overflow][PolyError::Overflow],
///   [NotWhole][PolyError::NotWhole], [NotLinear][PolyError::NotLinear], division or
///   inversion of zero);
/// - [UnsupportedDomain][PolyError::UnsupportedDomain], raised when a polynomial reaches an
///   algorithm that cannot handle its exponents. Callers should treat the requested feature as
///   unavailable for that polynomial rather than as a defect.
///
/// Mathematically undefined results of evaluation (complex values, undefined limits) are not
/// errors; they are reported as `f64::NAN`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolyError {
    /// A zero denominator, divisor, or inversion of zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A value does not fit in the requested fixed-width type.
    #[error("value lies outside the range supported by `{target}`")]
    Overflow {
        /// Name of the requested type.
        target: &'static str,
    },

    /// A non-whole rational was converted to an integer type.
    #[error("{0} is not a whole number")]
    NotWhole(Rational),

    /// Input that could not be understood, like an unparsable fraction.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Two terms with different exponents were added.
    #[error("cannot add terms with exponents {lhs} and {rhs}")]
    MismatchedExponent {
        /// Exponent of the left-hand term.
        lhs: Rational,
        /// Exponent of the right-hand term.
        rhs: Rational,
    },

    /// The same x-coordinate appeared twice in a point set.
    #[error("x-coordinate {0} appears more than once")]
    DuplicateAbscissa(Rational),

    /// A slope was requested from a function that is not linear.
    #[error("slope cannot be computed for non-linear functions")]
    NotLinear,

    /// The requested algorithm does not support the polynomial's exponents.
    #[error("unsupported domain: {0}")]
    UnsupportedDomain(String),
}

impl PolyError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        PolyError::MalformedInput(msg.into())
    }

    pub(crate) fn unsupported(msg: impl Into<String>) -> Self {
        PolyError::UnsupportedDomain(msg.into())
    }
}
