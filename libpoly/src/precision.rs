/// Numeric context for the approximate parts of libpoly.
///
/// Rationals are exact; whenever one has to become an `f64` (evaluation, root finding) the
/// conversion is carried out with `bits` significant binary digits before the final rounding,
/// and iterative root refinement stops once it is within `tolerance`.
///
/// ```
/// use libpoly::Precision;
///
/// let p = Precision::default().with_tolerance(1e-9);
/// assert_eq!(p.bits, 113);
/// assert_eq!(p.tolerance, 1e-9);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Precision {
    /// Significant binary digits kept when dividing a numerator by its denominator.
    pub bits: u32,
    /// Termination tolerance of the root finder, on both bracket width and step size.
    pub tolerance: f64,
}

impl Precision {
    /// Quad precision, the default conversion width.
    pub const QUAD_BITS: u32 = 113;
    /// Default root-finder tolerance.
    pub const TOLERANCE: f64 = 1.0e-12;

    /// Returns a copy with a different conversion width. Widths below 64 bits are raised to
    /// 64, since an `f64` mantissa needs 53 of them plus rounding room.
    pub fn with_bits(mut self, bits: u32) -> Self {
        self.bits = bits.max(64);
        self
    }

    /// Returns a copy with a different root-finder tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            bits: Self::QUAD_BITS,
            tolerance: Self::TOLERANCE,
        }
    }
}
