//! Complex arithmetic on the plane.  A point is just a
//! `num::Complex<f64>`; these helpers spell out the two operations
//! the escape-time map needs so the iteration reads like the formula.
use num::Complex;

/// A point on the complex plane.
pub type ComplexNumber = Complex<f64>;

/// Componentwise sum.
#[inline]
pub fn add(a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
    Complex::new(a.re + b.re, a.im + b.im)
}

/// Complex product.  No overflow checks: a diverging orbit runs off to
/// infinity and NaN the way IEEE doubles do.
#[inline]
pub fn times(a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
    Complex::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
}

/// The square of the distance from the origin.
#[inline]
pub fn squared_magnitude(z: ComplexNumber) -> f64 {
    z.re * z.re + z.im * z.im
}
