//! The escape-time map.  Given a point c, repeatedly square z and add
//! c, starting from zero, and count how long it takes |z|² to pass
//! the threshold.  Points that never do within the iteration budget
//! are taken to be inside the set.

use complex::{add, squared_magnitude, times, ComplexNumber};
use num::Complex;

/// The value |z|² is compared against.  This is the squared
/// magnitude, so the escape radius is √42.
pub const ESCAPE_THRESHOLD: f64 = 42.0;

/// The highest iteration index, and the value returned for points
/// that never escape.
pub const MAX_ITERATION: u8 = 255;

/// Returns the 0-based iteration at which the orbit of `c` escaped,
/// or `MAX_ITERATION` if it stayed bounded for all 256 iterations.
pub fn evaluate(c: ComplexNumber) -> u8 {
    let mut z: ComplexNumber = Complex { re: 0.0, im: 0.0 };
    for i in 0..=MAX_ITERATION {
        z = add(times(z, z), c);
        if squared_magnitude(z) > ESCAPE_THRESHOLD {
            return i;
        }
    }
    MAX_ITERATION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_inside() {
        assert_eq!(evaluate(Complex::new(0.0, 0.0)), MAX_ITERATION);
    }

    #[test]
    fn far_points_escape_immediately() {
        assert_eq!(evaluate(Complex::new(10.0, 10.0)), 0);
        assert_eq!(evaluate(Complex::new(2.0, 2.0)), 1);
    }

    #[test]
    fn main_cardioid_and_bulb_are_inside() {
        assert_eq!(evaluate(Complex::new(-1.0, 0.0)), MAX_ITERATION);
        assert_eq!(evaluate(Complex::new(-0.1, 0.1)), MAX_ITERATION);
        assert_eq!(evaluate(Complex::new(0.25, 0.0)), MAX_ITERATION);
    }

    #[test]
    fn escape_needs_to_pass_the_threshold() {
        // c = 6: z1 = 6 (36), z2 = 42 (1764).
        assert_eq!(evaluate(Complex::new(6.0, 0.0)), 1);
        // c = 7: z1 = 7 (49).
        assert_eq!(evaluate(Complex::new(7.0, 0.0)), 0);
    }

    #[test]
    fn just_outside_takes_longer_than_far_outside() {
        let near = evaluate(Complex::new(0.26, 0.0));
        let far = evaluate(Complex::new(1.0, 0.0));
        assert!(near > far);
        assert!(near < MAX_ITERATION);
    }

    #[test]
    fn non_finite_points_escape() {
        assert_eq!(evaluate(Complex::new(std::f64::INFINITY, 0.0)), 0);
    }
}
