//! Contains the Viewport struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0 in
//! the upper-left corner, and a rectangle on the complex plane bounded
//! by a real and an imaginary interval.  The complex rectangle can be
//! moved, recentered and zoomed; the integral one is fixed in width
//! and takes its height from the aspect ratio of the complex one.
use std::str::FromStr;

use complex::ComplexNumber;
use errors::MandelbrotError;
use num::Complex;

/// Picture width used when the requested one is unusable.
pub const DEFAULT_WIDTH: usize = 1920;

/// Describes the x, y of a pixel on the integral plane.  x grows to
/// the right, y grows downward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// One of the two axes of the complex plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Axis {
    /// The real axis, horizontal on screen.
    Real,
    /// The imaginary axis, vertical on screen.
    Imaginary,
}

impl FromStr for Axis {
    type Err = MandelbrotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" | "re" => Ok(Axis::Real),
            "y" | "im" => Ok(Axis::Imaginary),
            _ => Err(MandelbrotError::UnknownAxis(s.to_string())),
        }
    }
}

/// The region of the complex plane being rendered, plus the width of
/// the picture it is rendered into.  Setters never fail: a rejected
/// update is logged and the previous bounds stay in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    width: usize,
    re_limits: (f64, f64),
    im_limits: (f64, f64),
}

impl Viewport {
    /// Constructor.  By default the real part goes from -2 to 1 and the
    /// imaginary part from -1 to 1, which is an aspect ratio of 3:2.
    /// A width that is not positive falls back to `DEFAULT_WIDTH`.
    pub fn new(width: i64) -> Viewport {
        let width = if width > 0 {
            width as usize
        } else {
            warn!("{}", MandelbrotError::InvalidWidth(width));
            warn!("Assuming a picture width of {} pixels.", DEFAULT_WIDTH);
            DEFAULT_WIDTH
        };
        Viewport {
            width,
            re_limits: (-2.0, 1.0),
            im_limits: (-1.0, 1.0),
        }
    }

    /// Picture width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Picture height in pixels, derived from the width and the
    /// current bounds.
    pub fn height(&self) -> usize {
        self.height_from_aspect(self.width)
    }

    /// Replaces the bounds.  Each axis is checked on its own, so a bad
    /// real interval does not stop a good imaginary one from landing.
    pub fn set_limits(&mut self, re_min: f64, re_max: f64, im_min: f64, im_max: f64) {
        if let Err(e) = self.try_set_real(re_min, re_max) {
            warn!("{}", e);
        }
        if let Err(e) = self.try_set_imaginary(im_min, im_max) {
            warn!("{}", e);
        }
    }

    fn try_set_real(&mut self, min: f64, max: f64) -> Result<(), MandelbrotError> {
        if max > min {
            self.re_limits = (min, max);
            Ok(())
        } else {
            Err(MandelbrotError::InvalidRealLimits { min, max })
        }
    }

    fn try_set_imaginary(&mut self, min: f64, max: f64) -> Result<(), MandelbrotError> {
        if max > min {
            self.im_limits = (min, max);
            Ok(())
        } else {
            Err(MandelbrotError::InvalidImaginaryLimits { min, max })
        }
    }

    /// The current bounds as (reMin, reMax, imMin, imMax).
    pub fn limits(&self) -> (f64, f64, f64, f64) {
        (
            self.re_limits.0,
            self.re_limits.1,
            self.im_limits.0,
            self.im_limits.1,
        )
    }

    /// The midpoint of the current bounds, split in real and imaginary
    /// value.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.re_limits.0 + self.re_limits.1) / 2.0,
            (self.im_limits.0 + self.im_limits.1) / 2.0,
        )
    }

    /// Moves the bounds so that (x, y) is the center, keeping the
    /// current spans.
    pub fn set_center(&mut self, x: f64, y: f64) {
        let (re_min, re_max, im_min, im_max) = self.limits();
        let delta_x = re_max - re_min;
        let delta_y = im_max - im_min;
        self.set_limits(
            x - delta_x / 2.0,
            x + delta_x / 2.0,
            y - delta_y / 2.0,
            y + delta_y / 2.0,
        );
    }

    /// Shifts the bounds of one axis by `delta`.
    pub fn shift(&mut self, axis: Axis, delta: f64) {
        let (re_min, re_max, im_min, im_max) = self.limits();
        match axis {
            Axis::Real => self.set_limits(re_min + delta, re_max + delta, im_min, im_max),
            Axis::Imaginary => self.set_limits(re_min, re_max, im_min + delta, im_max + delta),
        }
    }

    /// Shifts the bounds of the axis named by `axis` ("x" or "re" for
    /// the real part, "y" or "im" for the imaginary part).  Anything
    /// else is logged and ignored.
    pub fn move_axis(&mut self, axis: &str, delta: f64) {
        match axis.parse::<Axis>() {
            Ok(axis) => self.shift(axis, delta),
            Err(e) => warn!("{}", e),
        }
    }

    /// Zooms about the current center.  A factor above 1 zooms in,
    /// between 0 and 1 zooms out.  Factors that are not positive and
    /// finite are rejected.
    pub fn scale(&mut self, factor: f64) {
        if !(factor > 0.0 && factor.is_finite()) {
            warn!("{}", MandelbrotError::InvalidScale(factor));
            return;
        }
        let (cx, cy) = self.center();
        let delta_x = self.re_limits.1 - cx;
        let delta_y = self.im_limits.1 - cy;
        self.set_limits(
            cx - delta_x / factor,
            cx + delta_x / factor,
            cy - delta_y / factor,
            cy + delta_y / factor,
        );
    }

    /// Given the column and row of a pixel in a picture of the given
    /// size, return the complex number at the equivalent location.
    /// Row 0 is the top of the picture, which is `imMax`.
    pub fn pixel_to_plane(&self, x: usize, y: usize, width: usize, height: usize) -> ComplexNumber {
        let (re_min, re_max, im_min, im_max) = self.limits();
        Complex::new(
            (re_max - re_min) / (width as f64) * (x as f64) + re_min,
            (im_min - im_max) / (height as f64) * (y as f64) + im_max,
        )
    }

    /// Same as `pixel_to_plane`, for a picture of this viewport's own
    /// size.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> ComplexNumber {
        self.pixel_to_plane(pixel.0, pixel.1, self.width, self.height())
    }

    /// The height of a picture `width` pixels wide that keeps the
    /// aspect ratio of the current bounds.
    pub fn height_from_aspect(&self, width: usize) -> usize {
        let ratio = (self.re_limits.1 - self.re_limits.0) / (self.im_limits.1 - self.im_limits.0);
        ((width as f64) / ratio).floor() as usize
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(DEFAULT_WIDTH as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const EPS: f64 = 1e-12;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn default_bounds_are_three_by_two() {
        let vp = Viewport::new(300);
        assert_eq!(vp.limits(), (-2.0, 1.0, -1.0, 1.0));
        assert_eq!(vp.width(), 300);
        assert_eq!(vp.height(), 200);
    }

    #[test]
    fn bad_width_falls_back() {
        assert_eq!(Viewport::new(0).width(), DEFAULT_WIDTH);
        assert_eq!(Viewport::new(-5).width(), DEFAULT_WIDTH);
    }

    #[test]
    fn height_is_floored() {
        let vp = Viewport::new(100);
        assert_eq!(vp.height_from_aspect(100), 66);
        assert_eq!(vp.height_from_aspect(1280), 853);
    }

    #[test]
    fn set_limits_rejects_each_axis_independently() {
        let mut vp = Viewport::new(100);
        vp.set_limits(1.0, -1.0, -0.5, 0.5);
        assert_eq!(vp.limits(), (-2.0, 1.0, -0.5, 0.5));

        vp.set_limits(-1.0, 1.0, 0.5, 0.5);
        assert_eq!(vp.limits(), (-1.0, 1.0, -0.5, 0.5));
    }

    #[test]
    fn set_limits_rejects_nan() {
        let mut vp = Viewport::new(100);
        vp.set_limits(std::f64::NAN, 1.0, -1.0, std::f64::NAN);
        assert_eq!(vp.limits(), (-2.0, 1.0, -1.0, 1.0));
    }

    #[test]
    fn center_of_default_bounds() {
        assert_eq!(Viewport::new(100).center(), (-0.5, 0.0));
    }

    #[test]
    fn set_center_keeps_span() {
        let mut vp = Viewport::new(100);
        vp.set_center(-0.747162, -0.087584);
        let (re_min, re_max, im_min, im_max) = vp.limits();
        assert!(close(re_max - re_min, 3.0));
        assert!(close(im_max - im_min, 2.0));
        let (x, y) = vp.center();
        assert!(close(x, -0.747162));
        assert!(close(y, -0.087584));
    }

    #[test]
    fn scale_halves_spans_around_center() {
        let mut vp = Viewport::new(100);
        let before = vp.center();
        vp.scale(2.0);
        let (re_min, re_max, im_min, im_max) = vp.limits();
        assert!(close(re_max - re_min, 1.5));
        assert!(close(im_max - im_min, 1.0));
        let after = vp.center();
        assert!(close(before.0, after.0));
        assert!(close(before.1, after.1));
    }

    #[test]
    fn random_recenter_and_zoom_keep_center() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let mut vp = Viewport::new(640);
            let x = rng.gen_range(-2.0, 2.0);
            let y = rng.gen_range(-2.0, 2.0);
            vp.set_center(x, y);
            let (cx, cy) = vp.center();
            assert!((cx - x).abs() < 1e-9 && (cy - y).abs() < 1e-9);

            vp.scale(rng.gen_range(0.5, 4.0));
            let (sx, sy) = vp.center();
            assert!((sx - x).abs() < 1e-9 && (sy - y).abs() < 1e-9);
            assert!(vp.height() > 0);
        }
    }

    #[test]
    fn scale_below_one_zooms_out() {
        let mut vp = Viewport::new(100);
        vp.scale(0.5);
        assert_eq!(vp.limits(), (-3.5, 2.5, -2.0, 2.0));
    }

    #[test]
    fn scale_rejects_non_positive_factors() {
        let mut vp = Viewport::new(100);
        vp.scale(0.0);
        vp.scale(-2.0);
        vp.scale(std::f64::INFINITY);
        assert_eq!(vp.limits(), (-2.0, 1.0, -1.0, 1.0));
    }

    #[test]
    fn move_axis_shifts_one_axis() {
        let mut vp = Viewport::new(100);
        vp.move_axis("x", 0.5);
        assert_eq!(vp.limits(), (-1.5, 1.5, -1.0, 1.0));
        vp.move_axis("im", -1.0);
        assert_eq!(vp.limits(), (-1.5, 1.5, -2.0, 0.0));
    }

    #[test]
    fn move_axis_ignores_unknown_axis() {
        let mut vp = Viewport::new(100);
        vp.move_axis("z", 10.0);
        assert_eq!(vp.limits(), (-2.0, 1.0, -1.0, 1.0));
    }

    #[test]
    fn axis_parses() {
        assert_eq!("re".parse::<Axis>().unwrap(), Axis::Real);
        assert_eq!("y".parse::<Axis>().unwrap(), Axis::Imaginary);
        assert!("q".parse::<Axis>().is_err());
    }

    #[test]
    fn pixel_to_plane_on_corners() {
        let vp = Viewport::new(100);
        let (w, h) = (100, 66);
        assert_eq!(vp.pixel_to_plane(0, 0, w, h), Complex::new(-2.0, 1.0));

        let far = vp.pixel_to_plane(w - 1, h - 1, w, h);
        let re_step = 3.0 / w as f64;
        let im_step = 2.0 / h as f64;
        assert!(close(far.re, 1.0 - re_step));
        assert!(close(far.im, -1.0 + im_step));
    }

    #[test]
    fn pixel_to_plane_rows_go_down() {
        let vp = Viewport::new(4);
        let top = vp.pixel_to_plane(0, 0, 4, 4);
        let lower = vp.pixel_to_plane(0, 2, 4, 4);
        assert!(lower.im < top.im);
        assert_eq!(lower, Complex::new(-2.0, 0.0));
    }

    #[test]
    fn pixel_to_point_uses_own_size() {
        let vp = Viewport::new(300);
        let p = vp.pixel_to_point(&Pixel(150, 100));
        assert!(close(p.re, -0.5));
        assert!(close(p.im, 0.0));
    }
}
