//! Every diagnostic the renderer can raise.  The viewport setters
//! never hand these back to the caller; they log them and carry on
//! with the bounds they had.  The encoder returns them.

use image::ImageError;
use std::io;

/// Failures and rejected configuration.
#[derive(Debug, Fail)]
pub enum MandelbrotError {
    /// A picture width that is not a positive number of pixels.
    #[fail(display = "Invalid picture width: {}", _0)]
    InvalidWidth(i64),

    /// Real-axis bounds where the maximum does not exceed the minimum.
    #[fail(display = "Invalid x limits: reMin = {} and reMax = {}", min, max)]
    InvalidRealLimits {
        /// Rejected lower bound.
        min: f64,
        /// Rejected upper bound.
        max: f64,
    },

    /// Imaginary-axis bounds where the maximum does not exceed the minimum.
    #[fail(display = "Invalid y limits: imMin = {} and imMax = {}", min, max)]
    InvalidImaginaryLimits {
        /// Rejected lower bound.
        min: f64,
        /// Rejected upper bound.
        max: f64,
    },

    /// An axis token that names neither the real nor the imaginary axis.
    #[fail(display = "Invalid axis: {:?}", _0)]
    UnknownAxis(String),

    /// A zoom factor that is zero, negative or not finite.
    #[fail(display = "Invalid scale factor: {}", _0)]
    InvalidScale(f64),

    /// A color mode other than "color" or "grayscale".
    #[fail(display = "Invalid color mode: {:?}", _0)]
    UnknownColorMode(String),

    /// The image could not be written.
    #[fail(display = "Could not save the image: {}", _0)]
    Io(#[cause] io::Error),

    /// The encoder refused the pixel data.
    #[fail(display = "Could not encode the image: {}", _0)]
    Image(#[cause] ImageError),
}

impl From<io::Error> for MandelbrotError {
    fn from(err: io::Error) -> Self {
        MandelbrotError::Io(err)
    }
}

impl From<ImageError> for MandelbrotError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(err) => MandelbrotError::Io(err),
            err => MandelbrotError::Image(err),
        }
    }
}
