#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points c on the complex plane for
//! which repeatedly squaring z and adding c, starting from zero, never
//! runs off to infinity.  For every pixel of the picture we find the
//! matching point, iterate, and record how many steps the orbit took
//! to escape.  Points that never escape are painted black; the rest
//! get a color (or a shade of gray) picked from their escape count.
//!
//! The pipeline is: a `Viewport` picks the region, `bitmap::render`
//! fills an `IterationGrid`, `colorize::colorize` turns it into a
//! `PixelBuffer`, and `output::encode_png` writes it out.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate tempfile;

pub mod bitmap;
pub mod colorize;
pub mod complex;
pub mod errors;
pub mod escape;
pub mod output;
pub mod viewport;

pub use bitmap::{render, render_threaded, IterationGrid};
pub use colorize::{colorize, ColorMode, PixelBuffer};
pub use complex::ComplexNumber;
pub use errors::MandelbrotError;
pub use escape::evaluate;
pub use output::encode_png;
pub use viewport::{Axis, Viewport};
