//! Turns a grid of iteration counts into an RGB picture.  Points in
//! the set are black; everything else is either a shade of gray or a
//! hue picked from the square root of the normalized count.

use image::{ImageBuffer, Rgb, RgbImage};
use std::str::FromStr;

use bitmap::IterationGrid;
use errors::MandelbrotError;
use escape::MAX_ITERATION;

/// The finished picture, 8 bits per channel.
pub type PixelBuffer = RgbImage;

/// How escape counts are turned into colors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColorMode {
    /// Hue varies with the count, full saturation and brightness.
    Color,
    /// Brightness varies with the count.
    Grayscale,
}

impl FromStr for ColorMode {
    type Err = MandelbrotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color" | "colour" => Ok(ColorMode::Color),
            "gray" | "grey" | "grayscale" | "greyscale" => Ok(ColorMode::Grayscale),
            _ => Err(MandelbrotError::UnknownColorMode(s.to_string())),
        }
    }
}

/// Converts hue, saturation and brightness, each in [0, 1], into an
/// RGB triple.  The hue wraps, so 1.25 is the same as 0.25.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Rgb<u8> {
    let channel = |v: f32| (v * 255.0 + 0.5) as u8;
    if saturation == 0.0 {
        let v = channel(brightness);
        return Rgb([v, v, v]);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));
    let (r, g, b) = match h as u8 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };
    Rgb([channel(r), channel(g), channel(b)])
}

/// The color of a single escape count.
pub fn count_to_color(count: u8, mode: ColorMode) -> Rgb<u8> {
    if count == MAX_ITERATION {
        return Rgb([0, 0, 0]);
    }
    let value = f32::from(count) / 254.0;
    match mode {
        ColorMode::Color => hsb_to_rgb(value.sqrt() + 0.5, 1.0, 1.0),
        ColorMode::Grayscale => hsb_to_rgb(1.0, 0.0, value),
    }
}

/// Builds the picture for a rendered grid, in pseudocolor when
/// `colored` is set and in grayscale otherwise.
pub fn colorize(grid: &IterationGrid, colored: bool) -> PixelBuffer {
    let mode = if colored {
        ColorMode::Color
    } else {
        ColorMode::Grayscale
    };
    colorize_with(grid, mode)
}

/// Same as `colorize`, with the mode spelled out.
pub fn colorize_with(grid: &IterationGrid, mode: ColorMode) -> PixelBuffer {
    ImageBuffer::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        count_to_color(grid.get(x as usize, y as usize), mode)
    })
}
