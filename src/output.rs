//! Writes a finished picture to disk as an 8-bit RGB PNG.

use image::png::PngEncoder;
use image::ColorType;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use colorize::PixelBuffer;
use errors::MandelbrotError;

/// Encodes `buffer` as a PNG at `path`.  Nothing is left behind on
/// failure other than whatever the filesystem kept of a partial write.
pub fn encode_png<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<(), MandelbrotError> {
    let path = path.as_ref();
    let output = BufWriter::new(File::create(path)?);
    let encoder = PngEncoder::new(output);
    encoder.encode(buffer, buffer.width(), buffer.height(), ColorType::Rgb8)?;
    debug!(
        "wrote {}x{} image to {}",
        buffer.width(),
        buffer.height(),
        path.display()
    );
    Ok(())
}
