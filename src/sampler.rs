//! Representative color sampling for texture images
//!
//! The average is a per-channel quadratic mean (RMS) over the opaque-enough
//! pixels of the image. Squaring before averaging biases the result toward
//! the brighter colors that dominate a texture visually, which reads better
//! on a rendered map than the arithmetic mean.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Pixels with an alpha value below this are excluded from the average.
pub const ALPHA_CUTOFF: u8 = 128;

/// Error type for sampling failures
#[derive(Debug, Error)]
#[error("cannot decode '{path}': {source}")]
pub struct SampleError {
    /// Image that could not be opened or decoded
    pub path: PathBuf,
    /// Underlying decoder error
    #[source]
    pub source: image::ImageError,
}

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

/// Compute the quadratic-mean color of the image at `path`.
///
/// The image is decoded and normalized to RGBA. Pixels whose alpha channel
/// is below [`ALPHA_CUTOFF`] do not contribute. Each surviving channel value
/// is squared before accumulation and the final channel value is the square
/// root of the mean, truncated to an integer.
///
/// Returns `Ok(None)` if no pixel survives the cutoff (a fully transparent
/// image); the caller decides how to report that. Decode failures are real
/// errors and are never mapped to a fallback color.
pub fn average_color(path: &Path) -> Result<Option<Color>, SampleError> {
    let image = image::open(path)
        .map_err(|source| SampleError { path: path.to_path_buf(), source })?
        .to_rgba8();

    let mut sums = [0.0f64; 3];
    let mut count = 0u64;
    for pixel in image.pixels() {
        if pixel[3] < ALPHA_CUTOFF {
            continue;
        }
        for (sum, &channel) in sums.iter_mut().zip(&pixel.0[..3]) {
            *sum += f64::from(channel) * f64::from(channel);
        }
        count += 1;
    }

    if count == 0 {
        return Ok(None);
    }
    let mean = |sum: f64| (sum / count as f64).sqrt() as u8;
    Ok(Some(Color { r: mean(sums[0]), g: mean(sums[1]), b: mean(sums[2]) }))
}
