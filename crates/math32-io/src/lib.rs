//! # math32-io
//!
//! Image I/O bridge for renderers built on `math32`.
//!
//! Pixels travel as [`PixelBuffer`]: RGB or RGBA `f32` samples, interleaved
//! or planar.
//!
//! - **PNG** - 8/16-bit in, 8-bit out, display encoded
//! - **HDR** - Radiance RGBE, linear
//! - **PFM** - portable float map, linear
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use math32_io::{read, write, PixelBuffer};
//!
//! let mut image = PixelBuffer::new(64, 64, 3)?;
//! image.data.fill(0.18);
//!
//! // linear, values kept as is
//! write("render.hdr", &image)?;
//! // gamma 2.2 encoded and clamped to [0, 1]
//! write("render.png", &image)?;
//!
//! let back = read("render.hdr")?;
//! assert_eq!(back.width, 64);
//! # Ok::<(), math32_io::IoError>(())
//! ```
//!
//! # HDR vs display output
//!
//! [`write`] derives the HDR flag from the extension (see [`is_hdr_path`])
//! and calls [`write_with`]. Without the flag each colour channel becomes
//! `clamp01(v)^(1/2.2)` and alpha becomes `clamp01(a)` before encoding.
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `hdr` - Radiance HDR support (default)
//! - `pfm` - PFM support (default)
//! - `rayon` - gamma-encode rows in parallel

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod buffer;
mod detect;
mod error;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "hdr")]
pub mod hdr;

#[cfg(feature = "pfm")]
pub mod pfm;

pub use buffer::{Layout, MAX_SAMPLES, PixelBuffer};
pub use detect::{Format, is_hdr_path};
pub use error::{IoError, IoResult};

use std::path::Path;
use tracing::{debug, warn};

/// Display gamma applied to non-HDR output.
pub const DISPLAY_GAMMA: f32 = 2.2;

/// Reads an image, auto-detecting the format.
///
/// The format is detected by magic bytes, then by extension. The result
/// is always interleaved with 3 or 4 channels.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The format is not supported
/// - The file is corrupted
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    debug!(path = %path.display(), ?format, "reading image");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[cfg(feature = "hdr")]
        Format::Hdr => hdr::read(path),

        #[cfg(feature = "pfm")]
        Format::Pfm => pfm::read(path),

        _ => Err(unsupported(path)),
    }
}

/// Writes an image, choosing the format and the HDR flag from the
/// extension.
///
/// ```rust,no_run
/// use math32_io::{write, PixelBuffer};
///
/// let image = PixelBuffer::from_interleaved(1, 1, 3, vec![0.5, 0.5, 0.5])?;
/// write("grey.png", &image)?;
/// # Ok::<(), math32_io::IoError>(())
/// ```
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    let path = path.as_ref();
    write_with(path, image, is_hdr_path(path))
}

/// Writes an image with an explicit HDR flag.
///
/// When `hdr` is false samples are display encoded first (see the crate
/// docs). Planar buffers are interleaved before encoding.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] when the extension names no writable
/// format, [`IoError::UnsupportedChannels`] or
/// [`IoError::DimensionMismatch`] for a malformed buffer, and codec or
/// filesystem errors otherwise.
pub fn write_with<P: AsRef<Path>>(path: P, image: &PixelBuffer, hdr: bool) -> IoResult<()> {
    let path = path.as_ref();
    image.validate()?;
    let format = Format::from_extension(path);
    debug!(
        path = %path.display(),
        ?format,
        width = image.width,
        height = image.height,
        channels = image.channels,
        hdr,
        "writing image"
    );

    if hdr && format != Format::Unknown && !format.supports_hdr() {
        warn!(?format, "linear samples written to an 8-bit container are clamped");
    }

    let mut out = image.to_interleaved();
    if !hdr {
        encode_display(&mut out);
    }

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, &out),

        #[cfg(feature = "hdr")]
        Format::Hdr => hdr::write(path, &out),

        #[cfg(feature = "pfm")]
        Format::Pfm => pfm::write(path, &out),

        _ => Err(unsupported(path)),
    }
}

/// Gamma-encodes an interleaved buffer in place for display.
///
/// Colour channels become `clamp01(v)^(1/2.2)`, alpha becomes
/// `clamp01(a)`. NaN samples stay NaN.
///
/// ```rust
/// use math32_io::{encode_display, PixelBuffer};
///
/// let mut buf = PixelBuffer::from_interleaved(1, 1, 4, vec![2.0, 0.0, -1.0, 1.5]).unwrap();
/// encode_display(&mut buf);
/// assert_eq!(buf.data, vec![1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn encode_display(image: &mut PixelBuffer) {
    if image.layout != buffer::Layout::Interleaved {
        *image = image.to_interleaved();
    }
    let channels = image.channels as usize;
    if channels == 0 {
        return;
    }

    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        image.data.par_chunks_mut(channels).for_each(encode_pixel);
    }

    #[cfg(not(feature = "rayon"))]
    image.data.chunks_mut(channels).for_each(encode_pixel);
}

fn encode_pixel(px: &mut [f32]) {
    for (i, v) in px.iter_mut().enumerate() {
        let c = clamp01(*v);
        *v = if i < 3 { math32::pow(c, 1.0 / DISPLAY_GAMMA) } else { c };
    }
}

#[inline]
fn clamp01(v: f32) -> f32 {
    math32::min(math32::max(v, 0.0), 1.0)
}

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_encode_display_curve() {
        let mut buf = PixelBuffer::from_interleaved(1, 1, 3, vec![0.5, 0.18, 1.0]).unwrap();
        encode_display(&mut buf);
        assert_relative_eq!(buf.data[0], 0.5f32.powf(1.0 / 2.2), max_relative = 1e-5);
        assert_relative_eq!(buf.data[1], 0.18f32.powf(1.0 / 2.2), max_relative = 1e-5);
        assert_eq!(buf.data[2], 1.0);
    }

    #[test]
    fn test_encode_display_alpha_is_linear() {
        let mut buf = PixelBuffer::from_interleaved(1, 1, 4, vec![0.25, 0.25, 0.25, 0.25]).unwrap();
        encode_display(&mut buf);
        assert_eq!(buf.data[3], 0.25);
        assert!(buf.data[0] > 0.5);
    }

    #[test]
    fn test_encode_display_interleaves() {
        let mut buf = PixelBuffer::from_planar(2, 1, 3, vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0]).unwrap();
        encode_display(&mut buf);
        assert_eq!(buf.layout, Layout::Interleaved);
        assert_eq!(buf.data, vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_nan_stays_nan() {
        let mut buf = PixelBuffer::from_interleaved(1, 1, 3, vec![f32::NAN, 0.0, 1.0]).unwrap();
        encode_display(&mut buf);
        assert!(buf.data[0].is_nan());
    }
}
