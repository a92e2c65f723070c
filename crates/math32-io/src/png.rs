//! PNG format support.
//!
//! Reads 8-bit and 16-bit PNGs into [0, 1] floats. Palette and low bit
//! depths are expanded by the decoder, grey is expanded to RGB.
//! Writes 8-bit RGB or RGBA; samples are expected to be display encoded
//! already and are clamped to [0, 1].
//!
//! # Example
//!
//! ```rust,ignore
//! use math32_io::png;
//!
//! let image = png::read("input.png")?;
//! png::write("output.png", &image)?;
//! ```

use crate::{IoError, IoResult, PixelBuffer};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, Write};
use std::path::Path;
use tracing::debug;

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let file = File::open(path.as_ref())?;
    decode(BufReader::new(file))
}

/// Decodes a PNG stream.
pub fn decode<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    let bytes = &buf[..info.buffer_size()];

    let samples: Vec<f32> = match info.bit_depth {
        png::BitDepth::Eight => bytes.iter().map(|&v| v as f32 / 255.0).collect(),
        png::BitDepth::Sixteen => bytes
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]) as f32 / 65535.0)
            .collect(),
        depth => {
            return Err(IoError::DecodeError(format!(
                "unexpected bit depth after expansion: {:?}",
                depth
            )));
        }
    };

    let (channels, data) = match info.color_type {
        png::ColorType::Rgb => (3, samples),
        png::ColorType::Rgba => (4, samples),
        png::ColorType::Grayscale => {
            debug!("expanding grey PNG to RGB");
            (3, samples.iter().flat_map(|&g| [g, g, g]).collect())
        }
        png::ColorType::GrayscaleAlpha => {
            debug!("expanding grey+alpha PNG to RGBA");
            let rgba = samples
                .chunks_exact(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
                .collect();
            (4, rgba)
        }
        color_type => {
            return Err(IoError::DecodeError(format!(
                "unexpected colour type after expansion: {:?}",
                color_type
            )));
        }
    };

    debug!(
        width = info.width,
        height = info.height,
        channels,
        bit_depth = ?info.bit_depth,
        "decoded PNG"
    );
    PixelBuffer::from_interleaved(info.width, info.height, channels, data)
}

/// Writes an image to an 8-bit PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}

/// Encodes an image as 8-bit PNG.
pub fn encode<W: Write>(writer: W, image: &PixelBuffer) -> IoResult<()> {
    image.validate()?;
    let image = image.to_interleaved();

    let color_type = match image.channels {
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => return Err(IoError::UnsupportedChannels(n)),
    };

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    let bytes: Vec<u8> = image.data.iter().map(|&v| quantize(v)).collect();

    png_writer
        .write_image_data(&bytes)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

/// [0, 1] to 0..=255, round to nearest. NaN maps to 0.
#[inline]
fn quantize(v: f32) -> u8 {
    let v = math32::min(math32::max(v, 0.0), 1.0);
    math32::round(v * 255.0) as u8
}
