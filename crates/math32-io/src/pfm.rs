//! Portable float map (PFM) support.
//!
//! ```text
//! PF            colour ("Pf" for grey)
//! 640 480       width height
//! -1.0          scale; negative means little-endian samples
//! <rows of f32 samples, bottom row first>
//! ```
//!
//! Grey maps are expanded to RGB on read. Files are written as
//! little-endian colour maps; alpha is dropped.

use crate::buffer::checked_sample_count;
use crate::{IoError, IoResult, PixelBuffer};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Reads a PFM file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let file = File::open(path)?;
    decode(BufReader::new(file))
}

/// Decodes a PFM stream into linear RGB.
pub fn decode<R: BufRead>(mut reader: R) -> IoResult<PixelBuffer> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let grey = match line.trim_end() {
        "PF" => false,
        "Pf" => true,
        other => return Err(IoError::InvalidFile(format!("bad PFM magic: {:?}", other))),
    };

    line.clear();
    reader.read_line(&mut line)?;
    let (width, height) = parse_dimensions(&line)
        .ok_or_else(|| IoError::InvalidFile(format!("bad PFM dimensions: {:?}", line.trim_end())))?;
    if width == 0 || height == 0 {
        return Err(IoError::InvalidFile(format!("empty PFM image: {}x{}", width, height)));
    }

    // grey maps are expanded to three channels
    checked_sample_count(width, height, 3)?;

    line.clear();
    reader.read_line(&mut line)?;
    let scale: f32 = line
        .trim()
        .parse()
        .map_err(|_| IoError::InvalidFile(format!("bad PFM scale: {:?}", line.trim_end())))?;
    if scale == 0.0 || math32::is_nan(scale) {
        return Err(IoError::InvalidFile("PFM scale must be nonzero".into()));
    }

    let file_channels = if grey { 1 } else { 3 };
    let row_len = width as usize * file_channels;
    let mut samples = vec![0.0f32; row_len * height as usize];
    // bottom-to-top in the file, top-to-bottom in memory
    for row in samples.chunks_exact_mut(row_len).rev() {
        if scale < 0.0 {
            reader.read_f32_into::<LittleEndian>(row)?;
        } else {
            reader.read_f32_into::<BigEndian>(row)?;
        }
    }

    let data = if grey {
        debug!("expanding grey PFM to RGB");
        samples.iter().flat_map(|&g| [g, g, g]).collect()
    } else {
        samples
    };

    debug!(width, height, scale, "decoded PFM");
    PixelBuffer::from_interleaved(width, height, 3, data)
}

/// Writes a PFM file.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}

/// Encodes linear samples as a little-endian colour PFM.
pub fn encode<W: Write>(writer: &mut W, image: &PixelBuffer) -> IoResult<()> {
    image.validate()?;
    if image.has_alpha() {
        warn!("PFM has no alpha channel, dropping it");
    }
    let image = image.to_interleaved();
    let channels = image.channels as usize;
    let row_len = image.width as usize * channels;

    write!(writer, "PF\n{} {}\n-1.0\n", image.width, image.height)?;
    if row_len == 0 {
        return Ok(());
    }
    for row in image.data.chunks_exact(row_len).rev() {
        for px in row.chunks_exact(channels) {
            for &v in &px[..3] {
                writer.write_f32::<LittleEndian>(v)?;
            }
        }
    }
    Ok(())
}

fn parse_dimensions(line: &str) -> Option<(u32, u32)> {
    let mut it = line.split_whitespace();
    let width = it.next()?.parse().ok()?;
    let height = it.next()?.parse().ok()?;
    if it.next().is_some() {
        return None;
    }
    Some((width, height))
}
