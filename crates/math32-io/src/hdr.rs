//! Radiance HDR (RGBE) format support.
//!
//! Supports reading flat and RLE scanlines and writing RLE scanlines.
//! Alpha is not representable and is dropped on write.

use crate::buffer::checked_sample_count;
use crate::{IoError, IoResult, PixelBuffer};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, warn};

const HDR_MAGIC: &str = "#?";

/// RLE scanlines are only defined for these widths.
const RLE_MIN_WIDTH: usize = 8;
const RLE_MAX_WIDTH: usize = 0x7fff;

/// Reads an HDR (Radiance RGBE) file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let file = File::open(path)?;
    decode(BufReader::new(file))
}

/// Decodes an HDR stream into linear RGB.
pub fn decode<R: BufRead>(mut reader: R) -> IoResult<PixelBuffer> {
    let (width, height, format) = read_header(&mut reader)?;
    if format.to_lowercase().contains("xyze") {
        warn!("HDR data is XYZE, returned without conversion to RGB");
    }
    let data = read_pixels(&mut reader, width, height)?;
    debug!(width, height, %format, "decoded HDR");
    PixelBuffer::from_interleaved(width, height, 3, data)
}

/// Writes an HDR (Radiance RGBE) file.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}

/// Encodes linear samples as RGBE.
pub fn encode<W: Write>(writer: &mut W, image: &PixelBuffer) -> IoResult<()> {
    image.validate()?;
    if image.has_alpha() {
        warn!("HDR has no alpha channel, dropping it");
    }
    if image.pixel_count() == 0 {
        return Err(IoError::EncodeError(format!(
            "empty image: {}x{}",
            image.width, image.height
        )));
    }
    let image = image.to_interleaved();

    writeln!(writer, "{}RADIANCE", HDR_MAGIC)?;
    writeln!(writer, "FORMAT=32-bit_rle_rgbe")?;
    writeln!(writer)?;
    writeln!(writer, "-Y {} +X {}", image.height, image.width)?;

    write_pixels(writer, &image)
}

fn read_header<R: BufRead>(reader: &mut R) -> IoResult<(u32, u32, String)> {
    let mut line = String::new();

    reader.read_line(&mut line)?;
    if !trim_line(&line).starts_with(HDR_MAGIC) {
        return Err(IoError::InvalidFile("HDR magic not found".into()));
    }

    let mut format = "32-bit_rle_rgbe".to_string();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(IoError::InvalidFile("missing HDR resolution line".into()));
        }
        let line = trim_line(&line);

        if line.starts_with('+') || line.starts_with('-') {
            let (w, h) = parse_resolution(line)
                .ok_or_else(|| IoError::InvalidFile(format!("invalid HDR resolution line: {}", line)))?;
            return Ok((w, h, format));
        }

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            if key.trim().eq_ignore_ascii_case("FORMAT") {
                format = value.trim().to_string();
            }
        }
    }
}

fn read_pixels<R: Read>(reader: &mut R, width: u32, height: u32) -> IoResult<Vec<f32>> {
    let mut rgbe = vec![0u8; checked_sample_count(width, height, 4)?];
    let width = width as usize;

    let mut first = [0u8; 4];
    reader.read_exact(&mut first)?;

    let use_rle = (RLE_MIN_WIDTH..=RLE_MAX_WIDTH).contains(&width)
        && first[0] == 2
        && first[1] == 2
        && ((first[2] as usize) << 8 | first[3] as usize) == width;

    if use_rle {
        let mut header = first;
        for (y, scanline) in rgbe.chunks_exact_mut(width * 4).enumerate() {
            if y > 0 {
                reader.read_exact(&mut header)?;
            }
            decode_rle_scanline(reader, width, scanline, header)?;
        }
    } else {
        rgbe[0..4].copy_from_slice(&first);
        reader.read_exact(&mut rgbe[4..])?;
    }

    let mut data = Vec::with_capacity(rgbe.len() / 4 * 3);
    for chunk in rgbe.chunks_exact(4) {
        data.extend_from_slice(&rgbe_to_f32([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }

    Ok(data)
}

fn decode_rle_scanline<R: Read>(
    reader: &mut R,
    width: usize,
    out: &mut [u8],
    header: [u8; 4],
) -> IoResult<()> {
    if header[0] != 2 || header[1] != 2 {
        return Err(IoError::InvalidFile("HDR RLE header invalid".into()));
    }
    let encoded_width = ((header[2] as usize) << 8) | (header[3] as usize);
    if encoded_width != width {
        return Err(IoError::InvalidFile("HDR RLE width mismatch".into()));
    }

    let mut channel = vec![0u8; width];
    for c in 0..4 {
        let mut idx = 0usize;
        while idx < width {
            let mut count = [0u8; 1];
            reader.read_exact(&mut count)?;
            let (run, repeat) = match count[0] as usize {
                0 => return Err(IoError::InvalidFile("HDR RLE zero-length run".into())),
                n if n > 128 => (n - 128, true),
                n => (n, false),
            };
            if idx + run > width {
                return Err(IoError::InvalidFile("HDR RLE run overflows scanline".into()));
            }
            if repeat {
                let mut value = [0u8; 1];
                reader.read_exact(&mut value)?;
                channel[idx..idx + run].fill(value[0]);
            } else {
                reader.read_exact(&mut channel[idx..idx + run])?;
            }
            idx += run;
        }

        for (x, &v) in channel.iter().enumerate() {
            out[x * 4 + c] = v;
        }
    }

    Ok(())
}

fn write_pixels<W: Write>(writer: &mut W, image: &PixelBuffer) -> IoResult<()> {
    let width = image.width as usize;
    let channels = image.channels as usize;
    let use_rle = (RLE_MIN_WIDTH..=RLE_MAX_WIDTH).contains(&width);

    let mut scanline = vec![0u8; width * 4];
    for row in image.data.chunks_exact(width * channels) {
        for (px, out) in row.chunks_exact(channels).zip(scanline.chunks_exact_mut(4)) {
            out.copy_from_slice(&f32_to_rgbe(px[0], px[1], px[2]));
        }

        if use_rle {
            let header = [2u8, 2u8, (width >> 8) as u8, (width & 0xFF) as u8];
            writer.write_all(&header)?;
            encode_rle_scanline(writer, &scanline)?;
        } else {
            writer.write_all(&scanline)?;
        }
    }

    Ok(())
}

fn encode_rle_scanline<W: Write>(writer: &mut W, scanline: &[u8]) -> IoResult<()> {
    let mut channel = vec![0u8; scanline.len() / 4];
    for c in 0..4 {
        for (x, v) in channel.iter_mut().enumerate() {
            *v = scanline[x * 4 + c];
        }
        writer.write_all(&encode_rle_channel(&channel))?;
    }
    Ok(())
}

/// Runs of 4 or more become `128 + n, value`; everything else is written
/// as literal spans of at most 128 bytes.
fn encode_rle_channel(data: &[u8]) -> Vec<u8> {
    let run_at = |i: usize| {
        let mut run = 1usize;
        while i + run < data.len() && run < 127 && data[i] == data[i + run] {
            run += 1;
        }
        run
    };

    let mut out = Vec::with_capacity(data.len() * 2);
    let mut i = 0usize;
    while i < data.len() {
        let run = run_at(i);
        if run >= 4 {
            out.push((128 + run) as u8);
            out.push(data[i]);
            i += run;
            continue;
        }

        let start = i;
        while i < data.len() && i - start < 128 && run_at(i) < 4 {
            i += 1;
        }
        out.push((i - start) as u8);
        out.extend_from_slice(&data[start..i]);
    }
    out
}

/// Shared-exponent encoding. Negative and NaN components become 0.
fn f32_to_rgbe(r: f32, g: f32, b: f32) -> [u8; 4] {
    let r = math32::max(r, 0.0);
    let g = math32::max(g, 0.0);
    let b = math32::max(b, 0.0);
    let max = math32::max(math32::max(r, g), b);
    if math32::is_nan(max) || max < 1.0e-32 {
        return [0, 0, 0, 0];
    }
    if math32::is_inf(max, 1) {
        return [255, 255, 255, 255];
    }

    // exponents past 127 saturate the mantissas instead of wrapping
    let e = frexp(max).1.min(127);
    let scale = math32::ldexp(1.0, 8 - e);
    let quantize = |v: f32| math32::min(v * scale, 255.0) as u8;

    [quantize(r), quantize(g), quantize(b), (e + 128) as u8]
}

fn rgbe_to_f32(rgbe: [u8; 4]) -> [f32; 3] {
    let [r, g, b, e] = rgbe;
    if e == 0 {
        return [0.0; 3];
    }
    let f = math32::ldexp(1.0, e as i32 - 136);
    [r as f32 * f, g as f32 * f, b as f32 * f]
}

/// Splits a positive normal `x` into `m * 2^e` with `m` in [0.5, 1).
fn frexp(x: f32) -> (f32, i32) {
    let e = ((x.to_bits() >> 23) & 0xff) as i32 - 126;
    (math32::ldexp(x, -e), e)
}

fn parse_resolution(line: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 4 {
        return None;
    }

    let mut width = 0u32;
    let mut height = 0u32;

    for pair in parts.chunks_exact(2) {
        let value: u32 = pair[1].parse().ok()?;
        if pair[0].ends_with('X') {
            width = value;
        } else if pair[0].ends_with('Y') {
            height = value;
        }
    }

    if width > 0 && height > 0 {
        Some((width, height))
    } else {
        None
    }
}

fn trim_line(line: &str) -> &str {
    line.trim_end_matches(&['\r', '\n'][..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    fn roundtrip(image: &PixelBuffer) -> PixelBuffer {
        let mut bytes = Vec::new();
        encode(&mut bytes, image).expect("HDR encode failed");
        decode(Cursor::new(bytes)).expect("HDR decode failed")
    }

    #[test]
    fn parse_resolution_line() {
        assert_eq!(parse_resolution("-Y 2 +X 3"), Some((3, 2)));
        assert_eq!(parse_resolution("+X 4 -Y 5"), Some((4, 5)));
        assert_eq!(parse_resolution("-Y 2"), None);
        assert_eq!(parse_resolution("-Y 0 +X 3"), None);
    }

    #[test]
    fn frexp_splits() {
        assert_eq!(frexp(1.0), (0.5, 1));
        assert_eq!(frexp(0.75), (0.75, 0));
        assert_eq!(frexp(10.0), (0.625, 4));
    }

    #[test]
    fn rgbe_known_values() {
        assert_eq!(f32_to_rgbe(1.0, 0.5, 0.0), [128, 64, 0, 129]);
        assert_eq!(rgbe_to_f32([128, 64, 0, 129]), [1.0, 0.5, 0.0]);
        assert_eq!(f32_to_rgbe(0.0, -1.0, f32::NAN), [0, 0, 0, 0]);
        assert_eq!(rgbe_to_f32([10, 20, 30, 0]), [0.0; 3]);
    }

    #[test]
    fn rgbe_saturates_near_f32_max() {
        assert_eq!(f32_to_rgbe(3.0e38, 0.0, 0.0), [255, 0, 0, 255]);
        let [r, g, b] = rgbe_to_f32(f32_to_rgbe(f32::MAX, 1.0e38, 1.0));
        assert!(r > 1.0e38, "{}", r);
        assert!(g > 0.5e38, "{}", g);
        assert_eq!(b, 0.0);

        // largest exponent that still fits
        assert_eq!(f32_to_rgbe(1.0e38, 0.0, 0.0)[3], 255);
    }

    #[test]
    fn rle_channel_runs_and_literals() {
        assert_eq!(encode_rle_channel(&[7; 10]), vec![138, 7]);
        assert_eq!(encode_rle_channel(&[1, 2, 3]), vec![3, 1, 2, 3]);
        assert_eq!(
            encode_rle_channel(&[1, 2, 5, 5, 5, 5, 5]),
            vec![2, 1, 2, 133, 5]
        );

        let long: Vec<u8> = (0..200).map(|i| (i % 2) as u8).collect();
        let encoded = encode_rle_channel(&long);
        assert_eq!(encoded[0], 128);
        assert_eq!(encoded[129], 72);
        assert_eq!(encoded.len(), 200 + 2);
    }

    #[test]
    fn hdr_roundtrip_rle() {
        let (width, height) = (16, 3);
        let data: Vec<f32> = (0..width * height * 3).map(|i| i as f32 / 10.0 + 0.01).collect();
        let image = PixelBuffer::from_interleaved(width, height, 3, data).unwrap();

        let loaded = roundtrip(&image);
        assert_eq!((loaded.width, loaded.height, loaded.channels), (width, height, 3));

        for (px_in, px_out) in image.data.chunks(3).zip(loaded.data.chunks(3)) {
            let peak = px_in.iter().cloned().fold(0.0f32, f32::max);
            for (a, b) in px_in.iter().zip(px_out) {
                assert!((a - b).abs() <= peak / 128.0, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn hdr_roundtrip_flat_drops_alpha() {
        let data = vec![1.0, 2.0, 4.0, 0.5, 0.25, 0.125, 0.0625, 1.0];
        let image = PixelBuffer::from_interleaved(2, 1, 4, data).unwrap();
        let loaded = roundtrip(&image);
        assert_eq!(loaded.channels, 3);
        assert_relative_eq!(loaded.data[2], 4.0);
        assert_relative_eq!(loaded.data[3], 0.25);
        assert_relative_eq!(loaded.data[5], 0.0625);
    }

    #[test]
    fn rejects_truncated_and_bad_magic() {
        let err = decode(Cursor::new(b"P6\n".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::InvalidFile(_)));

        let err = decode(Cursor::new(b"#?RADIANCE\nFORMAT=32-bit_rle_rgbe\n\n".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::InvalidFile(_)));

        let err = decode(Cursor::new(b"#?RADIANCE\n\n-Y 1 +X 2\n\x01\x02".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }

    #[test]
    fn rejects_oversized_resolution() {
        for res in ["-Y 4294967295 +X 4294967295", "-Y 65535 +X 65535"] {
            let mut bytes = format!("#?RADIANCE\n\n{}\n", res).into_bytes();
            bytes.extend_from_slice(&[2, 2, 0, 8]);
            let err = decode(Cursor::new(bytes)).unwrap_err();
            assert!(matches!(err, IoError::InvalidFile(_)), "{:?}", err);
        }
    }

    #[test]
    fn rejects_overlong_run() {
        let mut bytes = b"#?RADIANCE\n\n-Y 1 +X 8\n".to_vec();
        bytes.extend_from_slice(&[2, 2, 0, 8, 128 + 9, 1]);
        let err = decode(Cursor::new(bytes)).unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }
}
