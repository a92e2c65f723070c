//! Format detection utilities.
//!
//! Detects image formats from file extensions and magic bytes.

use crate::IoResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PNG format.
    Png,
    /// Radiance HDR format.
    Hdr,
    /// Portable float map.
    Pfm,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from file path.
    ///
    /// First checks magic bytes, falls back to extension.
    pub fn detect<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();

        if let Ok(format) = Self::from_magic_bytes(path) {
            if format != Format::Unknown {
                return Ok(format);
            }
        }

        Ok(Self::from_extension(path))
    }

    /// Detects format from file extension only.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        match lower_extension(path.as_ref()).as_deref() {
            Some("png") => Format::Png,
            Some("hdr") | Some("pic") | Some("rgbe") => Format::Hdr,
            Some("pfm") => Format::Pfm,
            _ => Format::Unknown,
        }
    }

    /// Detects format from file magic bytes.
    pub fn from_magic_bytes<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let mut file = File::open(path)?;
        let mut header = [0u8; 8];

        let bytes_read = file.read(&mut header)?;
        Ok(Self::from_bytes(&header[..bytes_read]))
    }

    /// Detects format from raw bytes (magic number check).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        // PNG: 0x89 'P' 'N' 'G' CR LF SUB LF
        if bytes.len() >= 8 && bytes[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
            return Format::Png;
        }

        // HDR: "#?"
        if bytes.len() >= 2 && bytes[0..2] == [b'#', b'?'] {
            return Format::Hdr;
        }

        // PFM: "PF" (colour) or "Pf" (grey) followed by whitespace
        if bytes.len() >= 3
            && bytes[0] == b'P'
            && (bytes[1] == b'F' || bytes[1] == b'f')
            && bytes[2].is_ascii_whitespace()
        {
            return Format::Pfm;
        }

        Format::Unknown
    }

    /// Returns true if this format stores linear float data.
    pub fn supports_hdr(&self) -> bool {
        matches!(self, Format::Hdr | Format::Pfm)
    }
}

/// Returns true if the path names a high-dynamic-range container.
///
/// `.exr` and `.dpx` count even though this crate cannot write them, so a
/// caller asking about an EXR path still gets linear data semantics.
///
/// ```rust
/// use math32_io::is_hdr_path;
///
/// assert!(is_hdr_path("beauty.HDR"));
/// assert!(is_hdr_path("scan.dpx"));
/// assert!(!is_hdr_path("preview.png"));
/// ```
pub fn is_hdr_path<P: AsRef<Path>>(path: P) -> bool {
    matches!(
        lower_extension(path.as_ref()).as_deref(),
        Some("hdr") | Some("exr") | Some("pfm") | Some("dpx")
    )
}

fn lower_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_detection() {
        assert_eq!(Format::from_extension("test.png"), Format::Png);
        assert_eq!(Format::from_extension("test.PNG"), Format::Png);
        assert_eq!(Format::from_extension("test.hdr"), Format::Hdr);
        assert_eq!(Format::from_extension("test.pic"), Format::Hdr);
        assert_eq!(Format::from_extension("test.pfm"), Format::Pfm);
        assert_eq!(Format::from_extension("test.exr"), Format::Unknown);
        assert_eq!(Format::from_extension("noext"), Format::Unknown);
    }

    #[test]
    fn test_magic_bytes() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(Format::from_bytes(&png), Format::Png);

        let hdr = [b'#', b'?', b'R', b'A', b'D', b'I', b'A', b'N'];
        assert_eq!(Format::from_bytes(&hdr), Format::Hdr);

        assert_eq!(Format::from_bytes(b"PF\n4 2\n"), Format::Pfm);
        assert_eq!(Format::from_bytes(b"Pf\n4 2\n"), Format::Pfm);
        // binary PPM, not PFM
        assert_eq!(Format::from_bytes(b"P6\n4 2\n"), Format::Unknown);

        assert_eq!(Format::from_bytes(&[0x00, 0x00, 0x00, 0x00]), Format::Unknown);
        assert_eq!(Format::from_bytes(&[]), Format::Unknown);
    }

    #[test]
    fn test_hdr_path() {
        for p in ["a.hdr", "a.exr", "a.pfm", "a.dpx", "dir/a.EXR"] {
            assert!(is_hdr_path(p), "{}", p);
        }
        for p in ["a.png", "a.jpg", "a"] {
            assert!(!is_hdr_path(p), "{}", p);
        }
    }

    #[test]
    fn test_supports_hdr() {
        assert!(Format::Pfm.supports_hdr());
        assert!(Format::Hdr.supports_hdr());
        assert!(!Format::Png.supports_hdr());
        assert!(!Format::Unknown.supports_hdr());
    }
}
