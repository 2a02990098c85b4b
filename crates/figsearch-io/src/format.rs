//! Bitmap format detection
//!
//! Detects bitmap formats by examining magic numbers in the file header.
//! Files without a recognized magic number are treated as the native text
//! format when they start with an integer.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// PNM formats
    pub const PBM_ASCII: &[u8] = b"P1";
    pub const PGM_ASCII: &[u8] = b"P2";
    pub const PPM_ASCII: &[u8] = b"P3";
    pub const PBM_BINARY: &[u8] = b"P4";
    pub const PGM_BINARY: &[u8] = b"P5";
    pub const PPM_BINARY: &[u8] = b"P6";
}

/// Bitmap file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitmapFormat {
    /// Whitespace-separated `height width` header followed by 0/1 cells
    #[default]
    Text,
    /// Plain PBM (P1)
    PbmAscii,
    /// Raw PBM (P4)
    PbmBinary,
    /// 1-bit grayscale PNG
    Png,
}

impl BitmapFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::PbmAscii | Self::PbmBinary => "pbm",
            Self::Png => "png",
        }
    }

    /// Pick an output format from a path's extension.
    ///
    /// `.png` maps to PNG, `.pbm`/`.pnm` to raw PBM, anything else to text.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Self::Png,
            Some("pbm") | Some("pnm") => Self::PbmBinary,
            _ => Self::Text,
        }
    }
}

/// Detect bitmap format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<BitmapFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 16];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect bitmap format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<BitmapFormat> {
    // Check PNG (needs 8 bytes)
    if data.len() >= 8 && data.starts_with(magic::PNG) {
        return Ok(BitmapFormat::Png);
    }

    // Check PNM formats
    if data.starts_with(magic::PBM_ASCII) {
        return Ok(BitmapFormat::PbmAscii);
    }
    if data.starts_with(magic::PBM_BINARY) {
        return Ok(BitmapFormat::PbmBinary);
    }
    if [
        magic::PGM_ASCII,
        magic::PPM_ASCII,
        magic::PGM_BINARY,
        magic::PPM_BINARY,
    ]
    .iter()
    .any(|m| data.starts_with(m))
    {
        return Err(IoError::UnsupportedFormat(
            "graymap/pixmap PNM has multi-valued pixels".to_string(),
        ));
    }

    // Native text format starts with the height
    match data.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b) if b.is_ascii_digit() || *b == b'+' || *b == b'-' => Ok(BitmapFormat::Text),
        Some(_) => Err(IoError::UnsupportedFormat(
            "unknown bitmap format".to_string(),
        )),
        None => Err(IoError::InvalidData("empty input".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let data = [
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), BitmapFormat::Png);
    }

    #[test]
    fn test_detect_pbm() {
        assert_eq!(
            detect_format_from_bytes(b"P1\n2 2\n0 1\n1 0\n").unwrap(),
            BitmapFormat::PbmAscii
        );
        assert_eq!(
            detect_format_from_bytes(b"P4\n8 1\n\xff").unwrap(),
            BitmapFormat::PbmBinary
        );
    }

    #[test]
    fn test_detect_multi_valued_pnm() {
        assert!(matches!(
            detect_format_from_bytes(b"P5\n100 100\n255\n"),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(detect_format_from_bytes(b"P6\n1 1\n255\n").is_err());
    }

    #[test]
    fn test_detect_text() {
        assert_eq!(
            detect_format_from_bytes(b"3 3\n1 1 1\n").unwrap(),
            BitmapFormat::Text
        );
        assert_eq!(
            detect_format_from_bytes(b"\n  -1 2").unwrap(),
            BitmapFormat::Text
        );
    }

    #[test]
    fn test_detect_unknown_and_empty() {
        assert!(matches!(
            detect_format_from_bytes(b"UNKNOWN_FORMAT"),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            detect_format_from_bytes(b"  \n\t"),
            Err(IoError::InvalidData(_))
        ));
        assert!(detect_format_from_bytes(b"").is_err());
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(BitmapFormat::from_extension("mask.PNG"), BitmapFormat::Png);
        assert_eq!(
            BitmapFormat::from_extension("out/mask.pbm"),
            BitmapFormat::PbmBinary
        );
        assert_eq!(BitmapFormat::from_extension("mask.txt"), BitmapFormat::Text);
        assert_eq!(BitmapFormat::from_extension("mask"), BitmapFormat::Text);
        assert_eq!(BitmapFormat::Png.extension(), "png");
    }
}
