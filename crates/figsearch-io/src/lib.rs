//! figsearch-io - Bitmap file I/O for figsearch
//!
//! Loads and stores binary bitmaps in several formats:
//!
//! - **Text** - `height width` followed by whitespace-separated 0/1 cells
//! - **PBM** - plain (P1) and raw (P4), behind the `pnm` feature
//! - **PNG** - 1-bit grayscale, behind the `png-format` feature
//!
//! Formats are detected from file contents, not extensions.
//!
//! # Examples
//!
//! ```
//! use figsearch_io::{BitmapFormat, read_bitmap_mem, write_bitmap_mem};
//!
//! let bitmap = read_bitmap_mem(b"2 2\n1 0\n0 1\n").unwrap();
//! assert_eq!(bitmap.count_ones(), 2);
//!
//! let text = write_bitmap_mem(&bitmap, BitmapFormat::Text).unwrap();
//! assert_eq!(text, b"2 2\n1 0\n0 1\n");
//! ```

pub mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;
pub mod text;

pub use error::{IoError, IoResult};
pub use format::{BitmapFormat, detect_format, detect_format_from_bytes};
#[cfg(feature = "pnm")]
pub use pnm::PnmEncoding;
pub use text::{parse_text, read_text, write_text};

use figsearch_core::Bitmap;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;
use tracing::debug;

/// Read a bitmap from a file, detecting its format from the contents.
pub fn read_bitmap<P: AsRef<Path>>(path: P) -> IoResult<Bitmap> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let bitmap = read_bitmap_mem(&data)?;
    debug!(
        path = %path.display(),
        height = bitmap.height(),
        width = bitmap.width(),
        "loaded bitmap"
    );
    Ok(bitmap)
}

/// Read a bitmap from memory, detecting its format from the contents.
pub fn read_bitmap_mem(data: &[u8]) -> IoResult<Bitmap> {
    match detect_format_from_bytes(data)? {
        BitmapFormat::Text => parse_text(data),
        #[cfg(feature = "pnm")]
        BitmapFormat::PbmAscii | BitmapFormat::PbmBinary => pnm::read_pnm(data),
        #[cfg(feature = "png-format")]
        BitmapFormat::Png => png::read_png(Cursor::new(data)),
        #[allow(unreachable_patterns)]
        format => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            format
        ))),
    }
}

/// Check whether a file holds a well-formed bitmap.
///
/// Any failure, including a missing or unreadable file, counts as invalid.
pub fn validate_file<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    match read_bitmap(path) {
        Ok(_) => true,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "bitmap rejected");
            false
        }
    }
}

/// Write a bitmap to a file in the given format.
pub fn write_bitmap<P: AsRef<Path>>(bitmap: &Bitmap, path: P, format: BitmapFormat) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_bitmap_format(bitmap, &mut writer, format)?;
    writer.flush()?;
    debug!(path = %path.display(), ?format, "wrote bitmap");
    Ok(())
}

/// Write a bitmap to memory in the given format.
pub fn write_bitmap_mem(bitmap: &Bitmap, format: BitmapFormat) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_bitmap_format(bitmap, &mut buf, format)?;
    Ok(buf)
}

fn write_bitmap_format<W: Write>(bitmap: &Bitmap, writer: W, format: BitmapFormat) -> IoResult<()> {
    match format {
        BitmapFormat::Text => write_text(bitmap, writer),
        #[cfg(feature = "pnm")]
        BitmapFormat::PbmAscii => pnm::write_pnm(bitmap, writer, PnmEncoding::Ascii),
        #[cfg(feature = "pnm")]
        BitmapFormat::PbmBinary => pnm::write_pnm(bitmap, writer, PnmEncoding::Binary),
        #[cfg(feature = "png-format")]
        BitmapFormat::Png => png::write_png(bitmap, writer),
        #[allow(unreachable_patterns)]
        format => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            format
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bitmap_mem_dispatches_on_content() {
        let text = read_bitmap_mem(b"1 3\n1 1 0\n").unwrap();
        let pbm = read_bitmap_mem(b"P1\n3 1\n1 1 0\n").unwrap();
        assert_eq!(text, pbm);
    }

    #[test]
    fn test_read_bitmap_mem_rejects_garbage() {
        assert!(read_bitmap_mem(b"").is_err());
        assert!(read_bitmap_mem(b"hello").is_err());
        assert!(read_bitmap_mem(b"2 2\n1 1 1\n").is_err());
    }

    #[test]
    fn test_write_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let bitmap = read_bitmap_mem(b"2 3\n0 1 1\n1 1 0\n").unwrap();
        for format in [
            BitmapFormat::Text,
            BitmapFormat::PbmAscii,
            BitmapFormat::PbmBinary,
            BitmapFormat::Png,
        ] {
            let path = dir.path().join(format!("out.{}", format.extension()));
            write_bitmap(&bitmap, &path, format).unwrap();
            assert_eq!(detect_format(&path).unwrap(), format);
            assert_eq!(read_bitmap(&path).unwrap(), bitmap);
        }
    }

    #[test]
    fn test_validate_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let bad = dir.path().join("bad.txt");
        std::fs::write(&good, "1 1\n1\n").unwrap();
        std::fs::write(&bad, "1 1\n2\n").unwrap();
        assert!(validate_file(&good));
        assert!(!validate_file(&bad));
        assert!(!validate_file(dir.path().join("missing.txt")));
    }
}
