//! PBM (Portable Bitmap) format support
//!
//! Reads and writes plain PBM (P1) and raw PBM (P4). In both encodings a
//! set bit (black) is a 1-cell. Graymap and pixmap variants (P2/P3/P5/P6)
//! carry multi-valued pixels and are not supported.

use crate::{IoError, IoResult};
use figsearch_core::Bitmap;
use std::io::{Read, Write};

/// PBM raster encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PnmEncoding {
    /// Plain `P1`: one ASCII digit per cell
    Ascii,
    /// Raw `P4`: cells packed 8 per byte, MSB first, rows byte-aligned
    #[default]
    Binary,
}

/// Cursor over a PBM header.
struct HeaderReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Skip whitespace and `#` comments (to end of line).
    fn skip_separators(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                    self.pos += 1;
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn read_magic(&mut self) -> IoResult<PnmEncoding> {
        let magic = self.data.get(..2);
        self.pos = 2;
        match magic {
            Some(b"P1") => Ok(PnmEncoding::Ascii),
            Some(b"P4") => Ok(PnmEncoding::Binary),
            _ => Err(IoError::UnsupportedFormat(
                "not a PBM (P1/P4) file".to_string(),
            )),
        }
    }

    fn read_dimension(&mut self, name: &str) -> IoResult<u32> {
        self.skip_separators();
        let start = self.pos;
        while self.data.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        let value = std::str::from_utf8(&self.data[start..self.pos])
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(|| IoError::InvalidData(format!("invalid PBM {}", name)))?;
        if value == 0 {
            return Err(IoError::InvalidData(format!("PBM {} must be positive", name)));
        }
        Ok(value)
    }
}

/// Read a PBM bitmap (P1 or P4) from a reader.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<Bitmap> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut header = HeaderReader::new(&data);
    let encoding = header.read_magic()?;
    let width = header.read_dimension("width")?;
    let height = header.read_dimension("height")?;
    let size = (height as usize)
        .checked_mul(width as usize)
        .ok_or_else(|| IoError::InvalidData(format!("bitmap too large: {}x{}", height, width)))?;

    let cells = match encoding {
        PnmEncoding::Ascii => {
            let mut cells = Vec::with_capacity(size.min(data.len()));
            for &b in &data[header.pos..] {
                match b {
                    b'0' | b'1' if cells.len() < size => cells.push(b - b'0'),
                    b'0' | b'1' => {
                        return Err(IoError::InvalidData(format!(
                            "more than {} cells in plain PBM",
                            size
                        )));
                    }
                    b if b.is_ascii_whitespace() => {}
                    other => {
                        return Err(IoError::InvalidData(format!(
                            "unexpected byte 0x{:02x} in plain PBM raster",
                            other
                        )));
                    }
                }
            }
            cells
        }
        PnmEncoding::Binary => {
            // Exactly one whitespace byte separates the header from the raster
            if !data.get(header.pos).is_some_and(u8::is_ascii_whitespace) {
                return Err(IoError::InvalidData(
                    "missing separator after PBM header".to_string(),
                ));
            }
            let raster = &data[header.pos + 1..];
            let bytes_per_row = (width as usize).div_ceil(8);
            if raster.len() < bytes_per_row * height as usize {
                return Err(IoError::InvalidData(format!(
                    "raw PBM raster truncated: {} of {} bytes",
                    raster.len(),
                    bytes_per_row * height as usize
                )));
            }
            let mut cells = Vec::with_capacity(size);
            for row in raster.chunks_exact(bytes_per_row).take(height as usize) {
                for x in 0..width as usize {
                    let bit = 7 - (x % 8);
                    cells.push((row[x / 8] >> bit) & 1);
                }
            }
            cells
        }
    };

    if cells.len() != size {
        return Err(IoError::InvalidData(format!(
            "expected {} cells in PBM, found {}",
            size,
            cells.len()
        )));
    }

    Ok(Bitmap::from_cells(height, width, cells)?)
}

/// Write a bitmap as PBM to a writer.
pub fn write_pnm<W: Write>(bitmap: &Bitmap, mut writer: W, encoding: PnmEncoding) -> IoResult<()> {
    let (width, height) = (bitmap.width(), bitmap.height());
    match encoding {
        PnmEncoding::Ascii => {
            writeln!(writer, "P1\n{} {}", width, height)?;
            for row in bitmap.rows() {
                let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
                writeln!(writer, "{}", line.join(" "))?;
            }
        }
        PnmEncoding::Binary => {
            writeln!(writer, "P4\n{} {}", width, height)?;
            let bytes_per_row = (width as usize).div_ceil(8);
            let mut packed = vec![0u8; bytes_per_row];
            for row in bitmap.rows() {
                packed.fill(0);
                for (x, &v) in row.iter().enumerate() {
                    if v != 0 {
                        packed[x / 8] |= 1 << (7 - (x % 8));
                    }
                }
                writer.write_all(&packed)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
