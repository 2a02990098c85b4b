//! Native text format support
//!
//! The text format is a sequence of whitespace-separated integers:
//!
//! ```text
//! 3 4
//! 1 1 0 1
//! 0 1 1 1
//! 1 0 0 0
//! ```
//!
//! The first two tokens are the height and width (both > 0). Exactly
//! `height * width` cell tokens follow in row-major order, each 0 or 1.
//! Line breaks carry no meaning; only the token count matters.

use crate::{IoError, IoResult};
use figsearch_core::Bitmap;
use std::io::{Read, Write};

/// Split raw bytes into whitespace-separated tokens.
fn tokens(data: &[u8]) -> impl Iterator<Item = &[u8]> {
    data.split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty())
}

fn parse_integer(token: &[u8]) -> Option<i64> {
    std::str::from_utf8(token).ok()?.parse().ok()
}

fn parse_dimension(token: Option<&[u8]>, name: &str) -> IoResult<u32> {
    let token = token.ok_or_else(|| IoError::InvalidData(format!("missing {}", name)))?;
    match parse_integer(token) {
        Some(v) if v > 0 => u32::try_from(v)
            .map_err(|_| IoError::InvalidData(format!("{} too large: {}", name, v))),
        Some(v) => Err(IoError::InvalidData(format!(
            "{} must be positive, got {}",
            name, v
        ))),
        None => Err(IoError::InvalidData(format!(
            "{} is not an integer: {:?}",
            name,
            String::from_utf8_lossy(token)
        ))),
    }
}

/// Parse a text bitmap held in memory.
pub fn parse_text(data: &[u8]) -> IoResult<Bitmap> {
    let mut tokens = tokens(data);
    let height = parse_dimension(tokens.next(), "height")?;
    let width = parse_dimension(tokens.next(), "width")?;

    let expected = (height as usize)
        .checked_mul(width as usize)
        .ok_or_else(|| IoError::InvalidData(format!("bitmap too large: {}x{}", height, width)))?;

    // Each cell needs at least two bytes of input, so never trust the
    // header alone for the allocation size.
    let mut cells = Vec::with_capacity(expected.min(data.len() / 2 + 1));
    for token in tokens {
        let value = match parse_integer(token) {
            Some(v @ (0 | 1)) => v as u8,
            Some(v) => {
                return Err(IoError::InvalidData(format!(
                    "cell {} has value {}, expected 0 or 1",
                    cells.len(),
                    v
                )));
            }
            None => {
                return Err(IoError::InvalidData(format!(
                    "cell {} is not an integer: {:?}",
                    cells.len(),
                    String::from_utf8_lossy(token)
                )));
            }
        };
        if cells.len() == expected {
            return Err(IoError::InvalidData(format!(
                "more than {} cells for a {}x{} bitmap",
                expected, height, width
            )));
        }
        cells.push(value);
    }

    if cells.len() != expected {
        return Err(IoError::InvalidData(format!(
            "expected {} cells for a {}x{} bitmap, found {}",
            expected,
            height,
            width,
            cells.len()
        )));
    }

    Ok(Bitmap::from_cells(height, width, cells)?)
}

/// Read a text bitmap from a reader.
pub fn read_text<R: Read>(mut reader: R) -> IoResult<Bitmap> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    parse_text(&data)
}

/// Write a bitmap in the text format.
///
/// Emits the `height width` header on its own line, then one line per row.
pub fn write_text<W: Write>(bitmap: &Bitmap, mut writer: W) -> IoResult<()> {
    writeln!(writer, "{} {}", bitmap.height(), bitmap.width())?;
    for row in bitmap.rows() {
        let line: Vec<&str> = row
            .iter()
            .map(|&v| if v == 0 { "0" } else { "1" })
            .collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}
