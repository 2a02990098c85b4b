//! PNG format support
//!
//! Only 1-bit grayscale PNGs map onto a bitmap without loss. Black samples
//! (bit 0) are 1-cells and white samples (bit 1) are 0-cells.

use crate::{IoError, IoResult};
use figsearch_core::Bitmap;
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a 1-bit grayscale PNG
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Bitmap> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    match (info.color_type, info.bit_depth) {
        (ColorType::Grayscale, BitDepth::One) => {}
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}, expected 1-bit grayscale",
                color_type, bit_depth
            )));
        }
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut cells = Vec::with_capacity(width as usize * height as usize);
    for row in data.chunks(bytes_per_row).take(height as usize) {
        for x in 0..width as usize {
            let byte = row.get(x / 8).copied().ok_or_else(|| {
                IoError::DecodeError("PNG row shorter than image width".to_string())
            })?;
            cells.push(((byte >> (7 - (x % 8))) & 1) ^ 1);
        }
    }

    Ok(Bitmap::from_cells(height, width, cells)?)
}

/// Write a bitmap as a 1-bit grayscale PNG
pub fn write_png<W: Write>(bitmap: &Bitmap, writer: W) -> IoResult<()> {
    let width = bitmap.width();
    let height = bitmap.height();
    if bitmap.is_empty() {
        return Err(IoError::EncodeError(format!(
            "cannot encode a {}x{} bitmap as PNG",
            height, width
        )));
    }

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::One);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let bytes_per_row = width.div_ceil(8) as usize;
    let mut data = vec![0u8; bytes_per_row * height as usize];
    for (y, row) in bitmap.rows().enumerate() {
        let row_start = y * bytes_per_row;
        for (x, &val) in row.iter().enumerate() {
            if val == 0 {
                data[row_start + x / 8] |= 1 << (7 - (x % 8));
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
