//! Command execution
//!
//! Results go to `out` and the `Invalid` marker to `err`, both without a
//! trailing newline. The returned value is the process exit code.

use crate::cli::{Commands, SearchArgs};
use anyhow::{Context, Result};
use figsearch_io::{BitmapFormat, read_bitmap, validate_file, write_bitmap};
use figsearch_region::{FigureKind, find_figure, format_figure, render_figure};
use std::io::Write;
use tracing::{debug, info};

/// Printed on stdout when `test` accepts a file
pub const VALID: &str = "Valid";

/// Printed on stderr for unreadable or malformed input
pub const INVALID: &str = "Invalid";

/// Exit code for success, including "Not found"
pub const EXIT_OK: u8 = 0;

/// Exit code for invalid input
pub const EXIT_INVALID: u8 = 1;

/// Exit code for usage errors
pub const EXIT_USAGE: u8 = 2;

/// Run a parsed command
///
/// # Errors
///
/// Fails only when writing to `out`/`err` or writing the `--mask` file
/// fails; invalid input is reported through `err` and [`EXIT_INVALID`].
pub fn execute<W: Write, E: Write>(command: &Commands, out: &mut W, err: &mut E) -> Result<u8> {
    let code = match command {
        Commands::Test { file } => {
            if validate_file(file) {
                write!(out, "{}", VALID)?;
                EXIT_OK
            } else {
                write!(err, "{}", INVALID)?;
                EXIT_INVALID
            }
        }
        Commands::Hline(args) => search(FigureKind::HorizontalLine, args, out, err)?,
        Commands::Vline(args) => search(FigureKind::VerticalLine, args, out, err)?,
        Commands::Square(args) => search(FigureKind::Square, args, out, err)?,
    };
    out.flush()?;
    err.flush()?;
    Ok(code)
}

fn search<W: Write, E: Write>(
    kind: FigureKind,
    args: &SearchArgs,
    out: &mut W,
    err: &mut E,
) -> Result<u8> {
    let bitmap = match read_bitmap(&args.file) {
        Ok(bitmap) => bitmap,
        Err(e) => {
            debug!(file = %args.file.display(), error = %e, "input rejected");
            write!(err, "{}", INVALID)?;
            return Ok(EXIT_INVALID);
        }
    };

    let figure = find_figure(&bitmap, kind)?;
    let report = format_figure(figure.as_ref());
    info!(%kind, file = %args.file.display(), %report, "search finished");
    write!(out, "{}", report)?;

    if let Some(path) = &args.mask {
        let mask = match &figure {
            Some(figure) => render_figure(&bitmap, figure)?,
            None => bitmap.create_template(),
        };
        let format = BitmapFormat::from_extension(path);
        write_bitmap(&mask, path, format)
            .with_context(|| format!("failed to write mask to {}", path.display()))?;
        info!(path = %path.display(), ?format, "wrote mask");
    }

    Ok(EXIT_OK)
}
