//! Column-aligned text table output.
//!
//! Layout: a header row `i`, `time taken`, then one row per size. Every field
//! is right-aligned in a 20-character column.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use super::{BenchError, Measurement};

/// Width of every column.
pub const COLUMN_WIDTH: usize = 20;

/// Writes the header and one row per measurement to `out`.
pub fn write_table<W: Write>(out: &mut W, rows: &[Measurement]) -> io::Result<()> {
    writeln!(out, "{:>w$}{:>w$}", "i", "time taken", w = COLUMN_WIDTH)?;
    for row in rows {
        writeln!(
            out,
            "{:>w$}{:>w$}",
            row.size,
            format_general(row.mean_seconds),
            w = COLUMN_WIDTH
        )?;
    }
    out.flush()
}

/// Writes the table to `path`, creating parent directories as needed.
pub fn write_table_file(path: &Path, rows: &[Measurement]) -> Result<(), BenchError> {
    let io_err = |source| BenchError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let file = fs::File::create(path).map_err(io_err)?;
    write_table(&mut BufWriter::new(file), rows).map_err(io_err)?;

    info!("table written to {}", path.display());
    Ok(())
}

/// Formats `value` with six significant digits, switching to exponent
/// notation below `1e-4` or from `1e6` up, and dropping trailing zeros.
///
/// ```
/// use sortbench::bench::table::format_general;
///
/// assert_eq!(format_general(1.5e-6), "1.5e-06");
/// assert_eq!(format_general(0.00012), "0.00012");
/// assert_eq!(format_general(250.0), "250");
/// ```
pub fn format_general(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Rounding to the target precision first settles the exponent, so
    // 999999.7 becomes 1e+06 rather than 1000000.
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if exp < -4 || exp >= PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (PRECISION - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
