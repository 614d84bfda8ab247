/// Delimited-text loader for the banknote table.
///
/// Supported format:
/// - UTF-8, one sample per line, a single-character delimiter (`,` by default)
/// - Optional header row (auto-detected: first row is a header only if none
///   of its cells is numeric)
/// - Double-quoted fields with embedded delimiters are handled
/// - Exactly five columns: four features followed by a 0/1 label
use std::path::Path;

use crate::data::dataset::Sample;
use crate::error::{Error, Result};
use crate::network::network::INPUT_SIZE;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads the whole file into memory and parses it with `parse_samples`.
pub fn load_samples(path: &Path, delimiter: char) -> Result<Vec<Sample>> {
    let data = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let samples = parse_samples(&data, delimiter)?;
    tracing::info!("loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Parses raw bytes into samples.
pub fn parse_samples(data: &[u8], delimiter: char) -> Result<Vec<Sample>> {
    let text = std::str::from_utf8(data).map_err(|e| Error::Parse {
        row: data[..e.valid_up_to()].iter().filter(|&&b| b == b'\n').count() + 1,
        message: "line is not valid UTF-8".into(),
    })?;

    let mut lines = text.lines().enumerate().peekable();

    // Auto-detect header: skip first line if no cell is numeric.
    if let Some((_, first)) = lines.peek() {
        if is_header(first, delimiter) {
            tracing::debug!("skipping header row");
            lines.next();
        }
    }

    let mut samples = Vec::new();

    for (line_idx, line) in lines {
        let row = line_idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cells = parse_row(line, delimiter);
        if cells.len() != INPUT_SIZE + 1 {
            return Err(Error::Parse {
                row,
                message: format!("expected {} columns, got {}", INPUT_SIZE + 1, cells.len()),
            });
        }

        let values = parse_floats(&cells, row)?;
        let mut features = [0.0; INPUT_SIZE];
        features.copy_from_slice(&values[..INPUT_SIZE]);

        let label = values[INPUT_SIZE];
        if label != 0.0 && label != 1.0 {
            return Err(Error::Parse {
                row,
                message: format!("label '{}' is neither 0 nor 1", cells[INPUT_SIZE].trim()),
            });
        }

        samples.push(Sample::new(features, label));
    }

    if samples.is_empty() {
        return Err(Error::EmptyDataset("input file".into()));
    }

    Ok(samples)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Returns `true` if the row looks like a header (no cell parses as a number).
///
/// A partly numeric row is data, so a malformed first sample is reported
/// instead of being skipped.
fn is_header(line: &str, delimiter: char) -> bool {
    !line.trim().is_empty()
        && parse_row(line, delimiter)
            .iter()
            .all(|c| c.trim().parse::<f64>().is_err())
}

/// Splits a single row, handling double-quoted fields.
fn parse_row(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote inside quoted field.
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            c if c == delimiter && !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Parses a slice of string cells as `f64`, returning an error with row info on failure.
fn parse_floats(cells: &[String], row: usize) -> Result<Vec<f64>> {
    cells
        .iter()
        .map(|c| {
            let t = c.trim();
            match t.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(Error::Parse {
                    row,
                    message: format!("'{}' is not a valid number", t),
                }),
            }
        })
        .collect()
}
