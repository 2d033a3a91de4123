//! CSV layout loader.
//!
//! # File format
//!
//! One CSV record per grid row, one field per cell, each field a tile wire
//! code (`0`=void, `1`=aisle, `2`=seat, `3`=entrance).  No header row — the
//! first record is grid row 0.
//!
//! ```csv
//! 2,2,3,2,2
//! 2,2,1,2,2
//! 2,2,1,2,2
//! ```
//!
//! All records must have the same number of fields; parse failures report
//! the offending 1-based line.

use std::io::Read;
use std::path::Path;

use cabin_core::{LoadError, LoadResult, Tile};

use crate::Layout;

/// Load and validate a layout from a CSV file of tile codes.
pub fn load_layout(path: &Path) -> LoadResult<Layout> {
    let file = std::fs::File::open(path).map_err(LoadError::Io)?;
    load_layout_reader(file)
}

/// Like [`load_layout`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from streams.
pub fn load_layout_reader<R: Read>(reader: R) -> LoadResult<Layout> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // width is checked per-record for a line-addressed error
        .from_reader(reader);

    let mut tiles: Vec<Tile> = Vec::new();
    let mut width: Option<usize> = None;
    let mut height: usize = 0;

    for (i, result) in csv_reader.records().enumerate() {
        let line = i + 1;
        let record = result.map_err(|e| LoadError::Format {
            line,
            message: e.to_string(),
        })?;

        match width {
            None => width = Some(record.len()),
            Some(w) if record.len() != w => {
                return Err(LoadError::Format {
                    line,
                    message: format!("expected {w} fields, found {}", record.len()),
                });
            }
            Some(_) => {}
        }

        for field in record.iter() {
            let code: u8 = field.trim().parse().map_err(|_| LoadError::Format {
                line,
                message: format!("invalid tile code {field:?}: expected 0, 1, 2, or 3"),
            })?;
            let tile = Tile::from_code(code).ok_or_else(|| LoadError::Format {
                line,
                message: format!("unknown tile code {code}"),
            })?;
            tiles.push(tile);
        }
        height += 1;
    }

    let width = width.unwrap_or(0);
    if width == 0 || height == 0 {
        return Err(LoadError::Format {
            line: 1,
            message: "layout file is empty".to_string(),
        });
    }

    Layout::from_tiles(width as u16, height as u16, tiles)
}
