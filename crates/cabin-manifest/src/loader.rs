//! CSV manifest loader.
//!
//! # File format
//!
//! One row per passenger, with a header:
//!
//! ```csv
//! passenger,row,col
//! alice,1,0
//! bob,1,4
//! ```
//!
//! `(row, col)` must name a Seat tile of the layout the manifest is being
//! bound to.  Validation here is what lets the step engine run without any
//! runtime error path: out-of-range coordinates, non-seat targets, duplicate
//! claims, and over-full manifests are all rejected at load time.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use cabin_core::{Cell, LoadError, LoadResult, PassengerId};
use cabin_layout::Layout;

use crate::{Manifest, Passenger};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ManifestRecord {
    passenger: String,
    row:       u16,
    col:       u16,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a manifest from a CSV file and bind it to `layout`.
pub fn load_manifest(path: &Path, layout: &Layout) -> LoadResult<Manifest> {
    let file = std::fs::File::open(path).map_err(LoadError::Io)?;
    load_manifest_reader(file, layout)
}

/// Like [`load_manifest`] but accepts any `Read` source.
pub fn load_manifest_reader<R: Read>(reader: R, layout: &Layout) -> LoadResult<Manifest> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let (width, height) = layout.size();

    let mut passengers: Vec<Passenger> = Vec::new();
    let mut claimed: FxHashMap<Cell, PassengerId> = FxHashMap::default();

    for (i, result) in csv_reader.deserialize::<ManifestRecord>().enumerate() {
        let line = i + 2; // 1-based, after the header row
        let record = result.map_err(|e| LoadError::Format {
            line,
            message: e.to_string(),
        })?;

        let seat = Cell::new(record.row, record.col);
        if record.row >= height || record.col >= width {
            return Err(LoadError::SizeMismatch {
                what: "seat coordinate",
                cell: seat,
                width,
                height,
            });
        }
        if !layout.tile(seat).is_seat() {
            return Err(LoadError::SizeMismatch {
                what: "non-seat target",
                cell: seat,
                width,
                height,
            });
        }
        let id = PassengerId(passengers.len() as u32);
        if claimed.insert(seat, id).is_some() {
            return Err(LoadError::DuplicateSeat { seat });
        }

        passengers.push(Passenger::new(record.passenger, seat));
    }

    if passengers.len() > layout.seat_count() {
        // Unreachable while seats are unique, but kept as a guard for future
        // relaxations of the duplicate rule.
        return Err(LoadError::SizeMismatch {
            what: "manifest size",
            cell: Cell::new(height, width),
            width,
            height,
        });
    }

    Ok(Manifest::from_passengers(passengers))
}
