//! The strategy enum and queue construction.
//!
//! # Ordering rules
//!
//! | Variant        | Rule                                                       |
//! |----------------|------------------------------------------------------------|
//! | `FileOrder`    | manifest order unchanged (consumes no randomness)          |
//! | `Random`       | uniform permutation of the whole manifest                  |
//! | `BackToFront`  | row bands rear → front, shuffled within each band          |
//! | `FrontToBack`  | row bands front → rear, shuffled within each band          |
//! | `AisleFirst`   | aisle-side class, then middle, then window; shuffled within |
//! | `WindowFirst`  | window class, then middle, then aisle-side; shuffled within |
//!
//! Every shuffle is a uniform Fisher-Yates over the band/class.  Ties are
//! never resolved by manifest index — two passengers in the same band are in
//! random relative order even when the rest of the band is empty.

use std::fmt;

use serde::{Deserialize, Serialize};

use cabin_core::{PassengerId, SimRng};
use cabin_layout::{Layout, SeatClass};
use cabin_manifest::Manifest;

/// How a manifest is ordered into a boarding queue.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BoardingStrategy {
    FileOrder,
    Random,
    BackToFront { band_rows: u16 },
    FrontToBack { band_rows: u16 },
    AisleFirst,
    WindowFirst,
}

impl BoardingStrategy {
    /// Back-to-front with the default one-row bands.
    pub fn back_to_front() -> BoardingStrategy {
        BoardingStrategy::BackToFront { band_rows: 1 }
    }

    /// Front-to-back with the default one-row bands.
    pub fn front_to_back() -> BoardingStrategy {
        BoardingStrategy::FrontToBack { band_rows: 1 }
    }

    /// Produce the boarding queue for `manifest` on `layout`.
    ///
    /// The returned ids index into `manifest`; the manifest itself is left
    /// untouched.  For a fixed `(manifest, layout, seed)` the result is
    /// always the same sequence.
    pub fn build_queue(
        self,
        manifest: &Manifest,
        layout:   &Layout,
        rng:      &mut SimRng,
    ) -> Vec<PassengerId> {
        let ids: Vec<PassengerId> = manifest.ids().collect();

        match self {
            BoardingStrategy::FileOrder => ids,

            BoardingStrategy::Random => {
                let mut queue = ids;
                rng.shuffle(&mut queue);
                queue
            }

            BoardingStrategy::BackToFront { band_rows } => {
                band_queue(manifest, ids, band_rows, true, rng)
            }

            BoardingStrategy::FrontToBack { band_rows } => {
                band_queue(manifest, ids, band_rows, false, rng)
            }

            BoardingStrategy::AisleFirst => class_queue(
                manifest,
                layout,
                ids,
                [SeatClass::AisleSide, SeatClass::Middle, SeatClass::Window],
                rng,
            ),

            BoardingStrategy::WindowFirst => class_queue(
                manifest,
                layout,
                ids,
                [SeatClass::Window, SeatClass::Middle, SeatClass::AisleSide],
                rng,
            ),
        }
    }
}

impl fmt::Display for BoardingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardingStrategy::FileOrder => write!(f, "file-order"),
            BoardingStrategy::Random => write!(f, "random"),
            BoardingStrategy::BackToFront { band_rows } => {
                write!(f, "back-to-front/{band_rows}")
            }
            BoardingStrategy::FrontToBack { band_rows } => {
                write!(f, "front-to-back/{band_rows}")
            }
            BoardingStrategy::AisleFirst => write!(f, "aisle-first"),
            BoardingStrategy::WindowFirst => write!(f, "window-first"),
        }
    }
}

// ── Partition helpers ─────────────────────────────────────────────────────────

/// Partition by seat-row band, shuffle within bands, concatenate.
fn band_queue(
    manifest:   &Manifest,
    ids:        Vec<PassengerId>,
    band_rows:  u16,
    rear_first: bool,
    rng:        &mut SimRng,
) -> Vec<PassengerId> {
    if ids.is_empty() {
        return ids;
    }
    let band_rows = band_rows.max(1);

    let rows: Vec<u16> = ids.iter().map(|&id| manifest.get(id).seat.row).collect();
    let min_row = *rows.iter().min().unwrap();
    let max_row = *rows.iter().max().unwrap();

    let band_of = |row: u16| -> usize {
        let offset = if rear_first { max_row - row } else { row - min_row };
        (offset / band_rows) as usize
    };

    let band_count = band_of(if rear_first { min_row } else { max_row }) + 1;
    let mut bands: Vec<Vec<PassengerId>> = vec![Vec::new(); band_count];
    for (&id, &row) in ids.iter().zip(&rows) {
        bands[band_of(row)].push(id);
    }

    let mut queue = Vec::with_capacity(ids.len());
    for band in &mut bands {
        rng.shuffle(band);
        queue.extend_from_slice(band);
    }
    queue
}

/// Partition by seat class in `release_order`, shuffle within classes,
/// concatenate.
fn class_queue(
    manifest:      &Manifest,
    layout:        &Layout,
    ids:           Vec<PassengerId>,
    release_order: [SeatClass; 3],
    rng:           &mut SimRng,
) -> Vec<PassengerId> {
    let mut queue = Vec::with_capacity(ids.len());
    for class in release_order {
        let mut bucket: Vec<PassengerId> = ids
            .iter()
            .copied()
            .filter(|&id| layout.seat_class(manifest.get(id).seat) == class)
            .collect();
        rng.shuffle(&mut bucket);
        queue.extend_from_slice(&bucket);
    }
    queue
}
