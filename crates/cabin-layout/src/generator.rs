//! Parametric cabin generation.
//!
//! Produces the two canonical cabin shapes:
//!
//! - **Single aisle** (narrow body): one aisle column down the middle, the
//!   entrance at its row-0 head, seats everywhere else.
//! - **Two aisles** (wider body, `width >= two_aisle_threshold`): two
//!   symmetric aisle columns; row 0 is a cross-aisle connecting both to the
//!   single entrance, so every seat stays reachable from one door.
//!
//! Generation is purely parametric — the same `LayoutParams` always produce
//! the same grid, so seeded runs replay exactly.

use cabin_core::{Cell, LoadError, LoadResult, Tile};

use crate::Layout;

/// Generation parameters with the classic narrow-body defaults.
#[derive(Copy, Clone, Debug)]
pub struct LayoutParams {
    pub width:  u16,
    pub height: u16,
    /// Widths at or above this get the two-aisle pattern.
    pub two_aisle_threshold: u16,
}

impl Default for LayoutParams {
    /// A 7 × 10 single-aisle cabin (3+3 seating, 9 seat rows).
    fn default() -> Self {
        LayoutParams {
            width:  7,
            height: 10,
            two_aisle_threshold: 9,
        }
    }
}

impl LayoutParams {
    pub fn new(width: u16, height: u16) -> Self {
        LayoutParams {
            width,
            height,
            ..Default::default()
        }
    }
}

/// Generate a cabin layout for `params`.
///
/// Widths below 3 or heights below 2 cannot hold the aisle-plus-seats
/// pattern and are rejected as a `SizeMismatch`.
pub fn random_layout(params: LayoutParams) -> LoadResult<Layout> {
    let LayoutParams { width, height, two_aisle_threshold } = params;

    if width < 3 || height < 2 {
        return Err(LoadError::SizeMismatch {
            what: "layout dimensions",
            cell: Cell::new(height, width),
            width,
            height,
        });
    }

    let tiles = if width >= two_aisle_threshold {
        two_aisle_tiles(width, height)
    } else {
        single_aisle_tiles(width, height)
    };

    Layout::from_tiles(width, height, tiles)
}

fn single_aisle_tiles(width: u16, height: u16) -> Vec<Tile> {
    let aisle_col = width / 2;
    let mut tiles = Vec::with_capacity(width as usize * height as usize);
    for row in 0..height {
        for col in 0..width {
            tiles.push(if col == aisle_col {
                if row == 0 { Tile::Entrance } else { Tile::Aisle }
            } else {
                Tile::Seat
            });
        }
    }
    tiles
}

fn two_aisle_tiles(width: u16, height: u16) -> Vec<Tile> {
    let left_aisle = width / 3;
    let right_aisle = width - 1 - width / 3;
    let mut tiles = Vec::with_capacity(width as usize * height as usize);
    for row in 0..height {
        for col in 0..width {
            tiles.push(if row == 0 {
                // Cross-aisle joining both aisles to the single door.
                if col == left_aisle { Tile::Entrance } else { Tile::Aisle }
            } else if col == left_aisle || col == right_aisle {
                Tile::Aisle
            } else {
                Tile::Seat
            });
        }
    }
    tiles
}
