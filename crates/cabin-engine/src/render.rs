//! Plain-text frame rendering for debugging and headless demos.

use cabin_core::{Cell, Tile};

use crate::BoardingState;

impl BoardingState {
    /// One text frame of the current occupancy:
    ///
    /// - `@` occupant (seated or in transit)
    /// - `%` contested cell (letting-through in progress)
    /// - `#` empty seat, `*` empty walkable cell, `?` void
    ///
    /// Debug aid only — the wire surface for front-ends is
    /// [`layout_grid`](Self::layout_grid) / [`occupancy_grid`](Self::occupancy_grid).
    pub fn ascii_frame(&self) -> String {
        let (width, height) = self.layout.size();
        let mut out = String::with_capacity((width as usize + 1) * height as usize);
        for row in 0..height {
            for col in 0..width {
                let cell = Cell::new(row, col);
                let idx = cell.flat(width);
                let ch = if self.contested[idx] {
                    '%'
                } else if self.occupancy[idx].is_some() {
                    '@'
                } else {
                    match self.layout.tile(cell) {
                        Tile::Seat => '#',
                        Tile::Aisle | Tile::Entrance => '*',
                        Tile::Void => '?',
                    }
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}
