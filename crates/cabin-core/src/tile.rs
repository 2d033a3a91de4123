//! Static grid-cell classification and its wire codes.
//!
//! The numeric codes are part of the external surface: layout files use them
//! and `layout_grid()` returns them unchanged, so front-ends can render a
//! board without linking against this crate.  The values are fixed —
//! renumbering them is a wire-format break.

use std::fmt;

/// Static classification of one grid cell.
///
/// `Void` cells are neither traversable nor seatable (bulkheads, galleys).
/// `Entrance` is the single boarding door; it behaves like an aisle cell for
/// movement purposes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Tile {
    #[default]
    Void,
    Aisle,
    Seat,
    Entrance,
}

impl Tile {
    /// Wire code: Void=0, Aisle=1, Seat=2, Entrance=3.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Tile::Void     => 0,
            Tile::Aisle    => 1,
            Tile::Seat     => 2,
            Tile::Entrance => 3,
        }
    }

    /// Inverse of [`code`](Self::code).  Returns `None` for unknown codes.
    #[inline]
    pub fn from_code(code: u8) -> Option<Tile> {
        match code {
            0 => Some(Tile::Void),
            1 => Some(Tile::Aisle),
            2 => Some(Tile::Seat),
            3 => Some(Tile::Entrance),
            _ => None,
        }
    }

    /// `true` for cells a passenger may walk through (Aisle, Entrance).
    #[inline]
    pub fn is_walkable(self) -> bool {
        matches!(self, Tile::Aisle | Tile::Entrance)
    }

    #[inline]
    pub fn is_seat(self) -> bool {
        self == Tile::Seat
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tile::Void     => "void",
            Tile::Aisle    => "aisle",
            Tile::Seat     => "seat",
            Tile::Entrance => "entrance",
        };
        f.write_str(name)
    }
}
