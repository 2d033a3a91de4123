//! Load-time error taxonomy.
//!
//! Every failure in this workspace is a *load-time* failure: once a layout
//! and manifest have validated, the step engine cannot fail at runtime.
//! `LoadError` is therefore the common base shared by the layout and
//! manifest crates; `cabin-sim` wraps it with its own handle- and
//! batch-level variants.

use thiserror::Error;

use crate::Cell;

/// Errors raised while loading or generating a layout/manifest pair.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Malformed file syntax.  `line` is 1-based and counts the header row
    /// where one exists, so it matches what an editor shows.
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },

    /// A coordinate fell outside the grid, targeted a non-Seat tile, or the
    /// manifest holds more passengers than the layout has seats.
    #[error("{what} {cell} is invalid for a {width}x{height} layout")]
    SizeMismatch {
        what:   &'static str,
        cell:   Cell,
        width:  u16,
        height: u16,
    },

    /// Two passengers claim the same seat.
    #[error("seat {seat} is claimed by more than one passenger")]
    DuplicateSeat { seat: Cell },

    /// A seat with no walkable path from the entrance — the layout is
    /// malformed and is rejected before any stepping can happen.
    #[error("seat {seat} is unreachable from the entrance")]
    UnreachableSeat { seat: Cell },

    /// The layout has no entrance tile.
    #[error("layout has no entrance tile")]
    NoEntrance,

    /// The layout has more than one entrance tile (single-door model).
    #[error("layout has multiple entrance tiles ({first} and {second})")]
    MultipleEntrances { first: Cell, second: Cell },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for loaders and generators.
pub type LoadResult<T> = Result<T, LoadError>;
