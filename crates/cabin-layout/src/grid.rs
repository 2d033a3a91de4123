//! The validated cabin grid and its derived per-seat data.
//!
//! # Data layout
//!
//! Tiles are stored row-major in a flat `Vec<Tile>`; `Cell::flat(width)` is
//! the index.  Construction runs a breadth-first search over walkable tiles
//! from the entrance and derives, for every seat:
//!
//! - its **row anchor** — the walkable cell in the seat's row from which the
//!   seat is entered (only Seat cells may lie strictly between the two);
//! - its **route** — the BFS path entrance → anchor;
//! - its **seat class** — aisle-side / middle / window, by distance from the
//!   anchor within the seat's row section.
//!
//! A layout that fails any of this (no entrance, two entrances, a seat with
//! no served row anchor) is rejected with a [`LoadError`] before a
//! simulation can be built.

use rustc_hash::FxHashMap;

use cabin_core::{Cell, LoadError, LoadResult, Tile};

// ── SeatClass ─────────────────────────────────────────────────────────────────

/// Position of a seat within its row section, seen from the serving aisle.
///
/// Drives the aisle-first / window-first boarding strategies.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SeatClass {
    /// Directly adjacent to the serving aisle.
    AisleSide,
    /// Between the aisle-side and window seats.
    Middle,
    /// Farthest from the serving aisle in its section.
    Window,
}

// ── Per-seat derived data ─────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct SeatInfo {
    anchor: Cell,
    class:  SeatClass,
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Immutable width × height cabin grid.
///
/// Shared read-only between the engine and any number of queries; all
/// mutable simulation state lives elsewhere.
#[derive(Debug)]
pub struct Layout {
    width:  u16,
    height: u16,
    tiles:  Vec<Tile>,
    entry:  Cell,

    /// All Seat cells in row-major order.
    seats: Vec<Cell>,

    /// Derived data per seat cell.
    seat_info: FxHashMap<Cell, SeatInfo>,

    /// BFS parent per walkable cell (flat-indexed); `None` for the entrance
    /// itself and for unreachable/non-walkable cells.
    parent: Vec<Option<Cell>>,

    /// BFS distance from the entrance per walkable cell; `u32::MAX` when
    /// unreachable or not walkable.
    dist: Vec<u32>,
}

impl Layout {
    /// Validate a full tile grid and derive all per-seat data.
    ///
    /// # Panics
    ///
    /// Panics if `tiles.len() != width * height` — loaders and generators
    /// always hand over a full grid, so a short array is a caller bug, not a
    /// file-format error.
    pub fn from_tiles(width: u16, height: u16, tiles: Vec<Tile>) -> LoadResult<Layout> {
        assert_eq!(
            tiles.len(),
            width as usize * height as usize,
            "tile array does not fill the grid"
        );

        let entry = find_entrance(width, height, &tiles)?;
        let (parent, dist) = bfs_from(entry, width, height, &tiles);

        let mut layout = Layout {
            width,
            height,
            tiles,
            entry,
            seats: Vec::new(),
            seat_info: FxHashMap::default(),
            parent,
            dist,
        };

        layout.derive_seats()?;
        Ok(layout)
    }

    // ── Dimensions and raw access ─────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// `(width, height)` — the shape the front-end asks for.
    #[inline]
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    #[inline]
    pub fn tile(&self, cell: Cell) -> Tile {
        self.tiles[cell.flat(self.width)]
    }

    #[inline]
    pub fn entry(&self) -> Cell {
        self.entry
    }

    #[inline]
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.tile(cell).is_walkable()
    }

    /// Number of cells in the grid (`width * height`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    // ── Seats ─────────────────────────────────────────────────────────────

    /// All Seat cells in row-major order.
    #[inline]
    pub fn seats(&self) -> &[Cell] {
        &self.seats
    }

    #[inline]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// The walkable cell from which `seat` is entered.
    ///
    /// # Panics
    ///
    /// Panics if `seat` is not a Seat cell of this layout (construction
    /// guarantees every seat has an anchor).
    #[inline]
    pub fn anchor_of(&self, seat: Cell) -> Cell {
        self.seat_info[&seat].anchor
    }

    /// Seat cells strictly between `seat` and its anchor, nearest-first.
    pub fn intermediates(&self, seat: Cell) -> Vec<Cell> {
        let anchor = self.anchor_of(seat);
        let row = seat.row;
        let mut cells = Vec::new();
        if anchor.col < seat.col {
            for col in anchor.col + 1..seat.col {
                cells.push(Cell::new(row, col));
            }
        } else {
            for col in (seat.col + 1..anchor.col).rev() {
                cells.push(Cell::new(row, col));
            }
        }
        cells
    }

    /// Aisle-side / middle / window classification of `seat`.
    ///
    /// # Panics
    ///
    /// Panics if `seat` is not a Seat cell of this layout.
    #[inline]
    pub fn seat_class(&self, seat: Cell) -> SeatClass {
        self.seat_info[&seat].class
    }

    /// The walkable path entrance → `seat`'s anchor, both endpoints included.
    ///
    /// The engine walks this one cell per tick; index 0 is always the
    /// entrance.
    pub fn route_to(&self, seat: Cell) -> Vec<Cell> {
        let mut cursor = self.anchor_of(seat);
        let mut path = vec![cursor];
        while let Some(prev) = self.parent[cursor.flat(self.width)] {
            path.push(prev);
            cursor = prev;
        }
        path.reverse();
        path
    }

    // ── Wire surface ──────────────────────────────────────────────────────

    /// The grid as nested wire codes (`Tile::code`), row-major.
    pub fn grid_codes(&self) -> Vec<Vec<u8>> {
        (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| self.tile(Cell::new(row, col)).code())
                    .collect()
            })
            .collect()
    }

    // ── Derivation ────────────────────────────────────────────────────────

    fn derive_seats(&mut self) -> LoadResult<()> {
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = Cell::new(row, col);
                if self.tile(cell).is_seat() {
                    let info = self.derive_seat(cell)?;
                    self.seats.push(cell);
                    self.seat_info.insert(cell, info);
                }
            }
        }
        Ok(())
    }

    /// Find the serving anchor for one seat, or reject the layout.
    ///
    /// Scans left and right along the row; a side is viable if the first
    /// non-Seat tile it meets is walkable *and* reachable from the entrance.
    /// The nearer side wins; ties resolve to the lower column so layouts are
    /// deterministic.
    fn derive_seat(&self, seat: Cell) -> LoadResult<SeatInfo> {
        let left = self.scan_side(seat, Side::Left);
        let right = self.scan_side(seat, Side::Right);

        let (anchor, lateral_dist) = match (left, right) {
            (None, None) => return Err(LoadError::UnreachableSeat { seat }),
            (Some(l), None) => l,
            (None, Some(r)) => r,
            (Some(l), Some(r)) => {
                if r.1 < l.1 {
                    r
                } else {
                    l
                }
            }
        };

        // Window = last seat of the section as seen from the anchor.
        let away_col = if anchor.col < seat.col {
            (seat.col + 1 < self.width).then_some(seat.col + 1)
        } else {
            seat.col.checked_sub(1)
        };
        let beyond_is_seat = away_col
            .map(|col| self.tile(Cell::new(seat.row, col)).is_seat())
            .unwrap_or(false);

        let class = if lateral_dist == 1 {
            SeatClass::AisleSide
        } else if beyond_is_seat {
            SeatClass::Middle
        } else {
            SeatClass::Window
        };

        Ok(SeatInfo { anchor, class })
    }

    /// First non-Seat tile scanning from `seat` toward one side of its row.
    ///
    /// Returns `(anchor, distance)` if that tile is walkable and reachable
    /// from the entrance, `None` otherwise (blocked by Void, the grid edge,
    /// or an unreachable aisle segment).
    fn scan_side(&self, seat: Cell, side: Side) -> Option<(Cell, u16)> {
        let mut dist: u16 = 0;
        let mut col = seat.col;
        loop {
            match side {
                Side::Left => {
                    col = col.checked_sub(1)?;
                }
                Side::Right => {
                    col += 1;
                    if col >= self.width {
                        return None;
                    }
                }
            }
            dist += 1;
            let cell = Cell::new(seat.row, col);
            let tile = self.tile(cell);
            if tile.is_seat() {
                continue;
            }
            let reachable = tile.is_walkable() && self.dist[cell.flat(self.width)] != u32::MAX;
            return reachable.then_some((cell, dist));
        }
    }
}

#[derive(Copy, Clone)]
enum Side {
    Left,
    Right,
}

// ── Construction helpers ──────────────────────────────────────────────────────

/// Locate the unique Entrance tile.
fn find_entrance(width: u16, height: u16, tiles: &[Tile]) -> LoadResult<Cell> {
    let mut entry: Option<Cell> = None;
    for row in 0..height {
        for col in 0..width {
            let cell = Cell::new(row, col);
            if tiles[cell.flat(width)] == Tile::Entrance {
                match entry {
                    None => entry = Some(cell),
                    Some(first) => {
                        return Err(LoadError::MultipleEntrances { first, second: cell });
                    }
                }
            }
        }
    }
    entry.ok_or(LoadError::NoEntrance)
}

/// Breadth-first search over walkable tiles.
///
/// Returns `(parent, dist)` flat arrays.  Neighbour expansion order is fixed
/// (up, down, left, right) so routes are deterministic for a given layout.
fn bfs_from(
    entry:  Cell,
    width:  u16,
    height: u16,
    tiles:  &[Tile],
) -> (Vec<Option<Cell>>, Vec<u32>) {
    let n = width as usize * height as usize;
    let mut parent: Vec<Option<Cell>> = vec![None; n];
    let mut dist: Vec<u32> = vec![u32::MAX; n];

    let mut frontier = std::collections::VecDeque::new();
    dist[entry.flat(width)] = 0;
    frontier.push_back(entry);

    while let Some(cell) = frontier.pop_front() {
        let d = dist[cell.flat(width)];
        for next in cell.neighbours(width, height) {
            let idx = next.flat(width);
            if tiles[idx].is_walkable() && dist[idx] == u32::MAX {
                dist[idx] = d + 1;
                parent[idx] = Some(cell);
                frontier.push_back(next);
            }
        }
    }

    (parent, dist)
}
