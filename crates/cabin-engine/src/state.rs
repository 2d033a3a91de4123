//! Per-run simulation state.

use std::collections::VecDeque;
use std::sync::Arc;

use cabin_core::{Cell, PassengerId, Tick};
use cabin_layout::Layout;
use cabin_manifest::Manifest;

// ── Per-passenger transit bookkeeping ─────────────────────────────────────────

/// Movement bookkeeping for one passenger, parallel to the manifest storage.
///
/// Kept out of `Passenger` so the manifest stays a plain data record; the
/// engine owns everything that is derived from the layout.
#[derive(Clone, Debug)]
pub(crate) struct TransitState {
    /// Walkable path entrance → row anchor, both inclusive.
    pub route: Vec<Cell>,

    /// Index of the passenger's current cell within `route` while in the
    /// aisle phase.  `route.len() - 1` means "standing at the anchor".
    pub route_idx: usize,

    /// Letting-through stall ticks already served at the anchor.
    pub stalled: u16,
}

// ── BoardingState ─────────────────────────────────────────────────────────────

/// All mutable state of one boarding run.
///
/// Owns the manifest exclusively; shares the immutable [`Layout`] through an
/// `Arc` so batch scenarios over the same cabin don't duplicate it.  Runs
/// never share a `BoardingState` — there is no interior synchronisation and
/// none is needed.
pub struct BoardingState {
    pub(crate) layout:   Arc<Layout>,
    pub(crate) manifest: Manifest,

    /// Not-yet-released passengers, front = next to board.
    pub(crate) queue: VecDeque<PassengerId>,

    /// In-transit passengers, earliest release first.  This is the
    /// evaluation order of the advance phase and therefore the tie-break for
    /// contested cells.
    pub(crate) release_order: Vec<PassengerId>,

    /// One slot per grid cell (row-major): which passenger stands/sits there.
    pub(crate) occupancy: Vec<Option<PassengerId>>,

    /// Cells involved in a letting-through pass *this tick*; drives the
    /// occupancy overlay code 2.  Rebuilt every tick.
    pub(crate) contested: Vec<bool>,

    pub(crate) transit: Vec<TransitState>,

    pub(crate) clock: Tick,
    pub(crate) finished: bool,
}

impl BoardingState {
    /// Build a run from a validated layout/manifest pair and a boarding
    /// queue (a permutation of the manifest's passenger ids).
    pub fn new(layout: Arc<Layout>, manifest: Manifest, queue: Vec<PassengerId>) -> BoardingState {
        debug_assert_eq!(queue.len(), manifest.len(), "queue must cover the manifest");

        let transit = manifest
            .iter()
            .map(|p| TransitState {
                route:     layout.route_to(p.seat),
                route_idx: 0,
                stalled:   0,
            })
            .collect();

        let cells = layout.cell_count();
        BoardingState {
            layout,
            manifest,
            queue: queue.into(),
            release_order: Vec::new(),
            occupancy: vec![None; cells],
            contested: vec![false; cells],
            transit,
            clock: Tick::ZERO,
            finished: false,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Ticks executed so far.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.clock
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Passengers still waiting to be released.
    #[inline]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Passengers currently walking or shuffling into their row.
    #[inline]
    pub fn in_transit_count(&self) -> usize {
        self.release_order.len()
    }

    /// Occupant of `cell`, if any.
    #[inline]
    pub fn occupant(&self, cell: Cell) -> Option<PassengerId> {
        self.occupancy[cell.flat(self.layout.width())]
    }

    // ── Wire surface ──────────────────────────────────────────────────────

    /// Tile wire codes, row-major.  Invariant under `step` — the layout
    /// never changes after load.
    pub fn layout_grid(&self) -> Vec<Vec<u8>> {
        self.layout.grid_codes()
    }

    /// Per-cell occupancy codes: 0 = empty, 1 = one occupant (seated or in
    /// transit), 2 = contested overlay (a seated passenger being squeezed
    /// past this tick).
    pub fn occupancy_grid(&self) -> Vec<Vec<u8>> {
        let (width, height) = self.layout.size();
        (0..height)
            .map(|row| {
                (0..width)
                    .map(|col| {
                        let idx = Cell::new(row, col).flat(width);
                        let mut code = u8::from(self.occupancy[idx].is_some());
                        if self.contested[idx] {
                            code += 1;
                        }
                        code
                    })
                    .collect()
            })
            .collect()
    }
}
