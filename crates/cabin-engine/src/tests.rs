//! Unit tests for cabin-engine.
//!
//! The small scenarios here are worked out by hand tick-by-tick; the
//! assertions pin the engine to those timelines, not just to "eventually
//! finishes".

use std::io::Cursor;
use std::sync::Arc;

use cabin_core::{Cell, PassengerId, Tick};
use cabin_layout::{load_layout_reader, random_layout, LayoutParams};
use cabin_manifest::{load_manifest_reader, random_manifest, PassengerState};

use crate::BoardingState;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a run boarding in manifest (file) order.
fn state_from(layout_csv: &str, manifest_csv: &str) -> BoardingState {
    let layout = Arc::new(load_layout_reader(Cursor::new(layout_csv)).expect("layout fixture"));
    let manifest =
        load_manifest_reader(Cursor::new(manifest_csv), &layout).expect("manifest fixture");
    let queue = manifest.ids().collect();
    BoardingState::new(layout, manifest, queue)
}

/// 5 × 3 single-aisle fixture: seats left/right of the aisle column 2.
const SMALL_LAYOUT: &str = "2,2,3,2,2\n2,2,1,2,2\n2,2,1,2,2\n";

fn occupancy_at(state: &BoardingState, row: u16, col: u16) -> u8 {
    state.occupancy_grid()[row as usize][col as usize]
}

// ── The two-seat timeline from the original interface contract ────────────────

#[cfg(test)]
mod two_seat_row {
    use super::*;

    /// One row, two seats, door on the right:  `# # door`
    const LAYOUT: &str = "2,2,3\n";
    /// First passenger sits next to the door, second must squeeze past.
    const MANIFEST: &str = "passenger,row,col\nfirst,0,1\nsecond,0,0\n";

    #[test]
    fn first_passenger_is_seated_at_tick_two() {
        let mut state = state_from(LAYOUT, MANIFEST);

        assert!(!state.step()); // T1: first released onto the door cell
        assert_eq!(state.tick(), Tick(1));
        assert_eq!(state.manifest().get(PassengerId(0)).state, PassengerState::InTransit);

        assert!(!state.step()); // T2: first sits
        assert_eq!(state.manifest().get(PassengerId(0)).state, PassengerState::Seated);
        assert_eq!(state.manifest().get(PassengerId(0)).pos, Some(Cell::new(0, 1)));
    }

    #[test]
    fn second_passenger_pays_the_letting_through_stall() {
        let mut state = state_from(LAYOUT, MANIFEST);
        state.step(); // T1 release first
        state.step(); // T2 first seated
        state.step(); // T3 release second
        assert_eq!(state.manifest().get(PassengerId(1)).pos, Some(Cell::new(0, 2)));

        // T4: second stalls at the door; the seat it must pass is contested.
        assert!(!state.step());
        assert_eq!(state.manifest().get(PassengerId(1)).pos, Some(Cell::new(0, 2)));
        assert_eq!(occupancy_at(&state, 0, 1), 2);

        // T5: squeeze complete — everyone seated, run finished within 5 ticks.
        assert!(state.step());
        assert_eq!(state.tick(), Tick(5));
        assert!(state.manifest().all_seated());
        assert_eq!(occupancy_at(&state, 0, 0), 1);
        assert_eq!(occupancy_at(&state, 0, 1), 1);
    }

    #[test]
    fn finished_is_sticky_and_grids_freeze() {
        let mut state = state_from(LAYOUT, MANIFEST);
        while !state.step() {}
        let tick = state.tick();
        let layout_grid = state.layout_grid();
        let occupancy = state.occupancy_grid();

        for _ in 0..3 {
            assert!(state.step());
        }
        assert_eq!(state.tick(), tick, "finished must not advance the clock");
        assert_eq!(state.layout_grid(), layout_grid);
        assert_eq!(state.occupancy_grid(), occupancy);
    }
}

// ── Aisle walking and row entry on the 5×3 fixture ────────────────────────────

#[cfg(test)]
mod small_cabin {
    use super::*;

    #[test]
    fn opposite_window_seats_finish_at_tick_six() {
        // Both passengers walk the full aisle; no interference between the
        // left and right sections of a row.
        let manifest = "passenger,row,col\nleft,2,0\nright,2,4\n";
        let mut state = state_from(SMALL_LAYOUT, manifest);

        let mut ticks = 0;
        while !state.step() {
            ticks += 1;
            assert!(ticks < 50, "run must terminate");
        }
        assert_eq!(state.tick(), Tick(6));
        assert!(state.manifest().all_seated());
    }

    #[test]
    fn seated_neighbour_costs_exactly_one_stall_tick() {
        // Aisle-side passenger boards first, window passenger second.
        let manifest = "passenger,row,col\naisleguy,2,1\nwindow,2,0\n";
        let mut state = state_from(SMALL_LAYOUT, manifest);

        for _ in 0..5 {
            state.step(); // T5: window passenger has walked to its anchor (2,2)
        }
        assert_eq!(state.manifest().get(PassengerId(1)).pos, Some(Cell::new(2, 2)));

        // T6: stall; the occupied middle seat shows the contested overlay.
        assert!(!state.step());
        assert_eq!(occupancy_at(&state, 2, 1), 2);
        assert_eq!(state.manifest().get(PassengerId(1)).pos, Some(Cell::new(2, 2)));

        // T7: seated; overlay clears.
        assert!(state.step());
        assert_eq!(state.tick(), Tick(7));
        assert_eq!(occupancy_at(&state, 2, 1), 1);
        assert_eq!(occupancy_at(&state, 2, 0), 1);
    }

    #[test]
    fn aisle_convoy_never_overlaps() {
        // Three passengers down the same aisle, rear row first.
        let manifest = "passenger,row,col\na,2,1\nb,1,1\nc,2,3\n";
        let mut state = state_from(SMALL_LAYOUT, manifest);

        loop {
            let finished = state.step();
            let mut cells: Vec<Cell> = state
                .manifest()
                .iter()
                .filter(|p| p.in_transit())
                .filter_map(|p| p.pos)
                .collect();
            cells.sort_unstable();
            let len = cells.len();
            cells.dedup();
            assert_eq!(cells.len(), len, "two in-transit passengers share a cell");
            if finished {
                break;
            }
            assert!(state.tick() < Tick(100));
        }
    }

    #[test]
    fn at_most_one_release_per_tick() {
        let layout = Arc::new(load_layout_reader(Cursor::new(SMALL_LAYOUT)).unwrap());
        let manifest = random_manifest(&layout);
        let queue: Vec<PassengerId> = manifest.ids().collect();
        let mut state = BoardingState::new(layout, manifest, queue);

        let mut queued = state.queued_count();
        while !state.step() {
            let now = state.queued_count();
            assert!(queued - now <= 1, "more than one release in a tick");
            queued = now;
            assert!(state.tick() < Tick(1_000));
        }
        assert_eq!(state.queued_count(), 0);
    }
}

// ── Full-cabin termination ────────────────────────────────────────────────────

#[cfg(test)]
mod termination {
    use super::*;

    #[test]
    fn standard_cabin_boards_completely_in_file_order() {
        let layout = Arc::new(random_layout(LayoutParams::default()).unwrap());
        let manifest = random_manifest(&layout);
        let queue: Vec<PassengerId> = manifest.ids().collect();
        let mut state = BoardingState::new(layout, manifest, queue);

        let final_tick = state.run_to_completion(10_000).expect("must terminate");
        assert!(state.is_finished());
        assert!(state.manifest().all_seated());
        // 60 passengers, single door: gated by one release per tick plus
        // aisle walking and stalls — comfortably under 8 ticks a head.
        assert!(final_tick < Tick(500), "took {final_tick}");
    }

    #[test]
    fn two_aisle_cabin_boards_completely() {
        let layout = Arc::new(random_layout(LayoutParams::new(9, 8)).unwrap());
        let manifest = random_manifest(&layout);
        let queue: Vec<PassengerId> = manifest.ids().collect();
        let mut state = BoardingState::new(layout, manifest, queue);

        assert!(state.run_to_completion(10_000).is_some());
        assert!(state.manifest().all_seated());
    }

    #[test]
    fn empty_manifest_finishes_on_the_first_step() {
        let layout = Arc::new(load_layout_reader(Cursor::new(SMALL_LAYOUT)).unwrap());
        let manifest = load_manifest_reader(Cursor::new("passenger,row,col\n"), &layout).unwrap();
        let mut state = BoardingState::new(layout, manifest, vec![]);

        assert!(!state.is_finished());
        assert!(state.step());
        assert_eq!(state.tick(), Tick(1));
        assert!(state.is_finished());
    }

    #[test]
    fn runaway_cap_reports_none_without_finishing() {
        let mut state = state_from(SMALL_LAYOUT, "passenger,row,col\na,2,0\nb,2,4\n");
        assert_eq!(state.run_to_completion(2), None);
        assert!(!state.is_finished());
        // And the same state can still be driven to completion afterwards.
        assert!(state.run_to_completion(1_000).is_some());
    }
}

// ── Wire grids ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grids {
    use super::*;

    #[test]
    fn layout_grid_is_invariant_under_step() {
        let mut state = state_from(SMALL_LAYOUT, "passenger,row,col\na,1,0\nb,2,4\n");
        let before = state.layout_grid();
        assert_eq!(before[0][2], 3, "door code");
        assert_eq!(before[1][2], 1, "aisle code");
        assert_eq!(before[1][0], 2, "seat code");

        while !state.step() {}
        assert_eq!(state.layout_grid(), before);
    }

    #[test]
    fn occupancy_counts_one_per_body() {
        let mut state = state_from(SMALL_LAYOUT, "passenger,row,col\na,1,0\nb,2,4\n");
        while !state.step() {}

        let grid = state.occupancy_grid();
        let total: u32 = grid.iter().flatten().map(|&c| c as u32).sum();
        assert_eq!(total, 2, "two seated passengers, no overlays after finish");
        assert_eq!(grid[1][0], 1);
        assert_eq!(grid[2][4], 1);
    }

    #[test]
    fn ascii_frame_shows_occupants() {
        let mut state = state_from(SMALL_LAYOUT, "passenger,row,col\na,1,0\n");
        state.step();
        let frame = state.ascii_frame();
        let rows: Vec<&str> = frame.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].chars().nth(2), Some('@'), "released passenger on the door");
        assert_eq!(rows[1].chars().nth(2), Some('*'), "empty aisle");
        assert_eq!(rows[1].chars().nth(0), Some('#'), "empty seat");
    }
}
