//! Unit tests for cabin-layout.

use std::io::Cursor;

use cabin_core::{Cell, LoadError, Tile};

use crate::{load_layout_reader, random_layout, LayoutParams, SeatClass};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 5-wide, 3-high single-aisle cabin as CSV text:
///
/// ```text
/// seat seat door  seat seat
/// seat seat aisle seat seat
/// seat seat aisle seat seat
/// ```
const SMALL_CSV: &str = "2,2,3,2,2\n2,2,1,2,2\n2,2,1,2,2\n";

fn small_layout() -> crate::Layout {
    load_layout_reader(Cursor::new(SMALL_CSV)).expect("fixture layout must load")
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use super::*;

    #[test]
    fn default_params_are_narrow_body() {
        let layout = random_layout(LayoutParams::default()).unwrap();
        assert_eq!(layout.size(), (7, 10));
        assert_eq!(layout.entry(), Cell::new(0, 3));
        // 7 columns minus the aisle column, times 10 rows.
        assert_eq!(layout.seat_count(), 60);
    }

    #[test]
    fn single_aisle_column_is_walkable_to_the_rear() {
        let layout = random_layout(LayoutParams::new(5, 8)).unwrap();
        for row in 1..8 {
            assert_eq!(layout.tile(Cell::new(row, 2)), Tile::Aisle);
        }
        assert_eq!(layout.tile(Cell::new(0, 2)), Tile::Entrance);
    }

    #[test]
    fn wide_body_gets_two_aisles_and_a_cross_aisle() {
        let layout = random_layout(LayoutParams::new(9, 6)).unwrap();
        // Row 0 is all walkable (cross-aisle plus the door).
        for col in 0..9 {
            assert!(layout.is_walkable(Cell::new(0, col)), "row 0 col {col}");
        }
        // Both aisle columns run the full length.
        for row in 1..6 {
            assert_eq!(layout.tile(Cell::new(row, 3)), Tile::Aisle);
            assert_eq!(layout.tile(Cell::new(row, 5)), Tile::Aisle);
        }
        // Every seat validated reachable by construction.
        assert_eq!(layout.seat_count(), 9 * 5 - 2 * 5);
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        assert!(matches!(
            random_layout(LayoutParams::new(2, 10)),
            Err(LoadError::SizeMismatch { .. })
        ));
        assert!(matches!(
            random_layout(LayoutParams::new(7, 1)),
            Err(LoadError::SizeMismatch { .. })
        ));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn round_trips_wire_codes() {
        let layout = small_layout();
        assert_eq!(layout.size(), (5, 3));
        assert_eq!(
            layout.grid_codes(),
            vec![
                vec![2, 2, 3, 2, 2],
                vec![2, 2, 1, 2, 2],
                vec![2, 2, 1, 2, 2],
            ]
        );
    }

    #[test]
    fn ragged_rows_are_line_addressed() {
        let err = load_layout_reader(Cursor::new("2,2,3,2,2\n2,2,1\n")).unwrap_err();
        match err {
            LoadError::Format { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Format, got {other:?}"),
        }
    }

    #[test]
    fn bad_tile_codes_are_rejected() {
        let err = load_layout_reader(Cursor::new("2,9,3\n")).unwrap_err();
        assert!(matches!(err, LoadError::Format { line: 1, .. }));

        let err = load_layout_reader(Cursor::new("2,x,3\n")).unwrap_err();
        assert!(matches!(err, LoadError::Format { line: 1, .. }));
    }

    #[test]
    fn empty_file_is_rejected() {
        assert!(matches!(
            load_layout_reader(Cursor::new("")),
            Err(LoadError::Format { .. })
        ));
    }

    #[test]
    fn entrance_cardinality_is_enforced() {
        // No entrance at all.
        assert!(matches!(
            load_layout_reader(Cursor::new("2,1,2\n2,1,2\n")),
            Err(LoadError::NoEntrance)
        ));
        // Two doors.
        assert!(matches!(
            load_layout_reader(Cursor::new("2,3,2\n2,3,2\n")),
            Err(LoadError::MultipleEntrances { .. })
        ));
    }

    #[test]
    fn walled_off_seat_is_rejected() {
        // Bottom row seats are fenced behind Void cells.
        let err = load_layout_reader(Cursor::new("2,3,2\n0,1,0\n2,0,2\n")).unwrap_err();
        assert!(matches!(err, LoadError::UnreachableSeat { .. }));
    }
}

// ── Derived seat data ─────────────────────────────────────────────────────────

#[cfg(test)]
mod seat_data {
    use super::*;

    #[test]
    fn anchors_point_at_the_serving_aisle() {
        let layout = small_layout();
        assert_eq!(layout.anchor_of(Cell::new(1, 0)), Cell::new(1, 2));
        assert_eq!(layout.anchor_of(Cell::new(1, 4)), Cell::new(1, 2));
        // Row 0 seats are served from the entrance cell itself.
        assert_eq!(layout.anchor_of(Cell::new(0, 1)), Cell::new(0, 2));
    }

    #[test]
    fn intermediates_are_nearest_first() {
        let layout = small_layout();
        assert_eq!(
            layout.intermediates(Cell::new(1, 0)),
            vec![Cell::new(1, 1)]
        );
        assert_eq!(layout.intermediates(Cell::new(1, 1)), vec![]);
        assert_eq!(
            layout.intermediates(Cell::new(2, 4)),
            vec![Cell::new(2, 3)]
        );
    }

    #[test]
    fn classes_follow_distance_from_the_aisle() {
        let layout = random_layout(LayoutParams::default()).unwrap();
        // Aisle at col 3: cols 2/4 aisle-side, 1/5 middle, 0/6 window.
        assert_eq!(layout.seat_class(Cell::new(4, 2)), SeatClass::AisleSide);
        assert_eq!(layout.seat_class(Cell::new(4, 4)), SeatClass::AisleSide);
        assert_eq!(layout.seat_class(Cell::new(4, 1)), SeatClass::Middle);
        assert_eq!(layout.seat_class(Cell::new(4, 5)), SeatClass::Middle);
        assert_eq!(layout.seat_class(Cell::new(4, 0)), SeatClass::Window);
        assert_eq!(layout.seat_class(Cell::new(4, 6)), SeatClass::Window);
    }

    #[test]
    fn routes_start_at_the_entrance_and_end_at_the_anchor() {
        let layout = small_layout();
        let route = layout.route_to(Cell::new(2, 0));
        assert_eq!(route.first(), Some(&Cell::new(0, 2)));
        assert_eq!(route.last(), Some(&Cell::new(2, 2)));
        assert_eq!(route.len(), 3); // straight down the aisle
        // Consecutive route cells are orthogonal neighbours.
        for pair in route.windows(2) {
            let d = pair[0].row.abs_diff(pair[1].row) + pair[0].col.abs_diff(pair[1].col);
            assert_eq!(d, 1);
        }
    }

    #[test]
    fn middle_section_between_two_aisles_is_served_by_the_nearer_side() {
        let layout = random_layout(LayoutParams::new(9, 4)).unwrap();
        // Aisles at cols 3 and 5; the lone centre column 4 ties and resolves left.
        assert_eq!(layout.anchor_of(Cell::new(2, 4)), Cell::new(2, 3));
        assert_eq!(layout.seat_class(Cell::new(2, 4)), SeatClass::AisleSide);
        // Outboard seats of the right section are served by the right aisle.
        assert_eq!(layout.anchor_of(Cell::new(2, 6)), Cell::new(2, 5));
    }
}
