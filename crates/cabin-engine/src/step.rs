//! The tick transformation.

use cabin_core::{PassengerId, Tick};
use cabin_manifest::PassengerState;

use crate::BoardingState;

impl BoardingState {
    /// Advance the run by one tick.  Returns `true` iff the run is finished.
    ///
    /// Finished is sticky: further calls return `true` immediately and leave
    /// every grid unchanged.
    pub fn step(&mut self) -> bool {
        if self.finished {
            return true;
        }

        self.contested.fill(false);

        // ── Release: at most one passenger through the door per tick ──────
        //
        // A passenger released this tick stays on the entrance cell until the
        // next tick; only previously released passengers advance below.
        let entry_idx = self.layout.entry().flat(self.layout.width());
        let mut released_now: Option<PassengerId> = None;
        if self.occupancy[entry_idx].is_none() {
            if let Some(id) = self.queue.pop_front() {
                let entry = self.layout.entry();
                let passenger = self.manifest.get_mut(id);
                passenger.state = PassengerState::InTransit;
                passenger.pos = Some(entry);
                self.occupancy[entry_idx] = Some(id);
                self.release_order.push(id);
                released_now = Some(id);
                log::trace!("{}: released {id} toward {}", self.clock, passenger.seat);
            }
        }

        // ── Advance: strict release order, first-come-first-served ────────
        for i in 0..self.release_order.len() {
            let id = self.release_order[i];
            if released_now == Some(id) {
                continue;
            }
            self.advance(id);
        }

        // ── Retire seated passengers from the evaluation order ────────────
        let manifest = &self.manifest;
        self.release_order.retain(|&id| manifest.get(id).in_transit());

        self.clock = self.clock + 1;
        self.finished = self.queue.is_empty() && self.release_order.is_empty();
        if self.finished {
            log::debug!("boarding complete after {}", self.clock);
        }
        self.finished
    }

    /// Drive the run to completion, up to `max_ticks`.
    ///
    /// Returns the final tick count, or `None` if the cap was hit — which
    /// cannot happen for a validly loaded state and is treated by callers as
    /// a defect, not an expected outcome.
    pub fn run_to_completion(&mut self, max_ticks: u32) -> Option<Tick> {
        while !self.finished {
            if self.clock.0 >= max_ticks {
                return None;
            }
            self.step();
        }
        Some(self.clock)
    }

    // ── Per-passenger advancement ─────────────────────────────────────────

    fn advance(&mut self, id: PassengerId) {
        let width = self.layout.width();
        let transit = &self.transit[id.index()];

        // Aisle phase: walk the precomputed route one cell per tick.
        if transit.route_idx + 1 < transit.route.len() {
            let here = transit.route[transit.route_idx];
            let next = transit.route[transit.route_idx + 1];
            if self.occupancy[next.flat(width)].is_none() {
                self.occupancy[here.flat(width)] = None;
                self.occupancy[next.flat(width)] = Some(id);
                self.transit[id.index()].route_idx += 1;
                self.manifest.get_mut(id).pos = Some(next);
            }
            // Cell taken: wait here, retry next tick.  FIFO release order
            // guarantees the occupant ahead eventually moves on.
            return;
        }

        // Row phase: standing at the anchor, entering the seat directly.
        let seat = self.manifest.get(id).seat;
        let intermediates = self.layout.intermediates(seat);

        let mut seated_blockers: u16 = 0;
        for cell in &intermediates {
            match self.occupancy[cell.flat(width)] {
                // Another passenger mid-shuffle in this row must resolve
                // first; both of us hold position this tick.
                Some(other) if self.manifest.get(other).in_transit() => return,
                Some(_) => seated_blockers += 1,
                None => {}
            }
        }

        // Letting-through: one stall tick per seated passenger we squeeze
        // past.  The blocked seats carry the contested overlay while we wait.
        if self.transit[id.index()].stalled < seated_blockers {
            self.transit[id.index()].stalled += 1;
            for cell in &intermediates {
                let idx = cell.flat(width);
                if self.occupancy[idx].is_some() {
                    self.contested[idx] = true;
                }
            }
            return;
        }

        let seat_idx = seat.flat(width);
        if self.occupancy[seat_idx].is_some() {
            // Unique seat assignment makes this unreachable; hold position.
            return;
        }

        let anchor = transit.route[transit.route_idx];
        self.occupancy[anchor.flat(width)] = None;
        self.occupancy[seat_idx] = Some(id);
        let passenger = self.manifest.get_mut(id);
        passenger.pos = Some(seat);
        passenger.state = PassengerState::Seated;
        log::trace!("{}: {id} seated at {seat}", self.clock);
    }
}
