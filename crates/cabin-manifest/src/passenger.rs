//! Passenger state and the ordered manifest.

use cabin_core::{Cell, PassengerId};

// ── PassengerState ────────────────────────────────────────────────────────────

/// Lifecycle of one passenger.
///
/// `Queued → InTransit → Seated`; `Seated` is terminal.  The transitions are
/// driven exclusively by the step engine — a passenger is `Queued` until it
/// is released onto the entrance cell and `Seated` forever once its position
/// equals its assigned seat.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum PassengerState {
    #[default]
    Queued,
    InTransit,
    Seated,
}

// ── Passenger ─────────────────────────────────────────────────────────────────

/// One passenger: identity, seat binding, and live position.
#[derive(Clone, Debug)]
pub struct Passenger {
    /// Identifier from the manifest file (or synthesised for generated runs).
    pub label: String,

    /// The assigned seat.  Immutable for the run.
    pub seat: Cell,

    pub state: PassengerState,

    /// Current grid cell; `None` until released from the boarding queue.
    pub pos: Option<Cell>,
}

impl Passenger {
    /// A queued, unplaced passenger bound to `seat`.
    pub fn new(label: impl Into<String>, seat: Cell) -> Passenger {
        Passenger {
            label: label.into(),
            seat,
            state: PassengerState::default(),
            pos: None,
        }
    }

    #[inline]
    pub fn is_seated(&self) -> bool {
        self.state == PassengerState::Seated
    }

    #[inline]
    pub fn in_transit(&self) -> bool {
        self.state == PassengerState::InTransit
    }
}

// ── Manifest ──────────────────────────────────────────────────────────────────

/// Ordered passenger list for one run.
///
/// Order is file order (or generation order); boarding strategies reorder by
/// producing a queue of `PassengerId`s, never by permuting this storage —
/// ids stay stable for the whole run.
#[derive(Debug, Default)]
pub struct Manifest {
    passengers: Vec<Passenger>,
}

impl Manifest {
    pub(crate) fn from_passengers(passengers: Vec<Passenger>) -> Manifest {
        Manifest { passengers }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    #[inline]
    pub fn get(&self, id: PassengerId) -> &Passenger {
        &self.passengers[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: PassengerId) -> &mut Passenger {
        &mut self.passengers[id.index()]
    }

    /// All ids in manifest (file) order.
    pub fn ids(&self) -> impl Iterator<Item = PassengerId> + '_ {
        (0..self.passengers.len() as u32).map(PassengerId)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.iter()
    }

    /// `true` once every passenger is `Seated`.
    pub fn all_seated(&self) -> bool {
        self.passengers.iter().all(Passenger::is_seated)
    }
}
