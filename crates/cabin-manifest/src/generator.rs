//! Manifest generation for random runs.

use cabin_layout::Layout;

use crate::{Manifest, Passenger};

/// One passenger per Seat tile, in row-major seat order.
///
/// Labels are `passenger0..passengerN-1`; the boarding *order* comes from the
/// strategy layer, so the generator itself needs no randomness.
pub fn random_manifest(layout: &Layout) -> Manifest {
    let passengers = layout
        .seats()
        .iter()
        .enumerate()
        .map(|(i, &seat)| Passenger::new(format!("passenger{i}"), seat))
        .collect();
    Manifest::from_passengers(passengers)
}
