//! `cabin-manifest` — the passengers of one simulation run.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`passenger`] | `Passenger`, `PassengerState` lifecycle               |
//! | [`loader`]    | `load_manifest` / `load_manifest_reader` (CSV)        |
//! | [`generator`] | `random_manifest` — one passenger per seat            |
//!
//! A `Manifest` is always bound to a specific `Layout` at load time; every
//! invariant the step engine relies on (seat exists, seat is a Seat tile, no
//! seat claimed twice, passengers ≤ seats) is enforced here, once.

pub mod generator;
pub mod loader;
pub mod passenger;


pub use generator::random_manifest;
pub use loader::{load_manifest, load_manifest_reader};
pub use passenger::{Manifest, Passenger, PassengerState};
