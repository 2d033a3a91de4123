//! `cabin-strategy` — boarding-order policies.
//!
//! A strategy is a pure function `(Manifest, Layout, SimRng) → queue`: it
//! never mutates the manifest, it only decides the order in which passenger
//! ids are released from the boarding queue.  Determinism-given-seed is the
//! whole point — batch comparisons between strategies replay exactly.

pub mod strategy;


pub use strategy::BoardingStrategy;
