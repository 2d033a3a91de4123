//! `cabin-layout` — static cabin topology.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`grid`]      | `Layout`, `SeatClass` — validated tile grid + derived seat data |
//! | [`loader`]    | `load_layout` / `load_layout_reader` — CSV of tile codes |
//! | [`generator`] | `LayoutParams`, `random_layout` — parametric cabins    |
//!
//! A `Layout` is immutable for a simulation's lifetime.  All validation is
//! front-loaded into construction: once a `Layout` exists, every seat has a
//! serving aisle anchor and a walkable route from the single entrance, so the
//! step engine never has to handle "no path" at runtime.

pub mod generator;
pub mod grid;
pub mod loader;

#[cfg(test)]
mod tests;

pub use generator::{random_layout, LayoutParams};
pub use grid::{Layout, SeatClass};
pub use loader::{load_layout, load_layout_reader};
