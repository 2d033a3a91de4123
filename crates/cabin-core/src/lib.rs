//! `cabin-core` — foundational types for the cabin boarding simulator.
//!
//! This crate is a dependency of every other `cabin-*` crate.  It
//! intentionally has no `cabin-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `PassengerId`                                     |
//! | [`cell`]   | `Cell` — one grid coordinate                      |
//! | [`tile`]   | `Tile` and its wire codes                         |
//! | [`time`]   | `Tick`                                            |
//! | [`rng`]    | `SimRng` — seeded, scenario-scoped randomness     |
//! | [`error`]  | `LoadError`, `LoadResult`                         |

pub mod cell;
pub mod error;
pub mod ids;
pub mod rng;
pub mod tile;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use error::{LoadError, LoadResult};
pub use ids::PassengerId;
pub use rng::SimRng;
pub use tile::Tile;
pub use time::Tick;
