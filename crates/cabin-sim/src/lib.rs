//! `cabin-sim` — the surface a front-end talks to.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`handle`]   | `SimHandle` — init / grid / step surface for one run    |
//! | [`batch`]    | `BatchRunner`, `AbortHandle` — many runs to completion  |
//! | [`observer`] | `BatchObserver` progress callbacks                      |
//! | [`error`]    | `SimError`, `BatchItemError`                            |
//!
//! # Quick-start
//!
//! ```rust
//! use cabin_sim::SimHandle;
//! use cabin_strategy::BoardingStrategy;
//!
//! let mut sim = SimHandle::new();
//! sim.init_random_seeded(7, 10, BoardingStrategy::WindowFirst, 42).unwrap();
//! let mut ticks = 0u32;
//! while !sim.step().unwrap() {
//!     ticks += 1;
//! }
//! assert!(ticks > 0);
//! ```

pub mod batch;
pub mod error;
pub mod handle;
pub mod observer;


pub use batch::{AbortHandle, BatchRunner};
pub use error::{BatchErrorKind, BatchItemError, SimError, SimResult};
pub use handle::SimHandle;
pub use observer::{BatchObserver, NoopObserver};
