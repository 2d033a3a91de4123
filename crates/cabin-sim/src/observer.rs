//! Batch progress callbacks.

use cabin_core::Tick;

use crate::BatchItemError;

/// Callbacks invoked by [`BatchRunner::run_batch`][crate::BatchRunner::run_batch]
/// as scenarios complete.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  With the `parallel` feature the
/// per-scenario hooks are called from Rayon worker threads, possibly out of
/// index order — implementations must be `Send + Sync` and take `&self`.
pub trait BatchObserver: Send + Sync {
    /// Called when scenario `index` finishes boarding in `ticks` ticks.
    fn on_scenario_end(&self, _index: usize, _ticks: Tick) {}

    /// Called when scenario `index` fails (load error, abort, runaway).
    fn on_scenario_error(&self, _error: &BatchItemError) {}

    /// Called once after every scenario has been resolved.
    fn on_batch_end(&self, _completed: usize, _failed: usize) {}
}

/// A [`BatchObserver`] that does nothing.  Use when you only want the
/// returned results.
pub struct NoopObserver;

impl BatchObserver for NoopObserver {}
