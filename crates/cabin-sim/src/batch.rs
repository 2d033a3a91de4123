//! The batch scenario runner.
//!
//! Each scenario is an independent `(layout file, manifest file)` pair built
//! into its own `BoardingState` and driven to completion; no state is shared
//! between scenarios, which is what makes the Rayon fan-out safe and the
//! results independent of worker scheduling.  A scenario that fails to load
//! is reported at its own index and never disturbs its siblings.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use cabin_engine::BoardingState;
use cabin_layout::load_layout;
use cabin_manifest::load_manifest;

use crate::{BatchErrorKind, BatchItemError, BatchObserver, SimError, SimResult};

/// Tick cap per scenario.  A valid pair on any loadable grid finishes orders
/// of magnitude below this; hitting it reports `BatchErrorKind::Runaway`.
pub const MAX_TICKS: u32 = 1_000_000;

// ── AbortHandle ───────────────────────────────────────────────────────────────

/// Clonable cancellation flag for a running batch.
///
/// `abort()` stops launching further scenarios and makes in-flight ones
/// resolve to [`BatchErrorKind::Aborted`] at their next tick boundary.
/// Already-completed results are unaffected; no partial tick counts are ever
/// returned.
#[derive(Clone, Default)]
pub struct AbortHandle(Arc<AtomicBool>);

impl AbortHandle {
    pub fn abort(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// ── BatchRunner ───────────────────────────────────────────────────────────────

/// Drives many independent scenarios to completion and collects tick counts.
#[derive(Default)]
pub struct BatchRunner {
    abort: AbortHandle,
}

impl BatchRunner {
    pub fn new() -> BatchRunner {
        BatchRunner::default()
    }

    /// The cancellation handle for batches run on this runner.
    pub fn abort_handle(&self) -> AbortHandle {
        self.abort.clone()
    }

    /// Run one scenario per `(layouts[i], manifests[i])` pair, boarding in
    /// file order, and return the completion tick counts index-aligned with
    /// the inputs.
    ///
    /// The outer `Err` is reserved for unusable input (length mismatch);
    /// everything per-scenario — including load failures — comes back inside
    /// the `Vec` so one bad pair cannot invalidate the rest.
    pub fn run_batch<P: AsRef<Path> + Sync>(
        &self,
        layouts:   &[P],
        manifests: &[P],
        observer:  &dyn BatchObserver,
    ) -> SimResult<Vec<Result<u32, BatchItemError>>> {
        if layouts.len() != manifests.len() {
            return Err(SimError::Config(format!(
                "{} layout files but {} manifest files",
                layouts.len(),
                manifests.len()
            )));
        }

        let results = self.run_all(layouts, manifests, observer);

        let failed = results.iter().filter(|r| r.is_err()).count();
        observer.on_batch_end(results.len() - failed, failed);
        Ok(results)
    }

    #[cfg(feature = "parallel")]
    fn run_all<P: AsRef<Path> + Sync>(
        &self,
        layouts:   &[P],
        manifests: &[P],
        observer:  &dyn BatchObserver,
    ) -> Vec<Result<u32, BatchItemError>> {
        use rayon::prelude::*;

        layouts
            .par_iter()
            .zip(manifests.par_iter())
            .enumerate()
            .map(|(index, (layout, manifest))| {
                self.run_scenario(index, layout.as_ref(), manifest.as_ref(), observer)
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn run_all<P: AsRef<Path> + Sync>(
        &self,
        layouts:   &[P],
        manifests: &[P],
        observer:  &dyn BatchObserver,
    ) -> Vec<Result<u32, BatchItemError>> {
        layouts
            .iter()
            .zip(manifests.iter())
            .enumerate()
            .map(|(index, (layout, manifest))| {
                self.run_scenario(index, layout.as_ref(), manifest.as_ref(), observer)
            })
            .collect()
    }

    fn run_scenario(
        &self,
        index:         usize,
        layout_path:   &Path,
        manifest_path: &Path,
        observer:      &dyn BatchObserver,
    ) -> Result<u32, BatchItemError> {
        let result = self.drive_scenario(layout_path, manifest_path);
        match &result {
            Ok(ticks) => observer.on_scenario_end(index, cabin_core::Tick(*ticks)),
            Err(kind) => {
                log::warn!("scenario {index} ({}) failed: {kind}", layout_path.display());
            }
        }
        result.map_err(|kind| {
            let error = BatchItemError { index, kind };
            observer.on_scenario_error(&error);
            error
        })
    }

    fn drive_scenario(
        &self,
        layout_path:   &Path,
        manifest_path: &Path,
    ) -> Result<u32, BatchErrorKind> {
        if self.abort.is_aborted() {
            return Err(BatchErrorKind::Aborted);
        }

        let layout = Arc::new(load_layout(layout_path).map_err(BatchErrorKind::Load)?);
        let manifest =
            load_manifest(manifest_path, &layout).map_err(BatchErrorKind::Load)?;
        let queue = manifest.ids().collect();
        let mut state = BoardingState::new(layout, manifest, queue);

        while !state.step() {
            if state.tick().0 >= MAX_TICKS {
                return Err(BatchErrorKind::Runaway);
            }
            if self.abort.is_aborted() {
                return Err(BatchErrorKind::Aborted);
            }
        }
        Ok(state.tick().0)
    }
}
