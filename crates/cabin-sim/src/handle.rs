//! The interactive simulation handle.
//!
//! `SimHandle` is the one-object surface a front-end drives: initialise it
//! once (from files or a generated scenario), then call [`step`] once per
//! displayed frame and redraw from [`occupancy_grid`].  The handle starts
//! empty; every operation before a successful `init_*` reports
//! [`SimError::NotInitialized`] rather than defaulting.
//!
//! [`step`]: SimHandle::step
//! [`occupancy_grid`]: SimHandle::occupancy_grid

use std::path::Path;
use std::sync::Arc;

use cabin_core::{SimRng, Tick};
use cabin_engine::BoardingState;
use cabin_layout::{load_layout, random_layout, LayoutParams};
use cabin_manifest::{load_manifest, random_manifest};
use cabin_strategy::BoardingStrategy;

use crate::{SimError, SimResult};

/// Handle for one interactive boarding run.
#[derive(Default)]
pub struct SimHandle {
    inner: Option<BoardingState>,
}

impl SimHandle {
    /// An uninitialised handle.
    pub fn new() -> SimHandle {
        SimHandle { inner: None }
    }

    // ── Initialisation ────────────────────────────────────────────────────

    /// Initialise from a layout file and a manifest file; boarding order is
    /// file order.
    pub fn init_from_file(&mut self, layout_path: &Path, manifest_path: &Path) -> SimResult<()> {
        self.reserve()?;
        let layout = Arc::new(load_layout(layout_path)?);
        let manifest = load_manifest(manifest_path, &layout)?;
        let queue = manifest.ids().collect();
        self.inner = Some(BoardingState::new(layout, manifest, queue));
        Ok(())
    }

    /// Initialise a generated `width × height` cabin with a full manifest
    /// ordered by `strategy`, seeded from OS entropy.
    ///
    /// Use [`init_random_seeded`](Self::init_random_seeded) when the run must
    /// replay deterministically.
    pub fn init_random(
        &mut self,
        width:    u16,
        height:   u16,
        strategy: BoardingStrategy,
    ) -> SimResult<()> {
        self.init_with_rng(width, height, strategy, SimRng::from_entropy())
    }

    /// Deterministic variant of [`init_random`](Self::init_random): the same
    /// `(width, height, strategy, seed)` always produces the same run.
    pub fn init_random_seeded(
        &mut self,
        width:    u16,
        height:   u16,
        strategy: BoardingStrategy,
        seed:     u64,
    ) -> SimResult<()> {
        self.init_with_rng(width, height, strategy, SimRng::new(seed))
    }

    // One thin wrapper per named strategy, mirroring the historical surface.

    pub fn init_random_back_front(&mut self, width: u16, height: u16) -> SimResult<()> {
        self.init_random(width, height, BoardingStrategy::back_to_front())
    }

    pub fn init_random_front_back(&mut self, width: u16, height: u16) -> SimResult<()> {
        self.init_random(width, height, BoardingStrategy::front_to_back())
    }

    pub fn init_random_aisle_first(&mut self, width: u16, height: u16) -> SimResult<()> {
        self.init_random(width, height, BoardingStrategy::AisleFirst)
    }

    pub fn init_random_window_first(&mut self, width: u16, height: u16) -> SimResult<()> {
        self.init_random(width, height, BoardingStrategy::WindowFirst)
    }

    fn init_with_rng(
        &mut self,
        width:    u16,
        height:   u16,
        strategy: BoardingStrategy,
        mut rng:  SimRng,
    ) -> SimResult<()> {
        self.reserve()?;
        let layout = Arc::new(random_layout(LayoutParams::new(width, height))?);
        let manifest = random_manifest(&layout);
        let queue = strategy.build_queue(&manifest, &layout, &mut rng);
        log::debug!("initialised {width}x{height} cabin, {} passengers, {strategy}", manifest.len());
        self.inner = Some(BoardingState::new(layout, manifest, queue));
        Ok(())
    }

    fn reserve(&mut self) -> SimResult<()> {
        if self.inner.is_some() {
            return Err(SimError::AlreadyInitialized);
        }
        Ok(())
    }

    // ── Run surface ───────────────────────────────────────────────────────

    /// Advance one tick.  Returns `true` once boarding is complete; further
    /// calls keep returning `true` and leave the grids unchanged.
    pub fn step(&mut self) -> SimResult<bool> {
        Ok(self.state_mut()?.step())
    }

    /// `(width, height)` of the loaded cabin.
    pub fn size(&self) -> SimResult<(u16, u16)> {
        Ok(self.state()?.layout().size())
    }

    /// Tile wire codes (0=void, 1=aisle, 2=seat, 3=entrance), row-major.
    pub fn layout_grid(&self) -> SimResult<Vec<Vec<u8>>> {
        Ok(self.state()?.layout_grid())
    }

    /// Occupancy codes (0=empty, 1=occupant, 2=contested overlay), row-major.
    pub fn occupancy_grid(&self) -> SimResult<Vec<Vec<u8>>> {
        Ok(self.state()?.occupancy_grid())
    }

    pub fn is_finished(&self) -> SimResult<bool> {
        Ok(self.state()?.is_finished())
    }

    /// Ticks executed so far.
    pub fn tick(&self) -> SimResult<Tick> {
        Ok(self.state()?.tick())
    }

    /// Read access to the underlying state (debug rendering, tests).
    pub fn state(&self) -> SimResult<&BoardingState> {
        self.inner.as_ref().ok_or(SimError::NotInitialized)
    }

    fn state_mut(&mut self) -> SimResult<&mut BoardingState> {
        self.inner.as_mut().ok_or(SimError::NotInitialized)
    }
}
