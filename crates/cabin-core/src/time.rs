//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick advances all
//! in-transit passengers by at most one cell; there is no wall-clock mapping
//! because a boarding tick has no fixed real-time duration (the front-end
//! picks its own frame delay).

use std::fmt;

/// An absolute simulation tick counter.
///
/// `u32` is ample: a boarding run on any realistic cabin completes in well
/// under a thousand ticks, and the batch runner treats a run that exceeds the
/// u32 range as defective long before wrap-around.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u32);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u32> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u32) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Tick) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
