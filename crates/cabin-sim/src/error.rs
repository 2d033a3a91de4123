//! Handle- and batch-level errors.

use thiserror::Error;

use cabin_core::LoadError;

/// Errors from the [`SimHandle`][crate::SimHandle] surface.
#[derive(Debug, Error)]
pub enum SimError {
    /// An operation was called before any `init_*` succeeded.
    #[error("simulation is not initialised")]
    NotInitialized,

    /// An `init_*` was called on an already-initialised handle.
    #[error("simulation is already initialised")]
    AlreadyInitialized,

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Load(#[from] LoadError),
}

pub type SimResult<T> = Result<T, SimError>;

/// What went wrong with one batch scenario.
#[derive(Debug, Error)]
pub enum BatchErrorKind {
    #[error(transparent)]
    Load(LoadError),

    /// The batch was aborted before this scenario completed.
    #[error("aborted")]
    Aborted,

    /// The scenario exceeded the tick cap without finishing — impossible for
    /// a validly loaded pair and reported rather than spun on.
    #[error("exceeded tick cap without finishing")]
    Runaway,
}

/// A failure scoped to one index of a batch; sibling scenarios are
/// unaffected.
#[derive(Debug, Error)]
#[error("scenario {index}: {kind}")]
pub struct BatchItemError {
    pub index: usize,
    #[source]
    pub kind: BatchErrorKind,
}
