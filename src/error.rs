//! Errors returned by the parallel executors.

use thiserror::Error;

/// Error type for parallel reductions.
#[derive(Error, Debug)]
pub enum Error {
    /// Raised before any worker is started.
    #[error("worker count must be positive, got {0}")]
    InvalidWorkerCount(usize),
    /// The thread for the given worker could not be started. Workers
    /// spawned before it still run to completion and are joined before the
    /// error is returned; the values they pulled are lost.
    #[error("failed to spawn reduce worker {0}: {1}")]
    Spawn(usize, #[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
