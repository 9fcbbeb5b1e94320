use std::panic::resume_unwind;
use std::thread::{self, ScopedJoinHandle};

use tracing::debug;

use crate::{error::Error, Combiner, Executor, Sequence};

use super::misc::{check_workers, default_workers, drain, merge};

/// Parallel reduction on a fixed pool of scoped OS threads.
///
/// Every worker pulls from the same shared sequence until it is exhausted,
/// folding whatever it pulled into a partial result. Values go to whichever
/// worker pulls next, so the load balances itself regardless of how
/// expensive single values are. Once all workers are joined, the partial
/// results are merged in worker order with the same combiner.
///
/// The sequence has to serialize concurrent pulls itself (every sequence of
/// this crate does). Workers that never got a value contribute the default
/// value of `T`, so an empty sequence reduces to the default folded with
/// itself once per worker.
///
/// A panic inside a worker is re-raised on the calling thread after all
/// other workers finished.
///
/// The worker count given to [`new`] is a default that a
/// [`with_workers`](crate::Sequence::with_workers) hint on the sequence
/// replaces; the count given to [`fixed`] is used as is.
///
/// [`new`]: #method.new
/// [`fixed`]: #method.fixed
#[derive(Debug, Clone, Copy)]
pub struct Threads {
    workers: usize,
    fixed: bool,
}

impl Threads {
    /// Executor running `workers` threads unless the sequence asks for a
    /// different count. A worker count of zero is rejected when the
    /// executor is run.
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            fixed: false,
        }
    }

    /// Executor running exactly `workers` threads, ignoring worker hints of
    /// the sequence.
    pub fn fixed(workers: usize) -> Self {
        Self {
            workers,
            fixed: true,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Default for Threads {
    fn default() -> Self {
        Self::new(default_workers())
    }
}

impl<S, C, T> Executor<S, C> for Threads
where
    S: Sequence<Item = T> + Sync + ?Sized,
    C: Combiner<T> + Sync + ?Sized,
    T: Send + Default,
{
    type Result = Result<T, Error>;

    fn exec(self, sequence: &S, combiner: &C) -> Self::Result {
        let workers = if self.fixed {
            self.workers
        } else {
            sequence.setup().workers.unwrap_or(self.workers)
        };
        let workers = check_workers(workers)?;

        debug!(workers, "starting parallel reduction");

        let partials = thread::scope(|scope| -> Result<Vec<T>, Error> {
            let handles = (0..workers)
                .map(|id| {
                    thread::Builder::new()
                        .name(format!("reduce-worker-{}", id))
                        .spawn_scoped(scope, move || drain(id, sequence, combiner))
                        .map_err(|err| Error::Spawn(id, err))
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(handles.into_iter().map(join).collect())
        })?;

        debug!(workers, "all workers finished, merging partial results");

        Ok(merge(partials, combiner))
    }
}

fn join<T>(handle: ScopedJoinHandle<'_, T>) -> T {
    match handle.join() {
        Ok(partial) => partial,
        Err(payload) => resume_unwind(payload),
    }
}
