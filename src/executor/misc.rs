use tracing::trace;

use crate::{
    core::{CombineFolder, Folder},
    error::{Error, Result},
    Combiner, Sequence,
};

/// Number of workers per available CPU the parallel executors start by
/// default.
pub const DEFAULT_WORKERS_PER_CPU: usize = 8;

/// Default worker count of the [`Threads`](crate::Threads) executor.
pub fn default_workers() -> usize {
    DEFAULT_WORKERS_PER_CPU * num_cpus::get()
}

pub(crate) fn check_workers(workers: usize) -> Result<usize> {
    if workers == 0 {
        Err(Error::InvalidWorkerCount(workers))
    } else {
        Ok(workers)
    }
}

/// Body of a single worker: pull until the shared sequence is exhausted and
/// fold everything pulled into one partial result.
pub(crate) fn drain<S, C, T>(id: usize, sequence: &S, combiner: &C) -> T
where
    S: Sequence<Item = T> + ?Sized,
    C: Combiner<T> + ?Sized,
    T: Default,
{
    let folder = CombineFolder::new(combiner).consume_iter(sequence.iter());

    trace!(worker = id, pulled = folder.count(), "worker drained sequence");

    folder.complete()
}

/// Fold the partial results in worker order.
pub(crate) fn merge<C, T>(partials: Vec<T>, combiner: &C) -> T
where
    C: Combiner<T> + ?Sized,
    T: Default,
{
    CombineFolder::new(combiner).consume_iter(partials).complete()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_workers() {
        assert!(matches!(check_workers(0), Err(Error::InvalidWorkerCount(0))));
        assert_eq!(3, check_workers(3).unwrap());
    }

    #[test]
    fn test_default_workers() {
        assert!(default_workers() >= DEFAULT_WORKERS_PER_CPU);
        assert_eq!(0, default_workers() % DEFAULT_WORKERS_PER_CPU);
    }

    #[test]
    fn test_merge_keeps_worker_order() {
        let concat = |a: String, b: String| a + &b;
        let partials = vec!["0".to_owned(), "1".to_owned(), "2".to_owned()];

        assert_eq!("012", merge(partials, &concat));
    }
}
