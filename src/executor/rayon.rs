use rayon_core::{current_num_threads, scope};
use tracing::debug;

use crate::{error::Error, Combiner, Executor, Sequence};

use super::misc::{check_workers, drain, merge, DEFAULT_WORKERS_PER_CPU};

/// Parallel reduction with the workers running as tasks on the global
/// rayon thread pool.
///
/// Works like [`Threads`](crate::Threads), but does not create any threads
/// itself. If there are more workers than pool threads, the surplus workers
/// start once earlier ones are done and usually find the sequence already
/// exhausted.
#[derive(Debug, Clone, Copy)]
pub struct Rayon {
    workers: usize,
}

impl Rayon {
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }
}

impl Default for Rayon {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS_PER_CPU * current_num_threads(),
        }
    }
}

impl<S, C, T> Executor<S, C> for Rayon
where
    S: Sequence<Item = T> + Sync + ?Sized,
    C: Combiner<T> + Sync + ?Sized,
    T: Send + Default,
{
    type Result = Result<T, Error>;

    fn exec(self, sequence: &S, combiner: &C) -> Self::Result {
        let setup = sequence.setup();
        let workers = check_workers(setup.workers.unwrap_or(self.workers))?;

        debug!(workers, "starting parallel reduction on rayon pool");

        let mut partials = (0..workers).map(|_| T::default()).collect::<Vec<_>>();

        scope(|s| {
            for (id, slot) in partials.iter_mut().enumerate() {
                s.spawn(move |_| *slot = drain(id, sequence, combiner));
            }
        });

        debug!(workers, "all workers finished, merging partial results");

        Ok(merge(partials, combiner))
    }
}

#[cfg(test)]
mod tests {
    use ::std::sync::Mutex;

    use crate::*;

    #[test]
    fn test_rayon_reduce() {
        let seq = vec![1, 2, 3, 4, 5, 6, 7, 8].into_seq();

        assert_eq!(36, seq.reduce(|a, b| a + b).exec_with(Rayon::new(32)).unwrap());
    }

    #[test]
    fn test_rayon_every_value_is_pulled_exactly_once() {
        let pulled = Mutex::new(Vec::new());
        let seq = (0..2_000u64)
            .into_seq()
            .inspect(|x| pulled.lock().unwrap().push(*x));

        let sum = seq.reduce(|a, b| a + b).exec_with(Rayon::default()).unwrap();
        drop(seq);

        let mut pulled = pulled.into_inner().unwrap();
        pulled.sort_unstable();

        assert_eq!((0..2_000u64).sum::<u64>(), sum);
        assert_eq!(pulled, (0..2_000).collect::<Vec<_>>());
    }

    #[test]
    fn test_rayon_zero_workers_is_rejected() {
        let seq = Vec::<u8>::new().into_seq();

        let res = seq.reduce(|a, b| a + b).exec_with(Rayon::new(0));

        assert!(matches!(res, Err(Error::InvalidWorkerCount(0))));
    }
}
