use crate::{
    core::{CombineFolder, Driver, Folder},
    error::Result,
    Executor, IntoSequence, Sequence, Threads,
};

/* Reduce */

/// Driver returned by [`Sequence::reduce`].
pub struct Reduce<'s, S: ?Sized, O> {
    sequence: &'s S,
    operation: O,
}

impl<'s, S: ?Sized, O> Reduce<'s, S, O> {
    pub fn new(sequence: &'s S, operation: O) -> Self {
        Self {
            sequence,
            operation,
        }
    }
}

impl<'s, S, O> Driver for Reduce<'s, S, O>
where
    S: Sequence + ?Sized,
    O: Fn(S::Item, S::Item) -> S::Item,
{
    type Seq = S;
    type Op = O;

    fn exec_with<E>(self, executor: E) -> E::Result
    where
        E: Executor<S, O>,
    {
        executor.exec(self.sequence, &self.operation)
    }
}

/// Reduces `sequence` on the calling thread. The first value is the
/// running result, every following value is folded into it with
/// `combiner(running, value)`. An empty sequence reduces to the default
/// value of the item type; an infinite one never returns.
///
/// # Examples
///
/// ```
/// use pullreduce::*;
///
/// assert_eq!(15, reduce(|a, b| a + b, vec![1, 2, 3, 4, 5]));
/// assert_eq!(0, reduce(|a, b| a + b, Vec::<i32>::new()));
/// ```
pub fn reduce<C, S>(combiner: C, sequence: S) -> S::Item
where
    S: IntoSequence,
    S::Item: Default,
    C: Fn(S::Item, S::Item) -> S::Item,
{
    let sequence = sequence.into_seq();

    CombineFolder::new(&combiner)
        .consume_iter(sequence.iter())
        .complete()
}

/// Reduces `sequence` with exactly `workers` threads pulling from it
/// concurrently, see [`Threads`] for how the work is split. A
/// [`with_workers`] hint on the sequence is ignored. Pass
/// [`default_workers()`] for the platform default.
///
/// `combiner` must be associative, and commutative for the result to be
/// reproducible. An empty sequence reduces to the default value folded
/// once per worker.
///
/// # Errors
///
/// Fails with [`Error::InvalidWorkerCount`] if `workers` is zero, and with
/// [`Error::Spawn`] if a worker thread could not be started.
///
/// [`with_workers`]: crate::Sequence::with_workers
/// [`default_workers()`]: crate::default_workers
/// [`Error::InvalidWorkerCount`]: crate::Error::InvalidWorkerCount
/// [`Error::Spawn`]: crate::Error::Spawn
///
/// # Examples
///
/// ```
/// use pullreduce::*;
///
/// let sum = parallel_reduce(|a, b| a + b, vec![1, 2, 3, 4, 5, 6, 7, 8], 32).unwrap();
///
/// assert_eq!(36, sum);
/// ```
pub fn parallel_reduce<C, S>(combiner: C, sequence: S, workers: usize) -> Result<S::Item>
where
    S: IntoSequence,
    S::Seq: Sync,
    S::Item: Send + Default,
    C: Fn(S::Item, S::Item) -> S::Item + Sync,
{
    let sequence = sequence.into_seq();

    <Threads as Executor<S::Seq, C>>::exec(Threads::fixed(workers), &sequence, &combiner)
}
