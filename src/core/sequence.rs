use super::{IntoSequence, Setup};

use crate::iter::{
    chain::Chain, filter::Filter, inspect::Inspect, map::Map, reduce::Reduce, setup::WithWorkers,
    stop::Stoppable,
};

/// Pull-based producer of values.
///
/// Every call to [`pull`] hands out the next value of the sequence, or
/// `None` once the sequence is exhausted. Pulls take `&self`: sequences that
/// keep a cursor serialize it internally, so a `Sync` sequence can be shared
/// by reference between any number of workers, and each value is delivered
/// to exactly one caller.
///
/// Implementations must never resurrect: once `pull` returned `None`, every
/// following call has to return `None` as well. The parallel executors rely
/// on this to detect the end of the data without any further coordination.
///
/// [`pull`]: #tymethod.pull
pub trait Sequence {
    /// The type of value this sequence produces.
    type Item;

    /// Returns the next value, or `None` if the sequence is exhausted.
    fn pull(&self) -> Option<Self::Item>;

    /// Execution hints carried by this sequence. See [`with_workers`].
    ///
    /// [`with_workers`]: #method.with_workers
    fn setup(&self) -> Setup {
        Setup::default()
    }

    /// Applies `operation` to each value of this sequence, producing a new
    /// sequence with the results. The operation runs inside `pull`, on the
    /// thread that pulled the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullreduce::*;
    ///
    /// let doubles = vec![1, 2, 3].into_seq().map(|x| x * 2).to_vec();
    ///
    /// assert_eq!(doubles, [2, 4, 6]);
    /// ```
    fn map<O, T>(self, operation: O) -> Map<Self, O>
    where
        Self: Sized,
        O: Fn(Self::Item) -> T,
    {
        Map::new(self, operation)
    }

    /// Creates a sequence which only yields the values for which `operation`
    /// returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullreduce::*;
    ///
    /// let even = (1..6u32).into_seq().filter(|x| x % 2 == 0).to_vec();
    ///
    /// assert_eq!(even, [2, 4]);
    /// ```
    fn filter<O>(self, operation: O) -> Filter<Self, O>
    where
        Self: Sized,
        O: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, operation)
    }

    /// Calls `operation` with a reference to each value before passing it on.
    fn inspect<O>(self, operation: O) -> Inspect<Self, O>
    where
        Self: Sized,
        O: Fn(&Self::Item),
    {
        Inspect::new(self, operation)
    }

    /// Takes two sequences and creates a new sequence over both, yielding
    /// all values of `self` first.
    fn chain<S>(self, other: S) -> Chain<Self, S::Seq>
    where
        Self: Sized,
        S: IntoSequence<Item = Self::Item>,
    {
        Chain::new(self, other.into_seq())
    }

    /// Wraps this sequence so it can be stopped from the outside. Once the
    /// returned [`StopHandle`] is triggered every pull reports exhaustion,
    /// which makes running reductions finish early.
    ///
    /// [`StopHandle`]: crate::StopHandle
    fn stoppable(self) -> Stoppable<Self>
    where
        Self: Sized,
    {
        Stoppable::new(self)
    }

    /// Requests `workers` parallel workers for reductions of this sequence,
    /// replacing the default count of executors built with
    /// [`Threads::new`](crate::Threads::new). A count fixed by the caller, as
    /// in [`parallel_reduce`](crate::parallel_reduce), still wins.
    fn with_workers(self, workers: usize) -> WithWorkers<Self>
    where
        Self: Sized,
    {
        WithWorkers::new(self, workers)
    }

    /// Reduces the values of this sequence with `operation`. Nothing is
    /// pulled until the returned driver is executed.
    ///
    /// `operation` should be associative for parallel executors; see
    /// [`Combiner`](crate::Combiner) for the details.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullreduce::*;
    ///
    /// let seq = vec![1, 2, 3, 4, 5, 6, 7, 8].into_seq();
    ///
    /// assert_eq!(36, seq.reduce(|a, b| a + b).exec_with(Threads::new(32)).unwrap());
    /// ```
    fn reduce<O>(&self, operation: O) -> Reduce<'_, Self, O>
    where
        O: Fn(Self::Item, Self::Item) -> Self::Item,
    {
        Reduce::new(self, operation)
    }

    /// Borrows this sequence as a standard [`Iterator`].
    fn iter(&self) -> Pulls<'_, Self> {
        Pulls { sequence: self }
    }

    /// Pulls all remaining values into a vector.
    fn to_vec(&self) -> Vec<Self::Item> {
        self.iter().collect()
    }
}

impl<'a, S> Sequence for &'a S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn pull(&self) -> Option<Self::Item> {
        (**self).pull()
    }

    fn setup(&self) -> Setup {
        (**self).setup()
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn pull(&self) -> Option<Self::Item> {
        (**self).pull()
    }

    fn setup(&self) -> Setup {
        (**self).setup()
    }
}

/* Pulls */

/// Iterator returned by [`Sequence::iter`].
pub struct Pulls<'a, S: ?Sized> {
    sequence: &'a S,
}

impl<'a, S> Iterator for Pulls<'a, S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.pull()
    }
}

impl<'a, S> std::iter::FusedIterator for Pulls<'a, S> where S: Sequence + ?Sized {}
