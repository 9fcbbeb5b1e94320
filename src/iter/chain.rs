use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::{IntoSequence, Sequence, Setup};

/* Chain */

/// Sequence returned by [`Sequence::chain`].
///
/// Needs no lock of its own: once the first sequence reported exhaustion it
/// keeps doing so, so concurrent callers racing on the switch to the second
/// sequence can not lose or duplicate values.
pub struct Chain<S1, S2> {
    sequence_1: S1,
    sequence_2: S2,
    first_done: AtomicBool,
}

impl<S1, S2> Chain<S1, S2> {
    pub fn new(sequence_1: S1, sequence_2: S2) -> Self {
        Self {
            sequence_1,
            sequence_2,
            first_done: AtomicBool::new(false),
        }
    }
}

impl<S1, S2, T> Sequence for Chain<S1, S2>
where
    S1: Sequence<Item = T>,
    S2: Sequence<Item = T>,
{
    type Item = T;

    fn pull(&self) -> Option<Self::Item> {
        if !self.first_done.load(Ordering::Acquire) {
            if let Some(item) = self.sequence_1.pull() {
                return Some(item);
            }

            self.first_done.store(true, Ordering::Release);
        }

        self.sequence_2.pull()
    }

    fn setup(&self) -> Setup {
        self.sequence_1.setup().merge(self.sequence_2.setup())
    }
}

/* Joint */

/// Any number of sequences of the same type, pulled one after another.
pub struct Joint<S> {
    sequences: Vec<S>,
    current: AtomicUsize,
}

impl<S> Joint<S> {
    pub fn new(sequences: Vec<S>) -> Self {
        Self {
            sequences,
            current: AtomicUsize::new(0),
        }
    }
}

/// Joins all sequences yielded by `sequences` into one.
///
/// # Examples
///
/// ```
/// use pullreduce::*;
///
/// let seq = joint(vec![vec![1, 2], vec![], vec![3]]);
///
/// assert_eq!(seq.to_vec(), [1, 2, 3]);
/// ```
pub fn joint<I>(sequences: I) -> Joint<<I::Item as IntoSequence>::Seq>
where
    I: IntoIterator,
    I::Item: IntoSequence,
{
    Joint::new(sequences.into_iter().map(IntoSequence::into_seq).collect())
}

impl<S> Sequence for Joint<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn pull(&self) -> Option<Self::Item> {
        let mut index = self.current.load(Ordering::Acquire);

        while let Some(sequence) = self.sequences.get(index) {
            if let Some(item) = sequence.pull() {
                return Some(item);
            }

            index = match self.current.compare_exchange(
                index,
                index + 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => index + 1,
                Err(current) => current,
            };
        }

        None
    }

    fn setup(&self) -> Setup {
        self.sequences
            .iter()
            .fold(Setup::default(), |setup, sequence| setup.merge(sequence.setup()))
    }
}
