use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{IntoSequence, Sequence};

/// Sequence over a borrowed slice, yielding clones of its elements. The
/// position is an atomic index, advanced only while it is in bounds.
#[derive(Debug)]
pub struct SliceSequence<'a, T> {
    slice: &'a [T],
    index: AtomicUsize,
}

impl<'a, T> SliceSequence<'a, T> {
    pub fn new(slice: &'a [T]) -> Self {
        Self {
            slice,
            index: AtomicUsize::new(0),
        }
    }
}

impl<'a, T> IntoSequence for &'a [T]
where
    T: Clone,
{
    type Item = T;
    type Seq = SliceSequence<'a, T>;

    fn into_seq(self) -> Self::Seq {
        SliceSequence::new(self)
    }
}

impl<'a, T> IntoSequence for &'a Vec<T>
where
    T: Clone,
{
    type Item = T;
    type Seq = SliceSequence<'a, T>;

    fn into_seq(self) -> Self::Seq {
        SliceSequence::new(self)
    }
}

impl<'a, T> Sequence for SliceSequence<'a, T>
where
    T: Clone,
{
    type Item = T;

    fn pull(&self) -> Option<Self::Item> {
        let len = self.slice.len();
        let index = self
            .index
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |index| {
                (index < len).then(|| index + 1)
            })
            .ok()?;

        Some(self.slice[index].clone())
    }
}
