use std::iter::{Fuse, FromFn};
use std::sync::Mutex;

use crate::{misc::lock, Sequence};

/// Sequence that pulls from an [`Iterator`] behind a mutex, see
/// [`from_iter`].
#[derive(Debug)]
pub struct IterSequence<I> {
    iter: Mutex<Fuse<I>>,
}

impl<I> IterSequence<I>
where
    I: Iterator,
{
    pub fn new(iter: I) -> Self {
        Self {
            iter: Mutex::new(iter.fuse()),
        }
    }
}

/// Presents any iterator as a sequence. The iterator may be infinite; it is
/// fused so it never yields values again after returning `None` once.
/// The sequence is `Sync` if the iterator is `Send`.
pub fn from_iter<I>(iter: I) -> IterSequence<I::IntoIter>
where
    I: IntoIterator,
{
    IterSequence::new(iter.into_iter())
}

/// Sequence producing values by calling `f` until it returns `None`.
pub fn from_fn<T, F>(f: F) -> IterSequence<FromFn<F>>
where
    F: FnMut() -> Option<T>,
{
    IterSequence::new(std::iter::from_fn(f))
}

impl<I> Sequence for IterSequence<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn pull(&self) -> Option<Self::Item> {
        lock(&self.iter).next()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_from_iter() {
        let seq = from_iter("abc".chars());

        assert_eq!(seq.to_vec(), ['a', 'b', 'c']);
    }

    #[test]
    fn test_from_fn_is_fused() {
        let mut calls = 0;
        let seq = from_fn(move || {
            calls += 1;

            match calls {
                1 => Some(1),
                2 => None,
                _ => Some(3),
            }
        });

        assert_eq!(Some(1), seq.pull());
        assert_eq!(None, seq.pull());
        assert_eq!(None, seq.pull());
    }
}
