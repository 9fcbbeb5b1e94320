use std::sync::Mutex;
use std::vec::IntoIter;

use crate::{misc::lock, IntoSequence, Sequence};

/// Sequence that moves out of a vector. The position is guarded by a mutex,
/// so concurrent pulls each receive a different value.
#[derive(Debug)]
pub struct VecSequence<T> {
    items: Mutex<IntoIter<T>>,
}

impl<T> VecSequence<T> {
    pub fn new(vec: Vec<T>) -> Self {
        Self {
            items: Mutex::new(vec.into_iter()),
        }
    }

    /// Number of values not pulled yet.
    pub fn remaining(&self) -> usize {
        lock(&self.items).len()
    }
}

impl<T> From<Vec<T>> for VecSequence<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::new(vec)
    }
}

impl<T> IntoSequence for Vec<T> {
    type Item = T;
    type Seq = VecSequence<T>;

    fn into_seq(self) -> Self::Seq {
        VecSequence::new(self)
    }
}

impl<T, const N: usize> IntoSequence for [T; N] {
    type Item = T;
    type Seq = VecSequence<T>;

    fn into_seq(self) -> Self::Seq {
        VecSequence::new(Vec::from(self))
    }
}

impl<T> Sequence for VecSequence<T> {
    type Item = T;

    fn pull(&self) -> Option<Self::Item> {
        lock(&self.items).next()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_vec_sequence() {
        let seq = vec!["a", "b"].into_seq();

        assert_eq!(2, seq.remaining());
        assert_eq!(Some("a"), seq.pull());
        assert_eq!(Some("b"), seq.pull());
        assert_eq!(None, seq.pull());
        assert_eq!(None, seq.pull());
        assert_eq!(0, seq.remaining());
    }

    #[test]
    fn test_array_sequence() {
        assert_eq!([1, 2, 3].into_seq().to_vec(), [1, 2, 3]);
    }
}
