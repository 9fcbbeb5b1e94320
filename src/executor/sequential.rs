use crate::{
    core::{CombineFolder, Folder},
    Combiner, Executor, Sequence,
};

/// Reduces on the calling thread, folding values left to right in the
/// order the sequence emits them. An empty sequence reduces to the default
/// value of the item type.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sequential;

impl<S, C> Executor<S, C> for Sequential
where
    S: Sequence + ?Sized,
    S::Item: Default,
    C: Combiner<S::Item> + ?Sized,
{
    type Result = S::Item;

    fn exec(self, sequence: &S, combiner: &C) -> Self::Result {
        CombineFolder::new(combiner)
            .consume_iter(sequence.iter())
            .complete()
    }
}

#[cfg(test)]
mod tests {
    use ::std::cell::Cell;

    use crate::*;

    #[test]
    fn test_sequential_accepts_unsynchronized_sequence() {
        let pulls = Cell::new(0);
        let seq = vec![1, 2, 3, 4].into_seq().inspect(|_| pulls.set(pulls.get() + 1));

        assert_eq!(10, seq.reduce(|a, b| a + b).exec_with(Sequential));
        assert_eq!(4, pulls.get());
    }
}
