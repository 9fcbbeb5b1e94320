use crate::{Sequence, Setup};

/* Filter */

/// Sequence returned by [`Sequence::filter`].
pub struct Filter<S, O> {
    base: S,
    operation: O,
}

impl<S, O> Filter<S, O> {
    pub fn new(base: S, operation: O) -> Self {
        Self { base, operation }
    }
}

impl<S, O> Sequence for Filter<S, O>
where
    S: Sequence,
    O: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&self) -> Option<Self::Item> {
        loop {
            let item = self.base.pull()?;

            if (self.operation)(&item) {
                return Some(item);
            }
        }
    }

    fn setup(&self) -> Setup {
        self.base.setup()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn even(value: &i32) -> bool {
        value % 2 == 0
    }

    #[test]
    fn test_filter() {
        let seq = vec![1, 2, 3, 4, 5].into_seq().filter(even);

        assert_eq!(seq.to_vec(), [2, 4]);
    }

    #[test]
    fn test_filter_rejecting_everything_is_exhausted() {
        let seq = vec![1, 3, 5].into_seq().filter(even);

        assert_eq!(None, seq.pull());
        assert_eq!(None, seq.pull());
    }

    #[test]
    fn test_map_over_filter() {
        let seq = vec![1, 2, 3, 4, 5].into_seq().filter(even).map(|x| x * 2);

        assert_eq!(seq.to_vec(), [4, 8]);
    }

    #[test]
    fn test_reduce_map_filter() {
        let seq = vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144]
            .into_seq()
            .filter(even)
            .map(|x| x.to_string())
            .filter(|s| s.len() > 1);

        assert_eq!("34144", reduce(|a, b| a + &b, seq));
    }
}
