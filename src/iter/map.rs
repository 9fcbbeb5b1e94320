use crate::{Sequence, Setup};

/* Map */

/// Sequence returned by [`Sequence::map`].
pub struct Map<S, O> {
    base: S,
    operation: O,
}

impl<S, O> Map<S, O> {
    pub fn new(base: S, operation: O) -> Self {
        Self { base, operation }
    }
}

impl<S, O, T> Sequence for Map<S, O>
where
    S: Sequence,
    O: Fn(S::Item) -> T,
{
    type Item = T;

    fn pull(&self) -> Option<Self::Item> {
        self.base.pull().map(&self.operation)
    }

    fn setup(&self) -> Setup {
        self.base.setup()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_map() {
        let doubled = (1..6i32).into_seq().map(|x| x * 2);

        assert_eq!(doubled.to_vec(), [2, 4, 6, 8, 10]);
        assert_eq!(None, doubled.pull());
    }

    #[test]
    fn test_map_changes_type() {
        let strings = vec![1, 2, 3].into_seq().map(|x: i32| x.to_string());

        assert_eq!(strings.to_vec(), ["1", "2", "3"]);
    }

    #[test]
    fn test_map_is_lazy() {
        use ::std::sync::atomic::{AtomicUsize, Ordering};

        let calls = AtomicUsize::new(0);
        let seq = vec![1, 2, 3].into_seq().map(|x: i32| {
            calls.fetch_add(1, Ordering::Relaxed);

            x
        });

        assert_eq!(0, calls.load(Ordering::Relaxed));
        assert_eq!(Some(1), seq.pull());
        assert_eq!(1, calls.load(Ordering::Relaxed));
    }
}
